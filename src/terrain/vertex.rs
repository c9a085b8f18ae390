// src/terrain/vertex.rs

use bytemuck::{Pod, Zeroable};

/// Packed ABGR color used for the terrain surface.
pub const GRID_COLOR: u32 = 0xff66_6666;
/// Packed ABGR color used for frame bands.
pub const FRAME_COLOR: u32 = 0xffff_ffff;

/// Position, normal and packed color, laid out for direct upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Not normalized. Shaders must normalize before lighting.
    pub normal: [f32; 3],
    pub color: u32,
}

impl Vertex {
    pub fn new(position: [f32; 3], color: u32) -> Self {
        Self {
            position,
            normal: [0.0; 3],
            color,
        }
    }

    pub fn height(&self) -> f32 {
        self.position[1]
    }
}

/// What a vertex attribute carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Position,
    Normal,
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeFormat {
    Float32x3,
    /// Four unsigned bytes, normalized to `[0, 1]` by the backend.
    Unorm8x4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub kind: AttributeKind,
    pub format: AttributeFormat,
    pub offset: usize,
}

/// Describes the byte layout of [`Vertex`] for a graphics backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: usize,
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    pub fn pos_normal_color() -> Self {
        let vec3 = std::mem::size_of::<[f32; 3]>();
        Self {
            stride: std::mem::size_of::<Vertex>(),
            attributes: vec![
                VertexAttribute {
                    kind: AttributeKind::Position,
                    format: AttributeFormat::Float32x3,
                    offset: 0,
                },
                VertexAttribute {
                    kind: AttributeKind::Normal,
                    format: AttributeFormat::Float32x3,
                    offset: vec3,
                },
                VertexAttribute {
                    kind: AttributeKind::Color,
                    format: AttributeFormat::Unorm8x4,
                    offset: vec3 * 2,
                },
            ],
        }
    }

    pub fn attribute(&self, kind: AttributeKind) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.kind == kind)
    }
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::pos_normal_color()
    }
}
