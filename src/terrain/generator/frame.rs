use crate::terrain::{coords::Axis, error::MeshError, vertex::Vertex};

pub const FRAME_VERTEX_COUNT: usize = 12;
pub const FRAME_INDEX_COUNT: usize = 48;

// Offsets in units of the band thickness, three per rectangle corner. Each
// corner's triple forms the square that joins the two edges meeting there.
const FRAME_VERTS: [[f32; 2]; FRAME_VERTEX_COUNT] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [0.0, 0.0],
    [0.0, 1.0],
    [0.0, 0.0],
    [1.0, 0.0],
];

// Four edges, two triangles each, both windings.
const FRAME_INDICES: [u32; FRAME_INDEX_COUNT] = [
    1, 2, 4, 1, 4, 2, 1, 4, 3, 1, 3, 4, //
    4, 5, 7, 4, 7, 5, 4, 7, 6, 4, 6, 7, //
    7, 8, 10, 7, 10, 8, 7, 10, 9, 7, 9, 10, //
    10, 11, 1, 10, 1, 11, 10, 1, 0, 10, 0, 1,
];

/// A rectangular border band lying in the plane normal to `axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBand {
    pub axis: Axis,
    /// Corner of the band; its `axis` component fixes the plane.
    pub origin: [f32; 3],
    /// Outer extent along the first in-plane axis, `(axis + 1) % 3`.
    pub size1: f32,
    /// Outer extent along the second in-plane axis, `(axis + 2) % 3`.
    pub size2: f32,
}

impl FrameBand {
    pub fn new(axis: Axis, origin: [f32; 3], size1: f32, size2: f32) -> Self {
        Self {
            axis,
            origin,
            size1,
            size2,
        }
    }

    /// Writes the band's 12 vertices at `vertex_offset` and its 48 indices at
    /// `index_offset`, with indices pointing at the written vertices.
    pub fn write(
        &self,
        thickness: f32,
        color: u32,
        vertex_offset: usize,
        index_offset: usize,
        vertices: &mut [Vertex],
        indices: &mut [u32],
    ) -> Result<(), MeshError> {
        check_capacity(FRAME_VERTEX_COUNT, vertex_offset, vertices.len())?;
        check_capacity(FRAME_INDEX_COUNT, index_offset, indices.len())?;

        let [d0, d1, d2] = self.axis.permutation();
        let inner1 = (self.size1 - thickness).max(0.0);
        let inner2 = (self.size2 - thickness).max(0.0);
        let (o1, o2) = (self.origin[d1], self.origin[d2]);
        let corners = [
            [o1, o2],
            [o1 + inner1, o2],
            [o1 + inner1, o2 + inner2],
            [o1, o2 + inner2],
        ];

        let band = &mut vertices[vertex_offset..vertex_offset + FRAME_VERTEX_COUNT];
        for (k, v) in band.iter_mut().enumerate() {
            let corner = corners[k / 3];
            let mut position = [0.0; 3];
            position[d0] = self.origin[d0];
            position[d1] = corner[0] + FRAME_VERTS[k][0] * thickness;
            position[d2] = corner[1] + FRAME_VERTS[k][1] * thickness;
            *v = Vertex::new(position, color);
        }

        let base = vertex_offset as u32;
        for (dst, src) in indices[index_offset..index_offset + FRAME_INDEX_COUNT]
            .iter_mut()
            .zip(FRAME_INDICES)
        {
            *dst = src + base;
        }

        Ok(())
    }
}

fn check_capacity(needed: usize, offset: usize, len: usize) -> Result<(), MeshError> {
    let available = len.saturating_sub(offset);
    if available < needed {
        return Err(MeshError::FrameCapacity { needed, available });
    }
    Ok(())
}
