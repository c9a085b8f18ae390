use log::{debug, warn};

use crate::terrain::{
    config::TerrainConfig,
    coords::GridSpecs,
    error::MeshError,
    generator::{
        frame::{FrameBand, FRAME_INDEX_COUNT, FRAME_VERTEX_COUNT},
        heightmap::{HeightSampler, NoiseSource},
        normals::estimate_normals,
    },
    vertex::{Vertex, VertexLayout},
};

const INDICES_PER_CELL: usize = 12;

/// A double-sided terrain grid plus its frame bands.
///
/// Vertex buffer layout:
/// `[grid copy 0 | grid copy 1 | frame bands]`, where both grid copies hold
/// `x_dim * z_dim` vertices with identical positions and independently
/// estimated normals. Index buffer layout: 12 indices per grid cell
/// (6 on copy 0, 6 on copy 1) followed by 48 per frame band.
pub struct TerrainMesh {
    sampler: HeightSampler,
    layout: VertexLayout,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    band_count: usize,
    dirty: bool,
}

impl TerrainMesh {
    /// Samples `noise` over the configured grid and builds the full mesh.
    pub fn build<N: NoiseSource + ?Sized>(
        config: &TerrainConfig,
        noise: &N,
    ) -> Result<Self, MeshError> {
        let specs = config.grid;
        if specs.is_degenerate() {
            warn!(
                "Degenerate grid {}x{}: building frame geometry only",
                specs.x_dim, specs.z_dim
            );
        }

        let band_count = config.frame_bands.len();
        let grid_vertices = specs.vertex_count();
        let vertex_count = grid_vertices * 2 + band_count * FRAME_VERTEX_COUNT;
        let index_count = specs.cell_count() * INDICES_PER_CELL + band_count * FRAME_INDEX_COUNT;

        let mut mesh = Self {
            sampler: HeightSampler::new(specs, config.modifiers.clone()),
            layout: VertexLayout::pos_normal_color(),
            vertices: vec![Vertex::default(); vertex_count],
            indices: vec![0; index_count],
            band_count,
            dirty: true,
        };

        mesh.add_grid_vertices(noise, config.grid_color);
        mesh.add_grid_indices();
        estimate_normals(&mut mesh.vertices, &specs);
        mesh.add_frames(&config.frame_bands, config.frame_thickness, config.frame_color)?;

        debug!(
            "Built terrain mesh {}x{} (res {}): {} vertices, {} indices",
            specs.x_dim,
            specs.z_dim,
            specs.res,
            mesh.vertices.len(),
            mesh.indices.len()
        );

        Ok(mesh)
    }

    fn add_grid_vertices<N: NoiseSource + ?Sized>(&mut self, noise: &N, color: u32) {
        let specs = *self.sampler.specs();
        let offset = specs.vertex_count();

        for i in 0..specs.x_dim {
            for j in 0..specs.z_dim {
                let idx = specs.index(i, j);
                let position = [
                    specs.world_x(i),
                    self.sampler.sample(noise, i, j),
                    specs.world_z(j),
                ];
                let v = Vertex::new(position, color);
                self.vertices[idx] = v;
                self.vertices[idx + offset] = v;
            }
        }
    }

    fn add_grid_indices(&mut self) {
        let specs = *self.sampler.specs();
        if specs.is_degenerate() {
            return;
        }

        let offset = specs.vertex_count() as u32;
        let cells_z = specs.z_dim - 1;

        for i in 0..specs.x_dim - 1 {
            for j in 0..cells_z {
                let v1 = specs.index(i, j) as u32;
                let v2 = v1 + 1;
                let v3 = v1 + specs.z_dim as u32;
                let v4 = v3 + 1;

                let (m2, m3, m4) = (v2 + offset, v3 + offset, v4 + offset);

                let start = (i * cells_z + j) * INDICES_PER_CELL;
                self.indices[start..start + INDICES_PER_CELL].copy_from_slice(&[
                    // first triangle of the cell, both windings
                    v3, v2, v1, v2, v3, v1,
                    // second triangle, on the mirror copy
                    m3, m4, m2, m4, m3, m2,
                ]);
            }
        }
    }

    fn add_frames(
        &mut self,
        bands: &[FrameBand],
        thickness: f32,
        color: u32,
    ) -> Result<(), MeshError> {
        let mut vertex_offset = self.grid_vertex_count() * 2;
        let mut index_offset = self.grid_index_count();

        for band in bands {
            band.write(
                thickness,
                color,
                vertex_offset,
                index_offset,
                &mut self.vertices,
                &mut self.indices,
            )?;
            vertex_offset += FRAME_VERTEX_COUNT;
            index_offset += FRAME_INDEX_COUNT;
        }

        Ok(())
    }

    /// Rewrites the height of every grid vertex in both copies.
    ///
    /// `f` receives the grid index and current height and returns the new
    /// height. Normals are recomputed afterwards and the mesh is marked dirty.
    pub fn update_heights<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, f32) -> f32,
    {
        let specs = *self.sampler.specs();
        let offset = specs.vertex_count();
        let (primary, rest) = self.vertices.split_at_mut(offset);

        for (i, (a, b)) in primary.iter_mut().zip(&mut rest[..offset]).enumerate() {
            debug_assert_eq!(a.position, b.position);
            let y = f(i, a.position[1]);
            a.position[1] = y;
            b.position[1] = y;
        }

        estimate_normals(&mut self.vertices, &specs);
        self.dirty = true;
    }

    /// Current height of every grid vertex, in grid order.
    pub fn heights(&self) -> Vec<f32> {
        self.grid_vertices().iter().map(Vertex::height).collect()
    }

    pub fn sampler(&self) -> &HeightSampler {
        &self.sampler
    }

    pub fn specs(&self) -> &GridSpecs {
        self.sampler.specs()
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Vertices per grid copy.
    pub fn grid_vertex_count(&self) -> usize {
        self.specs().vertex_count()
    }

    pub fn grid_index_count(&self) -> usize {
        self.specs().cell_count() * INDICES_PER_CELL
    }

    pub fn grid_vertices(&self) -> &[Vertex] {
        &self.vertices[..self.grid_vertex_count()]
    }

    pub fn mirror_vertices(&self) -> &[Vertex] {
        let n = self.grid_vertex_count();
        &self.vertices[n..n * 2]
    }

    pub fn frame_vertices(&self) -> &[Vertex] {
        &self.vertices[self.grid_vertex_count() * 2..]
    }

    pub fn frame_indices(&self) -> &[u32] {
        &self.indices[self.grid_index_count()..]
    }

    pub fn frame_band_count(&self) -> usize {
        self.band_count
    }

    /// True when the vertex data changed since the last [`mark_clean`](Self::mark_clean).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the renderer once it has uploaded the current buffers.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
