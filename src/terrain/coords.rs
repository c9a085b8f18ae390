// src/terrain/coords.rs

/// Grid dimensions in vertices along X and Z, plus the noise sampling stride.
///
/// `res` only affects where the noise source is queried; it does not scale
/// the output mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSpecs {
    pub x_dim: usize,
    pub z_dim: usize,
    pub res: usize,
}

impl GridSpecs {
    pub fn new(x_dim: usize, z_dim: usize, res: usize) -> Self {
        Self { x_dim, z_dim, res }
    }

    /// Number of vertices in one copy of the grid.
    pub fn vertex_count(&self) -> usize {
        self.x_dim * self.z_dim
    }

    /// Number of quads. Zero for grids thinner than two vertices.
    pub fn cell_count(&self) -> usize {
        self.x_dim.saturating_sub(1) * self.z_dim.saturating_sub(1)
    }

    pub fn is_degenerate(&self) -> bool {
        self.x_dim < 2 || self.z_dim < 2
    }

    /// Flat index of grid coordinate `(i, j)`; `i` runs along X, `j` along Z.
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.x_dim && j < self.z_dim);
        i * self.z_dim + j
    }

    /// Inverse of [`GridSpecs::index`].
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.z_dim, index % self.z_dim)
    }

    /// Noise-space coordinate of grid index `i`, before modifier offsets.
    pub fn sample_coord(&self, i: usize) -> f64 {
        (i * self.res) as f64
    }

    /// Mesh-space X of grid column `i`.
    pub fn world_x(&self, i: usize) -> f32 {
        i as f32 - (self.x_dim * self.res / 2) as f32
    }

    /// Mesh-space Z of grid row `j`.
    pub fn world_z(&self, j: usize) -> f32 {
        j as f32 - (self.z_dim * self.res / 2) as f32
    }
}

impl Default for GridSpecs {
    fn default() -> Self {
        Self { x_dim: 10, z_dim: 10, res: 1 }
    }
}

/// One of the three principal axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `[f32; 3]`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The fixed axis followed by the two axes spanning the plane it is normal to.
    pub fn permutation(self) -> [usize; 3] {
        let d0 = self.index();
        let d1 = (d0 + 1) % 3;
        let d2 = (d1 + 1) % 3;
        [d0, d1, d2]
    }
}
