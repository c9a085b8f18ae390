use log::{debug, trace};

use crate::terrain::{
    config::TerrainConfig,
    error::MeshError,
    generator::{heightmap::NoiseSource, mesh::TerrainMesh},
};

/// What a single [`MorphAnimator::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorphStep {
    /// Frame within the cycle that was just applied.
    pub frame: u32,
    pub cycle: u64,
    /// Whether a new target field was sampled on this step.
    pub boundary: bool,
}

/// Morphs a [`TerrainMesh`] towards a freshly sampled height field every
/// `transition_length` frames.
///
/// Interpolation is relative: each frame adds a fixed per-vertex delta to the
/// current height, so rounding error accumulates across cycles.
pub struct MorphAnimator {
    transition_length: u32,
    frame: u32,
    cycle: u64,
    base_seed: u32,
    deltas: Vec<f32>,
}

impl MorphAnimator {
    pub fn new(transition_length: u32, base_seed: u32) -> Result<Self, MeshError> {
        if transition_length == 0 {
            return Err(MeshError::ZeroTransitionLength);
        }
        Ok(Self {
            transition_length,
            frame: 0,
            cycle: 0,
            base_seed,
            deltas: Vec::new(),
        })
    }

    pub fn from_config(config: &TerrainConfig) -> Result<Self, MeshError> {
        Self::new(config.transition_length, config.noise.seed)
    }

    /// Advances the mesh by one frame, resampling `noise` at cycle boundaries.
    pub fn step<N: NoiseSource + ?Sized>(
        &mut self,
        mesh: &mut TerrainMesh,
        noise: &mut N,
    ) -> Result<MorphStep, MeshError> {
        let boundary = self.frame == 0;
        if boundary {
            self.begin_cycle(mesh, noise);
        } else if self.deltas.len() != mesh.grid_vertex_count() {
            return Err(MeshError::GridMismatch {
                expected: self.deltas.len(),
                found: mesh.grid_vertex_count(),
            });
        }

        let deltas = &self.deltas;
        mesh.update_heights(|i, y| y + deltas[i]);

        let step = MorphStep {
            frame: self.frame,
            cycle: self.cycle,
            boundary,
        };
        trace!("Morph step {:?}", step);

        self.frame += 1;
        if self.frame == self.transition_length {
            self.frame = 0;
            self.cycle += 1;
        }

        Ok(step)
    }

    fn begin_cycle<N: NoiseSource + ?Sized>(&mut self, mesh: &TerrainMesh, noise: &mut N) {
        let seed = self.seed_for(self.cycle);
        noise.reseed(seed);
        debug!("Morph cycle {} targeting seed {}", self.cycle, seed);

        let target = mesh.sampler().sample_grid(&*noise);
        let frames = self.transition_length as f32;
        self.deltas = target
            .iter()
            .zip(mesh.grid_vertices())
            .map(|(new, v)| (new - v.height()) / frames)
            .collect();
    }

    /// Seed used for the target field of `cycle`.
    pub fn seed_for(&self, cycle: u64) -> u32 {
        self.base_seed.wrapping_add(1).wrapping_add(cycle as u32)
    }

    pub fn transition_length(&self) -> u32 {
        self.transition_length
    }

    /// Frame the next step will apply.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Fraction of the current cycle already applied, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        self.frame as f32 / self.transition_length as f32
    }

    /// Per-frame height step of each grid vertex for the current cycle.
    pub fn deltas(&self) -> &[f32] {
        &self.deltas
    }
}
