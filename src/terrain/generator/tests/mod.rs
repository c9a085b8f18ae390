mod mesh_tests;

use crate::terrain::generator::NoiseSource;

/// Flat field at the current seed's height.
pub(crate) struct SeedNoise {
    pub seed: u32,
}

impl NoiseSource for SeedNoise {
    fn get(&self, _x: f64, _z: f64) -> f32 {
        self.seed as f32
    }

    fn reseed(&mut self, seed: u32) {
        self.seed = seed;
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}

/// Plane rising along X with slope equal to the seed.
pub(crate) struct SlopeNoise {
    pub seed: u32,
}

impl NoiseSource for SlopeNoise {
    fn get(&self, x: f64, _z: f64) -> f32 {
        self.seed as f32 * x as f32
    }

    fn reseed(&mut self, seed: u32) {
        self.seed = seed;
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}

/// Encodes the sampling coordinate as `x * 100 + z`.
pub(crate) struct RampNoise;

impl NoiseSource for RampNoise {
    fn get(&self, x: f64, z: f64) -> f32 {
        (x * 100.0 + z) as f32
    }

    fn reseed(&mut self, _seed: u32) {}

    fn seed(&self) -> u32 {
        0
    }
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
