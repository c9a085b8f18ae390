// src/terrain/config.rs

use crate::terrain::{
    coords::{Axis, GridSpecs},
    generator::{FrameBand, NoiseModifiers},
    vertex::{FRAME_COLOR, GRID_COLOR},
};

/// Parameters of the fractal noise source.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseConfig {
    pub seed: u32,
    pub base_frequency: f64,
    pub octaves: usize,
    pub persistence: f64,
    pub lacunarity: f64,
    /// Output is scaled into `[-height_range, height_range]`.
    pub height_range: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 345,
            base_frequency: 0.1,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            height_range: 10.0,
        }
    }
}

/// Everything needed to build and animate a terrain mesh.
#[derive(Clone, Debug)]
pub struct TerrainConfig {
    pub grid: GridSpecs,
    pub noise: NoiseConfig,
    pub modifiers: NoiseModifiers,
    /// Frames per morph cycle.
    pub transition_length: u32,
    pub frame_bands: Vec<FrameBand>,
    pub frame_thickness: f32,
    pub grid_color: u32,
    pub frame_color: u32,
}

impl TerrainConfig {
    pub fn with_grid(mut self, grid: GridSpecs) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_modifiers(mut self, modifiers: NoiseModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_transition_length(mut self, frames: u32) -> Self {
        self.transition_length = frames;
        self
    }

    pub fn with_frame_bands(mut self, bands: Vec<FrameBand>) -> Self {
        self.frame_bands = bands;
        self
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid: GridSpecs::default(),
            noise: NoiseConfig::default(),
            modifiers: NoiseModifiers::default(),
            transition_length: 60,
            frame_bands: vec![
                FrameBand::new(Axis::Z, [0.0, 0.0, 0.0], 10.0, 10.0),
                FrameBand::new(Axis::Y, [0.0, 0.0, 0.0], 10.0, 10.0),
            ],
            frame_thickness: 1.0,
            grid_color: GRID_COLOR,
            frame_color: FRAME_COLOR,
        }
    }
}
