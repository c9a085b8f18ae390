use noise::{NoiseFn, Perlin};

use crate::terrain::{config::NoiseConfig, coords::GridSpecs};

/// A reseedable 2D scalar field.
pub trait NoiseSource {
    fn get(&self, x: f64, z: f64) -> f32;
    fn reseed(&mut self, seed: u32);
    fn seed(&self) -> u32;
}

/// Fractal Perlin noise scaled into `[-height_range, height_range]`.
#[derive(Clone)]
pub struct FbmNoise {
    noise: Perlin,
    seed: u32,
    base_frequency: f64,
    octaves: usize,
    persistence: f64,
    lacunarity: f64,
    height_range: f32,
}

impl FbmNoise {
    pub fn new(seed: u32) -> Self {
        Self::from_config(&NoiseConfig {
            seed,
            ..NoiseConfig::default()
        })
    }

    pub fn from_config(config: &NoiseConfig) -> Self {
        Self {
            noise: Perlin::new(config.seed),
            seed: config.seed,
            base_frequency: config.base_frequency,
            octaves: config.octaves.max(1),
            persistence: config.persistence,
            lacunarity: config.lacunarity,
            height_range: config.height_range,
        }
    }
}

impl NoiseSource for FbmNoise {
    fn get(&self, x: f64, z: f64) -> f32 {
        let mut amplitude = 1.0;
        let mut frequency = self.base_frequency;
        let mut noise_height = 0.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            let perlin_value = self.noise.get([x * frequency, z * frequency]);
            noise_height += perlin_value * amplitude;

            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        let normalized = (noise_height / max_value) as f32;
        normalized * self.height_range
    }

    fn reseed(&mut self, seed: u32) {
        self.noise = Perlin::new(seed);
        self.seed = seed;
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}

/// Replaces the noise lookup entirely.
#[derive(Clone, Copy, Debug)]
pub enum Fill {
    Constant(f32),
    /// Receives the offset sampling coordinate.
    Func(fn(f64, f64) -> f32),
}

impl Fill {
    fn eval(&self, x: f64, z: f64) -> f32 {
        match *self {
            Fill::Constant(v) => v,
            Fill::Func(f) => f(x, z),
        }
    }
}

/// One stage of the post-sampling pipeline.
#[derive(Clone, Copy, Debug)]
pub enum PostOp {
    Identity,
    Scale(f32),
    Offset(f32),
    /// Values below the threshold are raised to it.
    ClampMin(f32),
    ClampMax(f32),
    Func(fn(f32) -> f32),
}

impl PostOp {
    /// Flattens valleys: every negative sample becomes zero.
    pub const ZERO_VALLEYS: PostOp = PostOp::ClampMin(0.0);

    fn apply(&self, v: f32) -> f32 {
        match *self {
            PostOp::Identity => v,
            PostOp::Scale(s) => v * s,
            PostOp::Offset(o) => v + o,
            PostOp::ClampMin(min) => v.max(min),
            PostOp::ClampMax(max) => v.min(max),
            PostOp::Func(f) => f(v),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NoiseModifiers {
    pub offset_x: f64,
    pub offset_z: f64,
    pub fill: Option<Fill>,
    pub post: Vec<PostOp>,
}

impl NoiseModifiers {
    pub fn offset(offset_x: f64, offset_z: f64) -> Self {
        Self {
            offset_x,
            offset_z,
            ..Self::default()
        }
    }

    pub fn constant(value: f32) -> Self {
        Self {
            fill: Some(Fill::Constant(value)),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn then(mut self, op: PostOp) -> Self {
        self.post.push(op);
        self
    }

    fn post_process(&self, raw: f32) -> f32 {
        self.post.iter().fold(raw, |v, op| op.apply(v))
    }
}

/// Turns grid coordinates into heights through a noise source and modifiers.
#[derive(Clone, Debug)]
pub struct HeightSampler {
    specs: GridSpecs,
    modifiers: NoiseModifiers,
}

impl HeightSampler {
    pub fn new(specs: GridSpecs, modifiers: NoiseModifiers) -> Self {
        Self { specs, modifiers }
    }

    pub fn specs(&self) -> &GridSpecs {
        &self.specs
    }

    pub fn modifiers(&self) -> &NoiseModifiers {
        &self.modifiers
    }

    pub fn sample<N: NoiseSource + ?Sized>(&self, noise: &N, x: usize, z: usize) -> f32 {
        let sx = self.specs.sample_coord(x) + self.modifiers.offset_x;
        let sz = self.specs.sample_coord(z) + self.modifiers.offset_z;

        let raw = match &self.modifiers.fill {
            Some(fill) => fill.eval(sx, sz),
            None => noise.get(sx, sz),
        };
        self.modifiers.post_process(raw)
    }

    /// Heights for every grid vertex, in vertex buffer order.
    pub fn sample_grid<N: NoiseSource + ?Sized>(&self, noise: &N) -> Vec<f32> {
        let mut heights = Vec::with_capacity(self.specs.vertex_count());

        for i in 0..self.specs.x_dim {
            for j in 0..self.specs.z_dim {
                heights.push(self.sample(noise, i, j));
            }
        }

        heights
    }
}
