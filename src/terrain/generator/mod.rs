mod frame;
mod heightmap;
mod mesh;
mod morph;
mod normals;

pub use frame::{FrameBand, FRAME_INDEX_COUNT, FRAME_VERTEX_COUNT};
pub use heightmap::{
    FbmNoise,
    Fill,
    HeightSampler,
    NoiseModifiers,
    NoiseSource,
    PostOp,
};
pub use mesh::TerrainMesh;
pub use morph::{MorphAnimator, MorphStep};
pub use normals::estimate_normals;

#[cfg(test)]
mod tests;
