//! Procedural terrain surface meshes with border frames and per-frame
//! morphing between successive noise samples.
//!
//! The crate produces CPU-side vertex and index buffers. Uploading them to a
//! graphics backend is left to the caller, who polls [`TerrainMesh::is_dirty`]
//! after each animation step.

pub mod terrain;

pub use terrain::{
    config::{NoiseConfig, TerrainConfig},
    coords::{Axis, GridSpecs},
    error::MeshError,
    generator::{
        FbmNoise, Fill, FrameBand, HeightSampler, MorphAnimator, MorphStep, NoiseModifiers,
        NoiseSource, PostOp, TerrainMesh,
    },
    vertex::{Vertex, VertexAttribute, VertexLayout},
};
