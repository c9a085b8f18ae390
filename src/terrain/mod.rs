pub mod config;
pub mod coords;
pub mod error;
pub mod generator;
pub mod vertex;

pub use coords::GridSpecs;
pub use generator::TerrainMesh;
