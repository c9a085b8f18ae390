use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("transition length must be at least one frame")]
    ZeroTransitionLength,

    #[error("frame band needs {needed} slots but only {available} remain")]
    FrameCapacity { needed: usize, available: usize },

    #[error("animator deltas cover {expected} vertices but the mesh grid has {found}")]
    GridMismatch { expected: usize, found: usize },
}
