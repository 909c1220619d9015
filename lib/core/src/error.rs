use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    #[error("Invalid query dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Required artifact missing: {}", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("Invalid artifact {artifact}: {reason}")]
    InvalidArtifact { artifact: String, reason: String },

    #[error("Unsupported version in artifact {artifact}: found {found}, expected {expected}")]
    UnsupportedVersion {
        artifact: String,
        found: u32,
        expected: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
