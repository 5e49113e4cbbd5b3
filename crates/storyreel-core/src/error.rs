//! Error types for StoryReel.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for StoryReel operations.
#[derive(Error, Debug)]
pub enum StoryReelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("No audio assets found in {0}")]
    NoAudioAssets(PathBuf),

    #[error("No image assets found in {0}")]
    NoImageAssets(PathBuf),

    #[error("Allocation error: {0}")]
    Allocation(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for StoryReel operations.
pub type Result<T> = std::result::Result<T, StoryReelError>;
