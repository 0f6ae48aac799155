use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("resize failed: {0}")]
    Resize(String),

    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
