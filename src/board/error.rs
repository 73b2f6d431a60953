// src/board/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed dataset row at line {line}: {reason}")]
    DataFormat { line: u64, reason: String },

    #[error("Dataset contains no position rows")]
    EmptyDataset,

    #[error("Failed to export board snapshot to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}
