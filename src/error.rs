use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading an uploaded input file, before any parsing happens.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("File is too large ({size} bytes); the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported file extension: {0:?} (expected .csv, .tsv, .txt, .smi or .smiles)")]
    UnsupportedExtension(String),

    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures reported by, or while talking to, the descriptor service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service refused the submission size (HTTP 413).
    #[error("Input too large: {0}")]
    TooLarge(String),

    #[error("Service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Nothing to submit")]
    Empty,
}
