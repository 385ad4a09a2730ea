//! Error types for rate storage, conversion and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the rate store, the converter and the rate file.
#[derive(Error, Debug)]
pub enum RateError {
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    #[error("invalid number format: {input:?}")]
    InvalidNumberFormat { input: String },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O failure on {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced while waiting for the background rate load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Rates(#[from] RateError),

    #[error("rate loading task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("loading interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, RateError>;
