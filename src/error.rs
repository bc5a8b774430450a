//! Error types for typeuss operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or writing stylesheets.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("manifest error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported combinator `{combinator}`: {hint}")]
    UnsupportedCombinator {
        combinator: &'static str,
        hint: &'static str,
    },

    #[error("invalid output path {}: {reason}", .path.display())]
    InvalidOutputPath { path: PathBuf, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
