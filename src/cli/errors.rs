use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {path:?}")]
    MissingInput { path: PathBuf },

    #[error(transparent)]
    Trim(#[from] logotrim::Error),
}
