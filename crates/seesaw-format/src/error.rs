//! Error types for seesaw-format.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
