//! Export error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot encode entry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Cannot render report: {0}")]
    Render(#[from] std::fmt::Error),
}
