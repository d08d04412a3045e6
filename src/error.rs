// Error types for tabshell.
// Covers navigator contract violations, configuration, and terminal I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Tab index {index} out of range (tab count: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Tab navigator requires at least one tab")]
    EmptyTabSet,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
