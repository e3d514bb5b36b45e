//! Error type shared by the timeline document and file helpers.

use thiserror::Error;

/// Failures surfaced by import/export and file handling.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Reading or writing the document file failed.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    /// The document could not be serialized or parsed.
    #[error("invalid timeline JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The user dismissed the file dialog.
    #[error("no file selected")]
    NoFileSelected,
}

pub type Result<T> = std::result::Result<T, TimelineError>;
