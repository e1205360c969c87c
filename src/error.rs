use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("page {index} is out of range (source has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("cannot extract text of page {index}: {reason}")]
    PageText { index: usize, reason: String },

    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error(
        "text of length {length} exceeds maximum of {max_length}; raise the annotator's max_length"
    )]
    LengthExceeded { length: usize, max_length: usize },

    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    #[error("invalid model file {}: {source}", .path.display())]
    ModelFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Map a failed open to `ResourceNotFound` when the file is simply absent.
    pub fn missing_or_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ResourceNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
