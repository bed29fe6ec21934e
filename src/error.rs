use std::path::PathBuf;
use thiserror::Error;

pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to open workbook {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}' from {}: {source}", .path.display())]
    Sheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    /// Path of the file the failed operation was working on, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ExtractError::Load { path, .. }
            | ExtractError::Sheet { path, .. }
            | ExtractError::Write { path, .. } => Some(path),
            ExtractError::Json(_) => None,
        }
    }
}
