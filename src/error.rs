use std::path::PathBuf;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures reported at the conversion boundary.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input extension is neither a JSON document nor an xlsx workbook
    #[error("Unsupported file type: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Source file missing, unreadable or malformed
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Destination invalid or unwritable
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The workbook backend refused a sheet (illegal or overlong name)
    #[error("Sheet '{sheet}' cannot be written: {source}")]
    InvalidSheet {
        sheet: String,
        #[source]
        source: BoxError,
    },
}

impl ConvertError {
    pub fn read(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        ConvertError::ReadFailure {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        ConvertError::WriteFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}
