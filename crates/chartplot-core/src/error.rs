// File: crates/chartplot-core/src/error.rs
// Summary: Typed errors for loading and rendering, grouped into user-facing categories.

use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Coarse category of a [`ChartError`], matching what the CLI reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MissingFile,
    Parse,
    Render,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("JSON file does not exist: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid chart JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("series '{series}': unsupported color '{value}'")]
    UnsupportedColor { series: String, value: String },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::MissingFile { .. } => ErrorKind::MissingFile,
            ChartError::Read { .. } | ChartError::Parse { .. } => ErrorKind::Parse,
            ChartError::Surface { .. }
            | ChartError::UnsupportedColor { .. }
            | ChartError::Encode
            | ChartError::Write { .. } => ErrorKind::Render,
        }
    }
}
