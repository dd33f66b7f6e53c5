//! Error types for tsmanifest.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all tsmanifest operations.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The discovery root is missing or not a directory.
    #[error("Root path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The evaluation runtime could not be started.
    #[error("Failed to start evaluation runtime for {path}: {source}")]
    RuntimeSpawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file's exported value could not be obtained, or its callable
    /// invocation failed.
    #[error("Failed to evaluate {path}: {message}")]
    Evaluation { path: PathBuf, message: String },

    /// The evaluation runtime replied with something outside the protocol.
    #[error("Unexpected reply from evaluation runtime for {path}: {message}")]
    Protocol { path: PathBuf, message: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest could not be written to the output stream.
    #[error("Failed to write manifest: {0}")]
    Write(#[source] io::Error),
}

impl ManifestError {
    /// Create a runtime spawn error.
    pub fn runtime_spawn(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::RuntimeSpawn {
            path: path.into(),
            source,
        }
    }

    /// Create an evaluation error attributed to a file.
    pub fn evaluation(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Evaluation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a protocol error attributed to a file.
    pub fn protocol(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Protocol {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for tsmanifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
