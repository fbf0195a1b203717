//! Centralized error types for emlextract.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the emlextract library.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O error with the associated file path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified file does not exist.
    #[error("Email file not found: {0}")]
    FileNotFound(PathBuf),

    /// The path given by the user does not exist.
    #[error("No valid file path found: {0}")]
    PathNotFound(PathBuf),

    /// A single file was given but it does not carry the expected extension.
    #[error("No valid .{extension} file found: {path}")]
    NoValidFile { path: PathBuf, extension: String },

    /// A batch was started with no email files to work on.
    #[error("No email file found!")]
    NoEmailFiles,

    /// `mail-parser` could not make sense of the message.
    #[error("Failed to parse message: {0}")]
    Parse(PathBuf),

    /// An attachment could not be written to disk.
    #[error("Failed to write attachment '{path}': {source}")]
    AttachmentWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The JSON report could not be produced.
    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, ExtractError>`.
pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for errors caused by what the user pointed us at, rather than
    /// by something going wrong mid-extraction.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound(_) | Self::NoValidFile { .. } | Self::NoEmailFiles
        )
    }
}
