//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// FFmpeg binary could not be located.
    #[error("FFmpeg is required but was not found on PATH ({path}). Install FFmpeg and try again.")]
    ToolUnavailable { path: PathBuf },

    /// Input file not found.
    #[error("Input file does not exist: {path}")]
    InputNotFound { path: PathBuf },

    /// Output already exists and overwrite is disabled.
    #[error("Output file already exists: {path}. Use overwrite to replace it.")]
    OutputAlreadyExists { path: PathBuf },

    /// Bitrate is not something FFmpeg accepts as `-b:a`.
    #[error(
        "Invalid bitrate '{bitrate}': expected a number with an optional 'k' suffix (e.g. 192k)"
    )]
    InvalidBitrate { bitrate: String },

    /// FFmpeg exited with a non-zero status.
    #[error(
        "FFmpeg failed to convert the file. Ensure the input is valid and FFmpeg supports the necessary codecs."
    )]
    EncodingFailed { exit_code: Option<i32> },

    /// Output directory does not exist and could not be created.
    #[error("Failed to create output directory: {path}")]
    OutputDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Staging file could not be created next to the output.
    #[error("Failed to create staging file in {dir}")]
    StagingFailed {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Renaming the staging file onto the output failed.
    #[error("Failed to move converted file into place: {path}")]
    CommitFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConverterError {
    /// Creates a new encoding failed error.
    pub fn encoding_failed(exit_code: Option<i32>) -> Self {
        Self::EncodingFailed { exit_code }
    }

    /// Whether the request itself was at fault, as opposed to the environment.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::OutputAlreadyExists { .. }
                | Self::InvalidBitrate { .. }
        )
    }
}
