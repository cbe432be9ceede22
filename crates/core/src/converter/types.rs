//! Types for the converter module.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::ConverterError;

/// Bitrate used when the caller does not pick one.
pub const DEFAULT_BITRATE: &str = "192k";

/// Sample rate every output is resampled to.
pub const OUTPUT_SAMPLE_RATE_HZ: u32 = 44_100;

/// Extension of converted files.
pub const OUTPUT_EXTENSION: &str = "mp3";

static BITRATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*[kK]?$").expect("bitrate pattern is valid"));

/// Checks that a bitrate string is safe to hand to FFmpeg as `-b:a`.
///
/// Accepts plain bits per second (`128000`) or kilobits with a `k` suffix
/// (`192k`). Anything else, in particular strings starting with `-`, is
/// rejected.
pub fn validate_bitrate(bitrate: &str) -> Result<(), ConverterError> {
    if BITRATE_RE.is_match(bitrate) {
        Ok(())
    } else {
        Err(ConverterError::InvalidBitrate {
            bitrate: bitrate.to_string(),
        })
    }
}

/// Audio filters that can be applied during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFilter {
    /// Single-pass EBU R128 loudness normalization.
    Loudnorm,
}

impl AudioFilter {
    /// Returns the ffmpeg filter name.
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            Self::Loudnorm => "loudnorm",
        }
    }
}

/// A single M4A to MP3 conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Source `.m4a` file.
    pub input_path: PathBuf,
    /// Destination. `None` means next to the input with an `.mp3` extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Target bitrate passed to the encoder (e.g. `192k`).
    #[serde(default = "default_bitrate")]
    pub bitrate: String,
    /// Apply loudness normalization.
    #[serde(default)]
    pub normalize: bool,
    /// Replace an existing output file.
    #[serde(default)]
    pub overwrite: bool,
}

fn default_bitrate() -> String {
    DEFAULT_BITRATE.to_string()
}

impl ConversionRequest {
    /// Creates a request with default options for the given input.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            bitrate: default_bitrate(),
            normalize: false,
            overwrite: false,
        }
    }

    /// Sets an explicit output path.
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Sets the target bitrate.
    pub fn with_bitrate(mut self, bitrate: impl Into<String>) -> Self {
        self.bitrate = bitrate.into();
        self
    }

    /// Enables or disables loudness normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Allows or forbids replacing an existing output.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// The path the converted file will end up at.
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => default_output_path(&self.input_path),
        }
    }

    /// Filters requested by this conversion, in application order.
    pub fn filters(&self) -> Vec<AudioFilter> {
        let mut filters = Vec::new();
        if self.normalize {
            filters.push(AudioFilter::Loudnorm);
        }
        filters
    }
}

/// Default destination for an input: same directory and stem, `.mp3` extension.
pub fn default_output_path(input_path: &Path) -> PathBuf {
    input_path.with_extension(OUTPUT_EXTENSION)
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Final location of the MP3 file.
    pub output_path: PathBuf,
    /// Size of the committed file in bytes.
    pub output_size_bytes: u64,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}
