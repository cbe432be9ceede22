//! Converter module for turning M4A files into MP3 files.
//!
//! This module provides the `Converter` trait and an FFmpeg-backed
//! implementation.
//!
//! # Guarantees
//!
//! - FFmpeg is located once, when the converter is built
//! - Encoder output goes to a uniquely named staging file in the destination
//!   directory and is renamed onto the destination only after ffmpeg exits
//!   successfully
//! - The staging file is removed on every other path
//!
//! Two conversions racing for the same destination are not serialized: the
//! one that renames last wins.
//!
//! # Example
//!
//! ```ignore
//! use m4a2mp3_core::converter::{
//!     ConversionRequest, Converter, ConverterConfig, FfmpegConverter,
//! };
//!
//! let converter = FfmpegConverter::new(ConverterConfig::default())?;
//!
//! let request = ConversionRequest::new("/music/song.m4a")
//!     .with_bitrate("256k")
//!     .with_normalize(true);
//!
//! let result = converter.convert(request).await?;
//! println!("Wrote {}", result.output_path.display());
//! ```

mod config;
mod error;
mod ffmpeg;
mod staging;
mod traits;
mod types;

pub use config::{ConverterConfig, FFMPEG_LOG_LEVELS};
pub use error::ConverterError;
pub use ffmpeg::FfmpegConverter;
pub use traits::Converter;
pub use types::{
    default_output_path, validate_bitrate, AudioFilter, ConversionRequest, ConversionResult,
    DEFAULT_BITRATE, OUTPUT_EXTENSION, OUTPUT_SAMPLE_RATE_HZ,
};
