//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::ConverterError;
use super::types::{ConversionRequest, ConversionResult};

/// A converter that turns M4A files into MP3 files.
///
/// Implementations must never leave a partially written file at the
/// destination: the output is either untouched, or replaced by a complete
/// file.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Converts one file. Resolves once the output is in place or the attempt
    /// has failed.
    async fn convert(&self, request: ConversionRequest)
        -> Result<ConversionResult, ConverterError>;
}
