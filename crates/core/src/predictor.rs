//! Prediction front end: one upload in, one MP3 out, next to the input.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::converter::{ConversionRequest, ConversionResult, Converter, ConverterError};

/// Input accepted by [`Predictor::predict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Path of the uploaded `.m4a` file.
    pub audio: PathBuf,
    /// Target bitrate; the predictor default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<String>,
    /// Apply loudness normalization.
    #[serde(default)]
    pub normalize: bool,
    /// Replace a previous result. Defaults to `true`: re-running a
    /// prediction on the same upload must not fail.
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

fn default_overwrite() -> bool {
    true
}

impl PredictionInput {
    /// Creates an input with default options.
    pub fn new(audio: impl Into<PathBuf>) -> Self {
        Self {
            audio: audio.into(),
            bitrate: None,
            normalize: false,
            overwrite: default_overwrite(),
        }
    }
}

/// Converts uploads with fixed defaults.
///
/// The output always lands beside the input with an `.mp3` extension.
pub struct Predictor {
    converter: Arc<dyn Converter>,
    default_bitrate: String,
}

impl Predictor {
    /// Creates a predictor using the standard default bitrate.
    pub fn new(converter: Arc<dyn Converter>) -> Self {
        Self::with_default_bitrate(converter, crate::converter::DEFAULT_BITRATE)
    }

    /// Creates a predictor with a custom default bitrate.
    pub fn with_default_bitrate(
        converter: Arc<dyn Converter>,
        default_bitrate: impl Into<String>,
    ) -> Self {
        Self {
            converter,
            default_bitrate: default_bitrate.into(),
        }
    }

    /// Name of the underlying converter.
    pub fn converter_name(&self) -> &str {
        self.converter.name()
    }

    /// Builds the conversion request for an input.
    pub fn request_for(&self, input: &PredictionInput) -> ConversionRequest {
        ConversionRequest::new(&input.audio)
            .with_output(crate::converter::default_output_path(&input.audio))
            .with_bitrate(
                input
                    .bitrate
                    .clone()
                    .unwrap_or_else(|| self.default_bitrate.clone()),
            )
            .with_normalize(input.normalize)
            .with_overwrite(input.overwrite)
    }

    /// Converts one upload.
    pub async fn predict(
        &self,
        input: PredictionInput,
    ) -> Result<ConversionResult, ConverterError> {
        let request = self.request_for(&input);
        info!(
            audio = %input.audio.display(),
            bitrate = %request.bitrate,
            normalize = request.normalize,
            "Running prediction"
        );
        self.converter.convert(request).await
    }
}
