//! Prediction API handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use m4a2mp3_core::{ConversionResult, ConverterError, PredictionInput};

use crate::state::AppState;

/// Response for a successful prediction
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub output_path: String,
    pub output_size_bytes: u64,
    pub duration_ms: u64,
}

impl From<ConversionResult> for PredictResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            output_path: result.output_path.display().to_string(),
            output_size_bytes: result.output_size_bytes,
            duration_ms: result.duration_ms,
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct PredictErrorResponse {
    pub error: String,
}

/// Maps a conversion error to the HTTP status reported for it.
pub fn status_for(error: &ConverterError) -> StatusCode {
    match error {
        ConverterError::InputNotFound { .. } => StatusCode::NOT_FOUND,
        ConverterError::OutputAlreadyExists { .. } => StatusCode::CONFLICT,
        ConverterError::InvalidBitrate { .. } => StatusCode::BAD_REQUEST,
        ConverterError::EncodingFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ConverterError::ToolUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert one uploaded file
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<PredictErrorResponse>)> {
    match state.predictor().predict(input).await {
        Ok(result) => Ok(Json(PredictResponse::from(result))),
        Err(e) => {
            let status = status_for(&e);
            if e.is_caller_error() {
                debug!(error = %e, status = %status, "Prediction rejected");
            } else {
                warn!(error = %e, status = %status, "Prediction failed");
            }
            Err((
                status,
                Json(PredictErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ConverterError::InputNotFound {
                path: PathBuf::from("a.m4a")
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ConverterError::OutputAlreadyExists {
                path: PathBuf::from("a.mp3")
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&ConverterError::encoding_failed(Some(1))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&ConverterError::Io(std::io::Error::other("disk"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
