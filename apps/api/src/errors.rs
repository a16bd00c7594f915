use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::analysis::models::AnalysisResult;

pub const MISSING_INPUT_MESSAGE: &str = "Saknar CSV URL eller beslutstext";
pub const CSV_UNREACHABLE_MESSAGE: &str = "Kunde inte hämta CSV-data";

/// Failure of a single outbound HTTP call (CSV source or generation endpoint).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", CSV_UNREACHABLE_MESSAGE)]
    Unreachable { status: u16 },

    #[error("Oväntad HTTP-status från tjänsten: {0}")]
    UpstreamStatus(u16),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Ogiltigt JSON-svar: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingInput | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Fetch(FetchError::Unreachable { status }) => {
                tracing::error!("CSV source answered with status {status}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Fetch(e) => {
                tracing::error!("Outbound request failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(AnalysisResult::Error {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
