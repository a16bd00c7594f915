//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::composer::compose;
use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::errors::AppError;
use crate::llm_client::response::normalize;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// POST /analyze
///
/// Sequential pipeline: fetch CSV → compose prompt → Gemini → normalize.
/// Upstream API failures come back as a 200 `result` labelled as an API error.
#[tracing::instrument(skip_all, fields(analysis_id = %Uuid::new_v4()))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // A body sent without a JSON content type carries no fields.
        Err(JsonRejection::MissingJsonContentType(_)) => AnalysisRequest::default(),
        Err(e) => return Err(AppError::BadRequest(e.body_text())),
    };
    info!("/analyze request received");

    let (csv_url, decision_text) = request.required_fields().ok_or(AppError::MissingInput)?;

    let csv_text = state.csv.fetch(csv_url).await?;
    let prompt = compose(state.framework.as_str(), &csv_text, decision_text);
    info!(
        "Composed prompt: {} bytes ({} bytes of CSV)",
        prompt.len(),
        csv_text.len()
    );

    let raw = state.llm.generate(&prompt).await?;
    Ok(Json(normalize(&raw)))
}

/// GET /models
///
/// Lists the models the configured key can reach.
pub async fn handle_list_models(
    State(state): State<AppState>,
) -> Result<Json<ModelsResponse>, AppError> {
    let models = state.llm.list_models().await?;
    Ok(Json(ModelsResponse { models }))
}
