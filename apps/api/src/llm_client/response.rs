//! Reduces a raw `generateContent` body to one readable string.
//!
//! Decision order (first match wins):
//! 1. `error` present → API error message
//! 2. non-empty `candidates` → first candidate's text, or a placeholder naming its finish reason
//! 3. anything else → generic fallback
//!
//! Only the first candidate is ever inspected.

use serde_json::Value;

use crate::analysis::models::AnalysisResult;

pub const API_ERROR_PREFIX: &str = "API-fel: ";
pub const UNEXPECTED_SHAPE_MESSAGE: &str = "Ett oväntat fel uppstod vid Gemini-anropet.";
const UNSPECIFIED_FINISH_REASON: &str = "FINISH_REASON_UNSPECIFIED";

/// The shape of an upstream body. Exactly one variant applies per response.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamResponse {
    ErrorPayload(String),
    EmptyCandidate(Option<String>),
    TextCandidate(String),
    Malformed,
}

impl UpstreamResponse {
    pub fn classify(raw: &Value) -> Self {
        if let Some(error) = raw.get("error").filter(|e| !e.is_null()) {
            let message = match error.get("message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => error.to_string(),
            };
            return UpstreamResponse::ErrorPayload(message);
        }

        let Some(first) = raw
            .get("candidates")
            .and_then(Value::as_array)
            .and_then(|candidates| candidates.first())
        else {
            return UpstreamResponse::Malformed;
        };

        match first
            .pointer("/content/parts/0/text")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
        {
            Some(text) => UpstreamResponse::TextCandidate(text.to_string()),
            None => UpstreamResponse::EmptyCandidate(
                first
                    .get("finishReason")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            ),
        }
    }

    pub fn into_message(self) -> String {
        match self {
            UpstreamResponse::ErrorPayload(message) => format!("{API_ERROR_PREFIX}{message}"),
            UpstreamResponse::TextCandidate(text) => text,
            UpstreamResponse::EmptyCandidate(reason) => format!(
                "Genereringen slutfördes, men ingen text returnerades. \
                 Försök med en längre beslutstext eller justera tokens (Finish Reason: {})",
                reason.as_deref().unwrap_or(UNSPECIFIED_FINISH_REASON)
            ),
            UpstreamResponse::Malformed => UNEXPECTED_SHAPE_MESSAGE.to_string(),
        }
    }
}

/// Normalizes an upstream body. Every shape becomes a `result`; API-level
/// failures are labelled inside the text rather than raised.
pub fn normalize(raw: &Value) -> AnalysisResult {
    AnalysisResult::result(UpstreamResponse::classify(raw).into_message())
}
