use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`.
///
/// Both fields are optional at the type level so that a missing field is
/// reported with the service's own 400 message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub csv_url: Option<String>,
    #[serde(default)]
    pub decision_text: Option<String>,
}

impl AnalysisRequest {
    /// Returns `(csv_url, decision_text)` when both are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let csv_url = self.csv_url.as_deref().filter(|s| !s.is_empty())?;
        let decision_text = self.decision_text.as_deref().filter(|s| !s.is_empty())?;
        Some((csv_url, decision_text))
    }
}

/// Response body: exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Result { result: String },
    Error { error: String },
}

impl AnalysisResult {
    pub fn result(text: impl Into<String>) -> Self {
        AnalysisResult::Result {
            result: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_camel_case_fields() {
        let req: AnalysisRequest =
            serde_json::from_value(json!({ "csvUrl": "http://x/a.csv", "decisionText": "beslut" }))
                .unwrap();
        assert_eq!(req.required_fields(), Some(("http://x/a.csv", "beslut")));
    }

    #[test]
    fn test_missing_or_empty_fields_are_rejected() {
        let missing: AnalysisRequest =
            serde_json::from_value(json!({ "decisionText": "beslut" })).unwrap();
        assert!(missing.required_fields().is_none());

        let empty: AnalysisRequest =
            serde_json::from_value(json!({ "csvUrl": "", "decisionText": "x" })).unwrap();
        assert!(empty.required_fields().is_none());
    }

    #[test]
    fn test_result_serializes_single_field() {
        let ok = serde_json::to_value(AnalysisResult::result("svar")).unwrap();
        assert_eq!(ok, json!({ "result": "svar" }));

        let err = serde_json::to_value(AnalysisResult::Error {
            error: "fel".to_string(),
        })
        .unwrap();
        assert_eq!(err, json!({ "error": "fel" }));
    }
}
