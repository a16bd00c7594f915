//! LLM Client — the single point of entry for all Gemini API calls.
//!
//! No other module talks to the generative-language endpoint directly.
//! One POST per `generate` call: no retry, no backoff, no streaming.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ModelSettings;
use crate::errors::FetchError;

pub mod prompts;
pub mod response;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
}

/// Gemini `generateContent` client with fixed generation parameters.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    settings: ModelSettings,
}

impl GeminiClient {
    pub fn new(client: Client, base_url: &str, api_key: String, settings: ModelSettings) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            settings,
        }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Sends `prompt` and returns the raw JSON body.
    ///
    /// The body is returned whatever the HTTP status: error responses carry an
    /// `error` object that the normalizer turns into a readable message.
    pub async fn generate(&self, prompt: &str) -> Result<Value, FetchError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.settings.model
        );
        debug!(
            "Calling {} (prompt {} bytes, max_output_tokens={})",
            self.settings.model,
            prompt.len(),
            self.settings.max_output_tokens
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        let raw: Value = serde_json::from_str(&text)?;

        debug!("Gemini response ({status}): {raw:#}");
        Ok(raw)
    }

    /// Lists the model names available to the configured key.
    pub async fn list_models(&self) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus(status.as_u16()));
        }

        let text = response.text().await.map_err(transport_error)?;
        let list: ModelList = serde_json::from_str(&text)?;
        Ok(list.models.into_iter().map(|m| m.name).collect())
    }
}

/// The request URL carries the API key as a query parameter; it must not
/// reach logs or response bodies.
fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Network(err.without_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            Client::new(),
            &format!("{}/", server.uri()),
            "test-key".to_string(),
            ModelSettings {
                model: "gemini-2.5-flash".to_string(),
                max_output_tokens: 8192,
                temperature: 0.4,
            },
        )
    }

    #[tokio::test]
    async fn test_generate_sends_fixed_envelope() {
        let server = MockServer::start().await;
        let reply = json!({
            "candidates": [{ "content": { "parts": [{ "text": "svar" }] }, "finishReason": "STOP" }]
        });
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "hej" }] }],
                "generationConfig": { "temperature": 0.4, "maxOutputTokens": 8192 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&reply))
            .expect(1)
            .mount(&server)
            .await;

        let raw = client_for(&server).generate("hej").await.unwrap();
        assert_eq!(raw, reply);
    }

    #[tokio::test]
    async fn test_generate_returns_error_body_on_failure_status() {
        let server = MockServer::start().await;
        let reply = json!({ "error": { "code": 400, "message": "API key not valid" } });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&reply))
            .mount(&server)
            .await;

        let raw = client_for(&server).generate("hej").await.unwrap();
        assert_eq!(raw, reply);
    }

    #[tokio::test]
    async fn test_generate_rejects_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("hej").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidJson(_)));
    }

    fn unreachable_client() -> GeminiClient {
        GeminiClient::new(
            Client::new(),
            "http://127.0.0.1:1",
            "SECRET-KEY-123".to_string(),
            ModelSettings {
                model: "gemini-2.5-flash".to_string(),
                max_output_tokens: 8192,
                temperature: 0.4,
            },
        )
    }

    #[tokio::test]
    async fn test_generate_transport_error_hides_api_key() {
        let err = unreachable_client().generate("hej").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"), "{err}");
        assert!(!format!("{err:?}").contains("SECRET-KEY-123"), "{err:?}");
    }

    #[tokio::test]
    async fn test_list_models_transport_error_hides_api_key() {
        let err = unreachable_client().list_models().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"), "{err}");
        assert!(!format!("{err:?}").contains("SECRET-KEY-123"), "{err:?}");
    }

    #[tokio::test]
    async fn test_list_models_returns_names() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [
                    { "name": "models/gemini-2.5-flash", "displayName": "Gemini 2.5 Flash" },
                    { "name": "models/gemini-2.5-pro" }
                ]
            })))
            .mount(&server)
            .await;

        let models = client_for(&server).list_models().await.unwrap();
        assert_eq!(models, vec!["models/gemini-2.5-flash", "models/gemini-2.5-pro"]);
    }

    #[tokio::test]
    async fn test_list_models_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = client_for(&server).list_models().await.unwrap_err();
        assert!(matches!(err, FetchError::UpstreamStatus(403)));
    }
}
