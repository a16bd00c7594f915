use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Named model configurations. Each deployment picks one at startup via `MODEL_PROFILE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProfile {
    Flash,
    Pro,
}

impl ModelProfile {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flash" => Ok(ModelProfile::Flash),
            "pro" => Ok(ModelProfile::Pro),
            other => bail!("MODEL_PROFILE must be 'flash' or 'pro', got '{other}'"),
        }
    }

    pub fn settings(self) -> ModelSettings {
        match self {
            ModelProfile::Flash => ModelSettings {
                model: "gemini-2.5-flash".to_string(),
                max_output_tokens: 8192,
                temperature: 0.4,
            },
            ModelProfile::Pro => ModelSettings {
                model: "gemini-2.5-pro".to_string(),
                max_output_tokens: 4096,
                temperature: 0.4,
            },
        }
    }
}

/// Generation parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if the API key is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub model: ModelSettings,
    pub framework_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub index_file: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let profile = match get("MODEL_PROFILE") {
            Some(v) => ModelProfile::parse(&v)?,
            None => ModelProfile::Flash,
        };
        let mut model = profile.settings();
        if let Some(name) = get("GEMINI_MODEL") {
            model.model = name;
        }
        if let Some(v) = get("GEMINI_MAX_OUTPUT_TOKENS") {
            model.max_output_tokens = v
                .parse::<u32>()
                .context("GEMINI_MAX_OUTPUT_TOKENS must be a positive integer")?;
        }
        if let Some(v) = get("GEMINI_TEMPERATURE") {
            model.temperature = v
                .parse::<f64>()
                .context("GEMINI_TEMPERATURE must be a number")?;
        }

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY")
                .context("Required environment variable 'GEMINI_API_KEY' is not set")?,
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            model,
            framework_path: get("FRAMEWORK_PATH").map(PathBuf::from),
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| "static".to_string())),
            index_file: get("INDEX_FILE").unwrap_or_else(|| "juridisk-ai.html".to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
