//! The evaluation rubric embedded in every prompt.
//!
//! Loaded once at startup, either from a side file or from the copy compiled
//! into the binary, and shared read-only between requests.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

const BUILTIN_FRAMEWORK: &str = include_str!("ramverk.txt");

/// Immutable framework text. Cloning shares the underlying buffer.
#[derive(Debug, Clone)]
pub struct FrameworkText(Arc<str>);

impl FrameworkText {
    pub fn builtin() -> Self {
        FrameworkText(Arc::from(BUILTIN_FRAMEWORK))
    }

    /// Reads the framework from `path` when given, otherwise falls back to the builtin rubric.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("Using builtin framework text");
            return Ok(Self::builtin());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read framework file '{}'", path.display()))?;
        info!(
            "Loaded framework text from {} ({} bytes)",
            path.display(),
            text.len()
        );
        Ok(FrameworkText(Arc::from(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
