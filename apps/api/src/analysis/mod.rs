// Decision analysis: CSV fetch → prompt composition → generation → normalization.
// All Gemini calls go through llm_client.

pub mod composer;
pub mod csv_fetcher;
pub mod framework;
pub mod handlers;
pub mod models;
pub mod prompts;
