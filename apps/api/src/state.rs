use crate::analysis::csv_fetcher::CsvFetcher;
use crate::analysis::framework::FrameworkText;
use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data; everything here is fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub csv: CsvFetcher,
    pub llm: GeminiClient,
    pub framework: FrameworkText,
}
