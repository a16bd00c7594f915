use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::FetchError;

/// Downloads the caller-supplied CSV knowledge base.
/// One GET per call: no retry, no timeout beyond the client's defaults.
#[derive(Clone)]
pub struct CsvFetcher {
    client: Client,
}

impl CsvFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("CSV source {url} returned {status}");
            return Err(FetchError::Unreachable {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        debug!("Fetched {} bytes of CSV from {url}", text.len());
        Ok(text)
    }
}
