//! Resource fetcher implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::ResourceFetcher;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP fetcher for rule-file downloads.
#[derive(Debug, Clone)]
pub struct HttpResourceFetcher {
    client: Client,
}

impl HttpResourceFetcher {
    /// Create a fetcher with the default request timeout.
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl ResourceFetcher for HttpResourceFetcher {
    fn fetch(&self, url: &Url) -> Result<String, AppError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        response.text().map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })
    }
}
