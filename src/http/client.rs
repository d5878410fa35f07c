use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

use crate::config::settings::FetchSettings;
use crate::errors::fetch_context;

/// One GET round trip returning the response body.
///
/// Implementations make exactly one attempt: no retries, no backoff.
pub trait Fetcher {
    fn get_text(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// HTTP client with a fixed per-request timeout
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &FetchSettings) -> Result<Self> {
        Self::new(settings.user_agent, settings.timeout_secs)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))
    }

    fn check_response_status(response: &reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }
        Ok(())
    }
}

impl Fetcher for FetchClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send_get_request(url).await?;
        Self::check_response_status(&response)?;
        response.text().await.context("Failed to read response body")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Serves canned bodies by exact URL; unknown URLs fail like a dead host
    #[derive(Default)]
    pub struct MapFetcher {
        pages: HashMap<String, String>,
    }

    impl MapFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    impl Fetcher for MapFetcher {
        async fn get_text(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("HTTP error: 404 Not Found"))
        }
    }
}
