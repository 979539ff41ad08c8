use crate::errors::request_context;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for fetching result pages as text
pub struct PageClient {
    client: Client,
}

impl PageClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body, failing on any non-success status
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .send_get_request(url)
            .await
            .with_context(|| request_context(url))?;
        Self::check_response_status(&response, url)?;
        response.text().await.with_context(|| request_context(url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(url).send().await
    }

    fn check_response_status(response: &reqwest::Response, url: &str) -> Result<()> {
        if !response.status().is_success() {
            anyhow::bail!("HTTP error {} from: {}", response.status(), url);
        }
        Ok(())
    }
}
