use anyhow::Result;
use log::info;

use crate::config::ScraperSettings;
use crate::http::PageClient;
use crate::services::SeasonSource;

/// Fetches season results pages from formula1.com
pub struct ResultsScraper {
    client: PageClient,
    settings: ScraperSettings,
}

impl ResultsScraper {
    /// Create a new results scraper
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = PageClient::new(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    fn build_url(&self, year: i32) -> String {
        self.settings.season_url(year)
    }
}

impl SeasonSource for ResultsScraper {
    async fn fetch_season(&mut self, year: i32) -> Result<String> {
        let url = self.build_url(year);
        info!("  → Season {}...", year);
        self.client.get_text(&url).await
    }
}
