use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;
use reqwest::Client;

use crate::config::config::SiteConfig;

/// Builds the card list URL for one series, e.g. `https://fr.onepiece-cardgame.com/cardlist/?series=622109`.
pub fn cardlist_url(site: &SiteConfig, series_id: &str) -> String {
    format!(
        "{}{}?series={}",
        site.base_url.trim_end_matches('/'),
        site.cardlist_path,
        series_id
    )
}

/// Downloads the card list page of a series.
pub async fn fetch_cardlist(client: &Client, site: &SiteConfig, series_id: &str) -> Result<String> {
    let url = cardlist_url(site, series_id);

    let response = client
        .get(&url)
        .header(USER_AGENT, &site.user_agent)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()
        .with_context(|| format!("Card list request failed: {}", url))?;

    response
        .text()
        .await
        .context("Failed to read card list body")
}
