use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use reqwest::Client;

use crate::config::config::{AppConfig, SetConfig};
use crate::extractors::onepiece::extract_card_fragments::extract_card_fragments;
use crate::extractors::onepiece::fetch_cardlist::{cardlist_url, fetch_cardlist};
use crate::normalizer::normalize_fragment::NormalizeContext;
use crate::normalizer::normalize_fragments::normalize_fragments;
use crate::utilities::write_cards_json::write_cards_json;

/// Fetch, normalize and write one set. Returns the number of records written.
pub async fn scrape_set(client: &Client, config: &AppConfig, set: &SetConfig) -> Result<usize> {
    println!("Fetch: {}", cardlist_url(&config.site, &set.series_id));
    let html_content = fetch_cardlist(client, &config.site, &set.series_id).await?;

    let fragments = extract_card_fragments(&html_content);
    println!("Card entries found: {}", fragments.len());

    let set_prefix = set.set_prefix();
    let context = NormalizeContext {
        set_code: &set.set_code,
        set_prefix: &set_prefix,
        base_url: &config.site.base_url,
        labels: &config.labels,
    };
    let records = normalize_fragments(&fragments, &context, set.limit);

    if records.is_empty() {
        println!("{}", format!("No {} cards found on the page", set_prefix).yellow());
    }

    let path = write_cards_json(Path::new(&config.output.directory), &set.set_code, &records).await?;
    println!(
        "{}",
        format!("{} variants written to {}", records.len(), path.display()).green()
    );

    Ok(records.len())
}
