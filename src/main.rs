use anyhow::{bail, Result};
use colored::Colorize;
use reqwest::Client;

use crate::config::config::load_config;
use crate::scrape_set::scrape_set;

mod config;
mod extractors;
mod models;
mod normalizer;
mod scrape_set;
mod utilities;

#[tokio::main]
async fn main() -> Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Settings.toml".to_string());

    // Load configuration settings
    let config = match load_config(&settings_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {:?}", e).red());
            return Err(e);
        }
    };

    println!("{} {}", config.base.name, config.base.version);

    if config.sets.is_empty() {
        println!("{}", "No sets configured, nothing to scrape".yellow());
        return Ok(());
    }

    let client = Client::new();
    let mut failed = Vec::new();

    // One set at a time
    for set in &config.sets {
        if let Err(e) = scrape_set(&client, &config, set).await {
            eprintln!("{}", format!("Failed to scrape {}: {:?}", set.set_code, e).red());
            failed.push(set.set_code.clone());
        }
    }

    if !failed.is_empty() {
        bail!("Failed sets: {}", failed.join(", "));
    }

    Ok(())
}
