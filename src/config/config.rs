use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::config::labels::LabelConfig;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub base: BaseConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sets: Vec<SetConfig>,
    #[serde(default)]
    pub labels: LabelConfig,
}

#[derive(Debug, Deserialize)]
pub struct BaseConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cardlist_path")]
    pub cardlist_path: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: default_base_url(),
            cardlist_path: default_cardlist_path(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: default_output_directory(),
        }
    }
}

/// One expansion to scrape.
#[derive(Debug, Clone, Deserialize)]
pub struct SetConfig {
    pub series_id: String,
    /// Hyphenated code as printed on the cards, e.g. `OP-09`.
    pub set_code: String,
    pub limit: Option<usize>,
}

impl SetConfig {
    /// Prefix carried by every card identifier of this set (`OP-09` -> `OP09`).
    pub fn set_prefix(&self) -> String {
        self.set_code.replace('-', "")
    }
}

fn default_base_url() -> String {
    "https://fr.onepiece-cardgame.com".to_string()
}

fn default_cardlist_path() -> String {
    "/cardlist/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_output_directory() -> String {
    "results".to_string()
}

/// Loads the settings file, then lets `APP_*` environment variables override it.
pub fn load_config(path: &str) -> Result<AppConfig> {
    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml))
        .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__"))
        .build()
        .with_context(|| format!("Failed to read settings file: {}", path))?;

    settings
        .try_deserialize::<AppConfig>()
        .context("Failed to parse settings file")
}
