use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::normalized_card_record::NormalizedCardRecord;

/// Writes the records as a pretty-printed JSON array to `{directory}/{set_code}.json`.
pub async fn write_cards_json(
    directory: &Path,
    set_code: &str,
    records: &[NormalizedCardRecord],
) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .await
        .with_context(|| format!("Failed to create output directory {}", directory.display()))?;

    let path = directory.join(format!("{}.json", set_code));
    let json = serde_json::to_string_pretty(records).context("Failed to serialize cards")?;

    fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
