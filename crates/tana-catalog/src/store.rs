use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tana_types::CatalogSkill;

/// Load the persisted dataset. A missing or corrupt file is not an error:
/// the run degrades to a full import.
pub fn load(path: &Path) -> Vec<CatalogSkill> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            tracing::warn!("no prior dataset at {}, treating as empty", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(
                "prior dataset at {} is corrupt ({err}), treating as empty",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Replace the dataset wholesale: pretty-printed UTF-8 JSON array, written
/// once at the end of a run. The caller sorts before saving.
pub fn save(path: &Path, entries: &[CatalogSkill]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(entries).context("Failed to serialize dataset")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("saved {} skills to {}", entries.len(), path.display());
    Ok(())
}
