use std::collections::HashMap;
use std::fmt;

use tana_catalog::CatalogDiff;
use tana_types::CatalogSkill;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
    pub unchanged: usize,
    /// Entries in the merged output (removed ids are dropped).
    pub total: usize,
}

impl PipelineReport {
    pub fn from_diff(diff: &CatalogDiff) -> Self {
        Self {
            added: diff.added.len(),
            updated: diff.updated.len(),
            removed: diff.removed.len(),
            unchanged: diff.unchanged.len(),
            total: diff.added.len() + diff.updated.len() + diff.unchanged.len(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.updated == 0 && self.removed == 0
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} updated, {} removed, {} unchanged",
            self.added, self.updated, self.removed, self.unchanged
        )
    }
}

/// End-of-run statistics: totals plus the five biggest categories and
/// languages, mirroring what the dataset consumers filter on.
pub fn print_statistics(entries: &[CatalogSkill], cache_size: usize) {
    let mut by_category: HashMap<&str, usize> = HashMap::new();
    let mut by_language: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        *by_category.entry(entry.category.as_str()).or_default() += 1;
        if let Some(language) = &entry.language {
            if !language.is_empty() {
                *by_language.entry(language.as_str()).or_default() += 1;
            }
        }
    }

    tracing::info!("total skills: {}", entries.len());
    for (category, count) in top(by_category) {
        tracing::info!("  category {category}: {count}");
    }
    for (language, count) in top(by_language) {
        tracing::info!("  language {language}: {count}");
    }
    tracing::info!("translation cache: {cache_size} unique texts");
}

fn top(counts: HashMap<&str, usize>) -> Vec<(&str, usize)> {
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    sorted.truncate(5);
    sorted
}
