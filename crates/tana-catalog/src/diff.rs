use std::collections::{HashMap, HashSet};

use tana_types::{CatalogSkill, RemoteSkill};

use crate::transform::format_updated_at;

/// Partition of a fresh fetch against the previously persisted dataset.
/// Every fresh record lands in exactly one of added/updated/unchanged;
/// removed holds prior-only ids.
#[derive(Debug, Default)]
pub struct CatalogDiff {
    pub added: Vec<RemoteSkill>,
    pub updated: Vec<RemoteSkill>,
    /// Ids present in the prior dataset but gone upstream. Reported, and
    /// dropped from the merged output.
    pub removed: Vec<String>,
    /// Prior entries carried over verbatim.
    pub unchanged: Vec<CatalogSkill>,
}

impl CatalogDiff {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

pub fn diff(prior: &[CatalogSkill], fresh: &[RemoteSkill]) -> CatalogDiff {
    let prior_by_id: HashMap<&str, &CatalogSkill> =
        prior.iter().map(|s| (s.id.as_str(), s)).collect();
    let fresh_ids: HashSet<&str> = fresh.iter().map(|s| s.id.as_str()).collect();

    let mut result = CatalogDiff::default();

    for skill in fresh {
        match prior_by_id.get(skill.id.as_str()) {
            None => result.added.push(skill.clone()),
            Some(existing) if changed(existing, skill) => result.updated.push(skill.clone()),
            Some(existing) => result.unchanged.push((*existing).clone()),
        }
    }

    for entry in prior {
        if !fresh_ids.contains(entry.id.as_str()) {
            result.removed.push(entry.id.clone());
        }
    }

    result
}

/// A record counts as updated when any tracked field differs. Text compares
/// against the persisted English shadow fields; the timestamp after
/// normalizing to the persisted date format. All comparisons are exact.
fn changed(prior: &CatalogSkill, fresh: &RemoteSkill) -> bool {
    prior.stars != fresh.stars
        || prior.forks != fresh.forks
        || prior.updated_at != format_updated_at(fresh.updated_at)
        || prior.name_en != fresh.name
        || prior.description_en != fresh.description
}
