use serde::{Deserialize, Serialize};

/// One catalog entry as served by the remote skills API.
///
/// Immutable once fetched; `updated_at` is unix seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSkill {
    pub id: String,
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub description: String,
    pub github_url: String,
    pub stars: u64,
    pub forks: u64,
    pub category: String,
    #[serde(default)]
    pub language: Option<String>,
    pub updated_at: i64,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub has_marketplace: bool,
}

/// One page of the catalog listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsPage {
    pub skills: Vec<RemoteSkill>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Persisted dataset entry: a remote skill plus Japanese translations and
/// derived presentation fields. The dataset file is a JSON array of these,
/// unique by `id` and sorted by `id` ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSkill {
    pub id: String,
    pub name: String,
    /// Original English name, kept for diffing and search.
    pub name_en: String,
    pub description: String,
    pub description_en: String,
    /// Japanese category label.
    pub category: String,
    /// Category slug as served upstream.
    pub category_en: String,
    pub author: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// Not provided by the catalog API, kept for schema compatibility.
    pub downloads: Option<u64>,
    /// YYYY-MM-DD, derived from the remote epoch timestamp.
    pub updated_at: String,
    pub tags: Vec<String>,
    pub github_url: String,
    /// Not provided by the catalog API, kept for schema compatibility.
    pub install_command: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub has_marketplace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_skill_deserializes_camel_case() {
        let raw = r#"{
            "id": "acme-linter",
            "name": "Linter",
            "author": "acme",
            "authorAvatar": "https://example.com/a.png",
            "description": "Lints things",
            "githubUrl": "https://github.com/acme/linter",
            "stars": 42,
            "forks": 3,
            "category": "developer-tools",
            "language": "Rust",
            "updatedAt": 1700000000,
            "homepage": null,
            "hasMarketplace": true
        }"#;

        let skill: RemoteSkill = serde_json::from_str(raw).unwrap();
        assert_eq!(skill.id, "acme-linter");
        assert_eq!(skill.github_url, "https://github.com/acme/linter");
        assert_eq!(skill.updated_at, 1_700_000_000);
        assert!(skill.has_marketplace);
        assert_eq!(skill.homepage, None);
    }

    #[test]
    fn catalog_skill_round_trips() {
        let entry = CatalogSkill {
            id: "acme-linter".to_string(),
            name: "リンター".to_string(),
            name_en: "Linter".to_string(),
            description: "説明".to_string(),
            description_en: "Lints things".to_string(),
            category: "開発者ツール".to_string(),
            category_en: "developer-tools".to_string(),
            author: "acme".to_string(),
            author_avatar: None,
            stars: 42,
            forks: 3,
            downloads: None,
            updated_at: "2023-11-14".to_string(),
            tags: vec!["Rust".to_string()],
            github_url: "https://github.com/acme/linter".to_string(),
            install_command: None,
            language: Some("Rust".to_string()),
            homepage: None,
            has_marketplace: false,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"nameEn\":\"Linter\""));
        assert!(json.contains("\"updatedAt\":\"2023-11-14\""));

        let back: CatalogSkill = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
