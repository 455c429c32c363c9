use chrono::DateTime;
use tana_types::{CatalogSkill, RemoteSkill};

const MAX_TAGS: usize = 5;

/// Category slug to Japanese label. Unknown slugs pass through unchanged.
pub fn category_label(slug: &str) -> &str {
    match slug {
        "developer-tools" => "開発者ツール",
        "web-app-development" => "Web & アプリ開発",
        "testing-qa" => "テスト & QA",
        "documents-content" => "ドキュメント & コンテンツ",
        "database-data" => "データベース & データ",
        "api-backend" => "API & バックエンド",
        "devops-infrastructure" => "DevOps & インフラ",
        "security-monitoring" => "セキュリティ & 監視",
        "scientific-computing" => "科学計算",
        "ai-ml" => "AI & 機械学習",
        "claude-ecosystem" => "Claudeエコシステム",
        "other" => "その他",
        other => other,
    }
}

/// Unix seconds to YYYY-MM-DD (UTC).
pub fn format_updated_at(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Source language, category label, marketplace marker; at most five.
fn derive_tags(skill: &RemoteSkill) -> Vec<String> {
    let mut tags = Vec::new();

    if let Some(language) = &skill.language {
        if !language.is_empty() {
            tags.push(language.clone());
        }
    }

    if !skill.category.is_empty() {
        tags.push(category_label(&skill.category).to_string());
    }

    if skill.has_marketplace {
        tags.push("Marketplace対応".to_string());
    }

    tags.truncate(MAX_TAGS);
    tags
}

/// Assemble a persisted entry from a fresh record and its translations.
/// A missing translation keeps the English original.
pub fn build_entry(
    skill: &RemoteSkill,
    name_ja: Option<&str>,
    description_ja: Option<&str>,
) -> CatalogSkill {
    CatalogSkill {
        id: skill.id.clone(),
        name: name_ja.unwrap_or(&skill.name).to_string(),
        name_en: skill.name.clone(),
        description: description_ja.unwrap_or(&skill.description).to_string(),
        description_en: skill.description.clone(),
        category: category_label(&skill.category).to_string(),
        category_en: skill.category.clone(),
        author: skill.author.clone(),
        author_avatar: skill.author_avatar.clone(),
        stars: skill.stars,
        forks: skill.forks,
        downloads: None,
        updated_at: format_updated_at(skill.updated_at),
        tags: derive_tags(skill),
        github_url: skill.github_url.clone(),
        install_command: None,
        language: skill.language.clone(),
        homepage: skill.homepage.clone(),
        has_marketplace: skill.has_marketplace,
    }
}
