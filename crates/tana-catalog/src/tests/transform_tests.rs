use super::remote;
use crate::transform::{build_entry, category_label, format_updated_at};

#[test]
fn formats_epoch_seconds_as_date() {
    assert_eq!(format_updated_at(1_700_000_000), "2023-11-14");
    assert_eq!(format_updated_at(0), "1970-01-01");
}

#[test]
fn known_categories_map_to_japanese() {
    assert_eq!(category_label("developer-tools"), "開発者ツール");
    assert_eq!(category_label("ai-ml"), "AI & 機械学習");
}

#[test]
fn unknown_category_passes_through() {
    assert_eq!(category_label("quantum-basket-weaving"), "quantum-basket-weaving");
}

#[test]
fn tags_follow_language_category_marketplace_order() {
    let mut skill = remote("a", 1);
    skill.has_marketplace = true;

    let entry = build_entry(&skill, None, None);

    assert_eq!(entry.tags, ["Rust", "開発者ツール", "Marketplace対応"]);
}

#[test]
fn missing_language_is_skipped_in_tags() {
    let mut skill = remote("a", 1);
    skill.language = None;

    let entry = build_entry(&skill, None, None);

    assert_eq!(entry.tags, ["開発者ツール"]);
}

#[test]
fn translations_land_next_to_originals() {
    let skill = remote("a", 1);

    let entry = build_entry(&skill, Some("名前"), Some("説明"));

    assert_eq!(entry.name, "名前");
    assert_eq!(entry.name_en, "a name");
    assert_eq!(entry.description, "説明");
    assert_eq!(entry.description_en, "a description");
    assert_eq!(entry.category, "開発者ツール");
    assert_eq!(entry.category_en, "developer-tools");
    assert_eq!(entry.downloads, None);
    assert_eq!(entry.install_command, None);
}

#[test]
fn untranslated_entry_keeps_english() {
    let skill = remote("a", 1);

    let entry = build_entry(&skill, None, None);

    assert_eq!(entry.name, entry.name_en);
    assert_eq!(entry.description, entry.description_en);
}
