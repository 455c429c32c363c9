use std::env;

use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::translator::TranslatorConfig;

pub mod catalog;
pub mod translator;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub translator: TranslatorConfig,
    /// Where the merged dataset is written.
    pub output_path: String,
}

impl Config {
    pub fn new() -> Self {
        let output_path =
            env::var("TANA_OUTPUT").unwrap_or_else(|_| "data/skills.json".to_string());

        Config {
            catalog: CatalogConfig::new(),
            translator: TranslatorConfig::new(),
            output_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog: CatalogConfig::default(),
            translator: TranslatorConfig::default(),
            output_path: "data/skills.json".to_string(),
        }
    }
}
