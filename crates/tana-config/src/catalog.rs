use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://skillsmp.com/api/skills".to_string()
}

fn default_page_size() -> u32 {
    100 // API maximum
}

fn default_request_delay_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Pause between page requests.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl CatalogConfig {
    pub fn new() -> Self {
        let base_url = env::var("TANA_CATALOG_URL").unwrap_or_else(|_| default_base_url());

        let page_size = env::var("TANA_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_page_size);

        let request_delay_ms = env::var("TANA_REQUEST_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_delay_ms);

        CatalogConfig {
            base_url,
            page_size,
            request_delay_ms,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}
