use std::time::Duration;

use anyhow::{Context, Result};
use tana_types::{RemoteSkill, SkillsPage};

/// A source of catalog pages. The HTTP client implements this; tests
/// substitute fakes.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<SkillsPage>;
}

#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
    page_size: u32,
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: String, page_size: u32) -> Self {
        Self {
            base_url,
            page_size,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<SkillsPage> {
        let url = format!("{}?page={}&limit={}", self.base_url, page, self.page_size);
        tracing::debug!("fetching {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to catalog API")?;

        if !response.status().is_success() {
            anyhow::bail!("catalog API returned HTTP {}", response.status());
        }

        response
            .json::<SkillsPage>()
            .await
            .context("Failed to parse catalog API response")
    }
}

/// Fetch the whole catalog, page by page, strictly sequentially and in page
/// order. Any transport failure aborts the fetch; no partial data escapes.
pub async fn fetch_all(
    source: &dyn PageSource,
    request_delay: Duration,
) -> Result<Vec<RemoteSkill>> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let response = source.fetch_page(page).await?;
        let got = response.skills.len();
        all.extend(response.skills);

        tracing::info!(
            "page {}/{}: got {} skills ({} total)",
            page,
            response.pagination.total_pages,
            got,
            all.len()
        );

        if !response.pagination.has_next {
            break;
        }

        page += 1;
        // Courtesy delay between pages, never after the last one.
        tokio::time::sleep(request_delay).await;
    }

    Ok(all)
}
