use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tana_catalog::fetch::{CatalogClient, PageSource, fetch_all};
use tana_catalog::{diff, store, transform};
use tana_config::Config;
use tana_translator::batch::translate_all;
use tana_translator::{MyMemoryBackend, OpenAiBackend, Provider, TranslateBackend};
use tana_types::{CatalogSkill, RemoteSkill};

use crate::report::{self, PipelineReport};

/// Wire the configured backend and run against the real catalog API.
pub async fn run(config: &Config) -> Result<PipelineReport> {
    let client = CatalogClient::new(config.catalog.base_url.clone(), config.catalog.page_size);
    let provider = Arc::new(Provider::new(
        select_backend(config),
        config.translator.retries,
    ));

    run_with(config, &client, provider).await
}

/// Backend selection happens once at startup: the paid backend when a key is
/// configured, the free one when toggled, otherwise pass-through.
fn select_backend(config: &Config) -> Option<Arc<dyn TranslateBackend>> {
    let translator = &config.translator;

    if !translator.api_key.is_empty() {
        Some(Arc::new(OpenAiBackend::new(
            translator.api_key.clone(),
            translator.api_url.clone(),
            translator.model.clone(),
        )))
    } else if translator.use_free_backend {
        Some(Arc::new(MyMemoryBackend::new(translator.free_api_url.clone())))
    } else {
        None
    }
}

/// The full run: load prior state, fetch, diff, translate only what changed,
/// merge, persist, report. Generic over the page source so tests can feed a
/// fake catalog.
pub async fn run_with(
    config: &Config,
    source: &dyn PageSource,
    provider: Arc<Provider>,
) -> Result<PipelineReport> {
    let output_path = Path::new(&config.output_path);

    tracing::info!("translation backend: {}", provider.backend_name());

    let prior = store::load(output_path);
    tracing::info!("loaded {} prior skills", prior.len());

    let request_delay = Duration::from_millis(config.catalog.request_delay_ms);
    let fresh = fetch_all(source, request_delay).await?;
    tracing::info!("fetched {} skills", fresh.len());

    let diffed = diff(&prior, &fresh);
    let summary = PipelineReport::from_diff(&diffed);

    if diffed.is_noop() {
        tracing::info!("no upstream changes, dataset left untouched");
        return Ok(summary);
    }

    tracing::info!("diff: {summary}");

    let changed: Vec<RemoteSkill> = diffed
        .added
        .iter()
        .chain(diffed.updated.iter())
        .cloned()
        .collect();

    let names: Vec<String> = changed.iter().map(|s| s.name.clone()).collect();
    let descriptions: Vec<String> = changed.iter().map(|s| s.description.clone()).collect();

    let concurrency = config.translator.concurrency;
    let chunk_pause = Duration::from_millis(config.translator.chunk_pause_ms);

    tracing::info!("translating {} skill names", names.len());
    let translated_names =
        translate_all(&provider, &names, concurrency, chunk_pause, progress("names")).await;

    tracing::info!("translating {} descriptions", descriptions.len());
    let translated_descriptions = translate_all(
        &provider,
        &descriptions,
        concurrency,
        chunk_pause,
        progress("descriptions"),
    )
    .await;

    let mut merged: Vec<CatalogSkill> = diffed.unchanged;
    for (i, skill) in changed.iter().enumerate() {
        merged.push(transform::build_entry(
            skill,
            Some(&translated_names[i]),
            Some(&translated_descriptions[i]),
        ));
    }
    merged.sort_by(|a, b| a.id.cmp(&b.id));

    store::save(output_path, &merged)?;

    report::print_statistics(&merged, provider.cache_size());

    Ok(summary)
}

/// Progress logger, throttled to every fiftieth completion.
fn progress(label: &'static str) -> impl FnMut(usize, usize) {
    move |completed, total| {
        if completed % 50 == 0 || completed == total {
            tracing::info!("{label}: {completed}/{total}");
        }
    }
}
