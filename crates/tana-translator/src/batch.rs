use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::Provider;

/// Translate a list of texts with bounded concurrency.
///
/// Input is processed in sequential chunks of `concurrency`; items within a
/// chunk run concurrently. The output has the same length and order as the
/// input. A failed item only loses its own slot, falling back to the input
/// text. `on_progress` fires once per completed item.
pub async fn translate_all<F>(
    provider: &Arc<Provider>,
    texts: &[String],
    concurrency: usize,
    chunk_pause: Duration,
    mut on_progress: F,
) -> Vec<String>
where
    F: FnMut(usize, usize),
{
    if texts.is_empty() {
        return Vec::new();
    }

    let total = texts.len();
    let concurrency = concurrency.max(1);
    let mut results: Vec<Option<String>> = vec![None; total];
    let mut completed = 0;

    for (chunk_index, chunk) in texts.chunks(concurrency).enumerate() {
        let offset = chunk_index * concurrency;
        let mut tasks = JoinSet::new();

        for (i, text) in chunk.iter().enumerate() {
            let provider = Arc::clone(provider);
            let text = text.clone();
            tasks.spawn(async move { (offset + i, provider.translate(&text).await) });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, translated)) => {
                    results[index] = Some(translated);
                }
                Err(err) => {
                    // The slot stays None and falls back below.
                    tracing::warn!("translation task failed: {err}");
                }
            }
            completed += 1;
            on_progress(completed, total);
        }

        // Courtesy pause between chunks, none after the last one.
        if offset + concurrency < total {
            tokio::time::sleep(chunk_pause).await;
        }
    }

    results
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or_else(|| texts[i].clone()))
        .collect()
}
