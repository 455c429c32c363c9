use std::sync::Arc;

use super::{CountingBackend, FailingBackend, ThrottledBackend};
use crate::{Provider, TranslateError};

#[tokio::test]
async fn repeated_text_hits_cache_once() {
    let backend = Arc::new(CountingBackend::new());
    let provider = Provider::new(Some(backend.clone()), 4);

    let first = provider.translate("Hello World").await;
    let second = provider.translate("Hello World").await;

    assert_eq!(first, "Hello World-ja");
    assert_eq!(second, first);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn cache_key_is_case_insensitive() {
    let backend = Arc::new(CountingBackend::new());
    let provider = Provider::new(Some(backend.clone()), 4);

    provider.translate("Hello").await;
    provider.translate("HELLO").await;

    assert_eq!(backend.call_count(), 1);
    assert_eq!(provider.cache_size(), 1);
}

#[tokio::test]
async fn empty_text_short_circuits() {
    let backend = Arc::new(CountingBackend::new());
    let provider = Provider::new(Some(backend.clone()), 4);

    assert_eq!(provider.translate("").await, "");
    assert_eq!(provider.translate("   ").await, "   ");
    assert_eq!(backend.call_count(), 0);
    assert_eq!(provider.cache_size(), 0);
}

#[tokio::test]
async fn disabled_provider_passes_through() {
    let provider = Provider::disabled();

    assert_eq!(provider.translate("Hello").await, "Hello");
    assert!(!provider.is_enabled());
    assert_eq!(provider.backend_name(), "none");
}

#[tokio::test]
async fn failure_falls_back_to_input_without_retry() {
    let backend = Arc::new(FailingBackend::new());
    let provider = Provider::new(Some(backend.clone()), 4);

    assert_eq!(provider.translate("Hello").await, "Hello");
    // Non-retryable errors burn exactly one attempt.
    assert_eq!(backend.call_count(), 1);
    // Failures never populate the cache.
    assert_eq!(provider.cache_size(), 0);
}

#[tokio::test(start_paused = true)]
async fn rate_limit_retries_with_backoff_then_succeeds() {
    let backend = Arc::new(ThrottledBackend::new(2));
    let provider = Provider::new(Some(backend.clone()), 4);

    assert_eq!(provider.translate("Hello").await, "Hello-ja");
    assert_eq!(backend.call_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn exhausted_retries_fall_back() {
    let backend = Arc::new(ThrottledBackend::new(usize::MAX));
    let provider = Provider::new(Some(backend.clone()), 3);

    assert_eq!(provider.translate("Hello").await, "Hello");
    assert_eq!(backend.call_count(), 3);
}

#[test]
fn retryability_predicate() {
    assert!(TranslateError::RateLimited.is_rate_limited());
    assert!(!TranslateError::Api("HTTP 500".to_string()).is_rate_limited());
    assert!(!TranslateError::Auth.is_rate_limited());
}
