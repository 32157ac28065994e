//! Feed Assembly Metrics
//!
//! Prometheus metrics for the per-page assembly pipeline

use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

static PAGES_ASSEMBLED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "feed_assembly_pages_total",
        "Total feed pages assembled (interleaved/backfilled/empty)",
        &["outcome"]
    )
    .expect("Failed to register feed assembly pages metric")
});

static FALLBACK_ITEMS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "feed_assembly_fallback_items_total",
        "Total items appended by the fallback filler"
    )
    .expect("Failed to register fallback fill items metric")
});

static ITEMS_PER_PAGE: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "feed_assembly_items_per_page",
        "Items returned per assembled page",
        vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0, 100.0]
    )
    .expect("Failed to register items per page metric")
});

/// Record one assembled page by outcome (interleaved/backfilled/empty)
pub fn record_page_assembled(outcome: &str) {
    PAGES_ASSEMBLED_TOTAL.with_label_values(&[outcome]).inc();
}

/// Record items appended by the fallback filler
pub fn record_fallback_items(count: u64) {
    FALLBACK_ITEMS_TOTAL.inc_by(count);
}

/// Observe final item count of an assembled page
pub fn observe_page_items(count: usize) {
    ITEMS_PER_PAGE.observe(count as f64);
}
