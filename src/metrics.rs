//! Hot-path instrumentation. Kept to counters and a histogram, with no exporter or server
//! wired up here — scraping/exposition is someone else's job.

pub(crate) fn record_fallback(reason: &'static str) {
    let labels = [("reason", reason)];
    metrics::counter!("weighted_balancer_fallback_total", &labels).increment(1);
}

pub(crate) fn record_selector_created() {
    metrics::counter!("weighted_balancer_selectors_created_total").increment(1);
}

pub(crate) fn record_selector_deleted() {
    metrics::counter!("weighted_balancer_selectors_deleted_total").increment(1);
}

pub(crate) fn record_weight_update(weight: i64) {
    metrics::histogram!("weighted_balancer_update_weight").record(weight as f64);
}
