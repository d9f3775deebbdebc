use prometheus::{Histogram, HistogramOpts, IntCounter, IntGauge, Registry};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token metrics
    pub token_refreshes: IntCounter,
    pub token_refresh_failures: IntCounter,
    pub token_cache_hits: IntCounter,

    // Proxy metrics
    pub mood_requests: IntCounter,
    pub request_failures: IntCounter,
    pub search_duration: Histogram,

    // Runtime
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("moodproxy".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            token_refreshes: IntCounter::new("token_refresh_total", "Total refresh-token exchanges").unwrap(),
            token_refresh_failures: IntCounter::new("token_refresh_failures_total", "Refresh exchanges that failed").unwrap(),
            token_cache_hits: IntCounter::new("token_cache_hits_total", "Requests served with the cached token").unwrap(),

            mood_requests: IntCounter::new("mood_requests_total", "Incoming mood search requests").unwrap(),
            request_failures: IntCounter::new("request_failures_total", "Mood requests answered with an error").unwrap(),
            search_duration: Histogram::with_opts(HistogramOpts::new("search_duration_seconds", "Catalog search duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0])).unwrap(),

            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_refreshes.clone())).unwrap();
        reg.register(Box::new(metrics.token_refresh_failures.clone())).unwrap();
        reg.register(Box::new(metrics.token_cache_hits.clone())).unwrap();
        reg.register(Box::new(metrics.mood_requests.clone())).unwrap();
        reg.register(Box::new(metrics.request_failures.clone())).unwrap();
        reg.register(Box::new(metrics.search_duration.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
