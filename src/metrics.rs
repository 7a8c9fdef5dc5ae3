use anyhow::Context;
use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub const ANALYSES_TOTAL: &str = "detector_analyses_total";
pub const REJECTIONS_TOTAL: &str = "detector_rejections_total";
pub const PERCENTAGE: &str = "detector_percentage";
pub const DURATION_MS: &str = "detector_duration_ms";
pub const MIN_CHARS: &str = "detector_min_chars";

static GLOBAL: OnceCell<Metrics> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder once per process and return it.
    pub fn global() -> anyhow::Result<&'static Metrics> {
        GLOBAL.get_or_try_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .context("prometheus: install recorder")?;
            Ok::<_, anyhow::Error>(Metrics { handle })
        })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

// Recording helpers are no-ops until a recorder is installed.

pub fn record_min_chars(min_chars: usize) {
    gauge!(MIN_CHARS).set(min_chars as f64);
}

pub fn record_analysis(percentage: u8, duration_ms: f64) {
    counter!(ANALYSES_TOTAL).increment(1);
    histogram!(PERCENTAGE).record(f64::from(percentage));
    histogram!(DURATION_MS).record(duration_ms);
}

pub fn record_rejection() {
    counter!(REJECTIONS_TOTAL).increment(1);
}
