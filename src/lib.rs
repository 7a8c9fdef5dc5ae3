// src/lib.rs
// Public library surface: the detection core plus the HTTP router used by the binary.

pub mod analyze;
pub mod api;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod report;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze_text, Confidence, Detector, SignalKind, SignalRecord};
pub use crate::error::{DetectError, DetectResult};
pub use crate::report::{AnalysisReport, Classification, TextStats};

use axum::Router;
use tracing::info;

/// Build the full in-process app from config/env: public routes, plus
/// `/debug/*` and `/metrics` when debug routes are enabled.
pub async fn app() -> anyhow::Result<Router> {
    let cfg = config::DetectorConfig::from_env()?;
    let prom = crate::metrics::Metrics::global()?;
    crate::metrics::record_min_chars(cfg.min_chars);

    let mut router = api::create_router(api::AppState::new(&cfg));
    if cfg.debug_routes {
        router = router.merge(analyze::debug::router()).merge(prom.router());
    }

    info!(
        min_chars = cfg.min_chars,
        max_batch = cfg.max_batch,
        debug_routes = cfg.debug_routes,
        "detector app ready"
    );
    Ok(router)
}
