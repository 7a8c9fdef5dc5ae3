//! Debug endpoints: inspect the fixed weight table and preview the signal
//! breakdown for arbitrary text (no length gate).
//! Mounted by `crate::app` only when debug routes are enabled.

use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::{run_pipeline, SignalKind, WEIGHTS};
use crate::report::AnalysisReport;

#[derive(Debug, Serialize)]
pub struct WeightOut {
    pub signal: &'static str,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct WeightsOut {
    pub weights: Vec<WeightOut>,
    pub total_hundredths: u32,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub text: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/debug/weights", get(get_weights))
        .route("/debug/preview", get(get_preview))
}

async fn get_weights() -> Json<WeightsOut> {
    Json(WeightsOut {
        weights: SignalKind::ALL
            .iter()
            .map(|k| WeightOut {
                signal: k.name(),
                weight: k.weight(),
            })
            .collect(),
        total_hundredths: WEIGHTS.total_hundredths(),
    })
}

/// GET /debug/preview?text=...
async fn get_preview(Query(q): Query<PreviewQuery>) -> Json<AnalysisReport> {
    Json(run_pipeline(q.text.trim()))
}
