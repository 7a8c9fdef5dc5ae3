// src/api.rs
//! HTTP surface over the detector: `/health`, `/analyze`, `/batch`.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::analyze::{anon_hash, Detector};
use crate::config::DetectorConfig;
use crate::error::{DetectError, DetectResult};
use crate::metrics;
use crate::report::AnalysisReport;

#[derive(Clone)]
pub struct AppState {
    detector: Arc<Detector>,
    max_batch: usize,
}

impl AppState {
    pub fn new(cfg: &DetectorConfig) -> Self {
        Self {
            detector: Arc::new(Detector::new(cfg.min_chars)),
            max_batch: cfg.max_batch,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .route("/batch", post(analyze_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeReq {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct BatchItemOut {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    Invalid(DetectError),
    BatchTooLarge { got: usize, max: usize },
    Internal(String),
}

impl From<DetectError> for ApiError {
    fn from(e: DetectError) -> Self {
        ApiError::Invalid(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Invalid(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::BatchTooLarge { got, max } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("batch of {got} items exceeds limit of {max}"),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}

/// Gate + pipeline with metrics; runs on the blocking pool.
fn analyze_one(detector: &Detector, text: &str) -> DetectResult<AnalysisReport> {
    let started = Instant::now();
    match detector.analyze(text) {
        Ok(report) => {
            metrics::record_analysis(report.percentage, started.elapsed().as_secs_f64() * 1000.0);
            Ok(report)
        }
        Err(e) => {
            metrics::record_rejection();
            info!(id = %anon_hash(text), error = %e, "input rejected");
            Err(e)
        }
    }
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let detector = Arc::clone(&state.detector);
    let report = tokio::task::spawn_blocking(move || analyze_one(&detector, &body.text))
        .await
        .map_err(|e| {
            warn!(error = %e, "analysis task failed");
            ApiError::Internal("analysis task failed".to_string())
        })??;
    Ok(Json(report))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<AnalyzeReq>>,
) -> Result<Json<Vec<BatchItemOut>>, ApiError> {
    if items.len() > state.max_batch {
        return Err(ApiError::BatchTooLarge {
            got: items.len(),
            max: state.max_batch,
        });
    }

    let detector = Arc::clone(&state.detector);
    let out = tokio::task::spawn_blocking(move || {
        items
            .iter()
            .enumerate()
            .map(|(index, it)| match analyze_one(&detector, &it.text) {
                Ok(report) => BatchItemOut {
                    index,
                    report: Some(report),
                    error: None,
                },
                Err(e) => BatchItemOut {
                    index,
                    report: None,
                    error: Some(e.to_string()),
                },
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| {
        warn!(error = %e, "batch task failed");
        ApiError::Internal("batch task failed".to_string())
    })?;

    Ok(Json(out))
}
