// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serial_test::serial;
use tower::ServiceExt;

// Build full in-process app (includes debug/metrics when gated via env).
async fn build_app() -> Router {
    std::env::set_var("DEBUG_ROUTES", "1");
    zero_detect::app()
        .await
        .expect("app() should build Router in tests")
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_analyze(app: Router, text: &str) -> StatusCode {
    let payload = serde_json::json!({ "text": text }).to_string();
    app.oneshot(
        Request::post("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(payload))
            .unwrap(),
    )
    .await
    .unwrap()
    .status()
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_reports_analyses_and_rejections() {
    let app = build_app().await;

    let ok = post_analyze(
        app.clone(),
        "A long enough paragraph about gardens, weather and the slow patience of growing tomatoes.",
    )
    .await;
    assert_eq!(ok, StatusCode::OK);
    let rejected = post_analyze(app.clone(), "short").await;
    assert_eq!(rejected, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, text) = get_text(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    for needle in [
        "detector_analyses_total",
        "detector_rejections_total",
        "detector_percentage",
        "detector_duration_ms",
        "detector_min_chars",
    ] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}

#[tokio::test]
#[serial]
async fn debug_routes_expose_weights_and_preview() {
    let app = build_app().await;

    let (status, body) = get_text(app.clone(), "/debug/weights").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["total_hundredths"], 100);
    assert_eq!(v["weights"].as_array().unwrap().len(), 8);
    assert_eq!(v["weights"][0]["signal"], "Entropy");

    // Preview skips the length gate.
    let (status, body) = get_text(app, "/debug/preview?text=tiny%20text").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["signals"].as_array().unwrap().len(), 8);
}
