//! Integration tests for the JSON API

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(uri: &str) -> axum::response::Response {
    let router = leadboard_web::create_router();
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn index_serves_html_shell() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn health_reports_dataset_counts() {
    let response = get("/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["funnelStages"], 5);
    assert_eq!(json["sourceMetrics"], 3);
    assert_eq!(json["trackingRanges"], 3);
}

#[tokio::test]
async fn summary_reflects_embedded_datasets() {
    let response = get("/api/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;

    assert_eq!(json["funnel"]["total"], 390);
    assert_eq!(json["funnel"]["activeLeads"], 600);
    assert_eq!(json["funnel"]["stages"].as_array().unwrap().len(), 5);

    // one dataset per selector tag, with the documented lengths
    assert_eq!(json["tracking"]["6m"].as_array().unwrap().len(), 6);
    assert_eq!(json["tracking"]["1y"].as_array().unwrap().len(), 12);
    assert_eq!(json["tracking"]["all"].as_array().unwrap().len(), 8);

    for tag in ["leadsCame", "leadsConverted", "totalDeals"] {
        assert_eq!(json["sources"][tag].as_array().unwrap().len(), 4);
    }

    // legend order is dataset order
    let first = &json["sources"]["leadsConverted"][0];
    assert_eq!(first["name"], "Clutch");
    assert_eq!(first["value"], 1500);
    assert_eq!(first["percentage"], 45);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get("/api/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
