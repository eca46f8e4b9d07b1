//! Web router using Axum

use axum::{response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use leadboard_core::models::{
    source_data, tracking_data, FunnelSummary, SourceMetric, TimeRange, ACTIVE_LEADS,
    FUNNEL_STAGES,
};

/// Create the web router
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/summary", get(summary_handler))
        .layer(cors)
}

async fn index_handler() -> Html<String> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>leadboard - Sales Dashboard</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 2rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
        .step {
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #333;
        }
        .api-links {
            margin-top: 2rem;
            padding-top: 1.5rem;
            border-top: 1px solid #ddd;
        }
        a { color: #0066cc; text-decoration: none; }
        a:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>leadboard - Frontend Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the dashboard can be displayed.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build frontend: <code>cd crates/leadboard-web && trunk build --release</code></li>
                <li>Restart server: <code>cargo run -p leadboard -- web</code></li>
            </ol>
        </div>

        <div class="api-links">
            <p><strong>API Endpoints (available now):</strong></p>
            <ul style="margin-left: 1.5rem;">
                <li><a href="/api/health">/api/health</a> - Health check</li>
                <li><a href="/api/summary">/api/summary</a> - Dataset summary JSON</li>
            </ul>
        </div>
    </div>
</body>
</html>"#
            .to_string(),
    )
}

async fn health_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "funnelStages": FUNNEL_STAGES.len(),
        "sourceMetrics": SourceMetric::ALL_METRICS.len(),
        "trackingRanges": TimeRange::ALL_RANGES.len(),
    }))
}

/// JSON snapshot of the embedded datasets. Introspection only; the
/// frontend compiles the same data in and never fetches it.
async fn summary_handler() -> axum::Json<serde_json::Value> {
    let summary = FunnelSummary::from_stages(&FUNNEL_STAGES);

    let sources: serde_json::Map<String, serde_json::Value> = SourceMetric::ALL_METRICS
        .iter()
        .map(|m| {
            (
                m.as_tag().to_string(),
                serde_json::to_value(source_data(*m)).unwrap_or(serde_json::Value::Null),
            )
        })
        .collect();

    let tracking: serde_json::Map<String, serde_json::Value> = TimeRange::ALL_RANGES
        .iter()
        .map(|r| {
            (
                r.as_tag().to_string(),
                serde_json::to_value(tracking_data(*r)).unwrap_or(serde_json::Value::Null),
            )
        })
        .collect();

    axum::Json(serde_json::json!({
        "funnel": {
            "activeLeads": ACTIVE_LEADS,
            "total": summary.total,
            "stages": FUNNEL_STAGES,
        },
        "sources": sources,
        "tracking": tracking,
    }))
}
