#![allow(dead_code)]

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use ns1_exporter_domain::config::Ns1Config;
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;

pub const API_KEY: &str = "test-key";

// ============================================================================
// Fake NS1 API
// ============================================================================

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("X-NSONE-Key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == API_KEY)
}

async fn list_zones(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([
        {"zone": "example.com", "id": "zone-example-com"},
        {"zone": "example.net", "id": "zone-example-net"}
    ]))
    .into_response()
}

async fn zone_detail(headers: HeaderMap, Path(zone): Path<String>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if zone == "missing.com" {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "zone not found"})))
            .into_response();
    }
    Json(json!({
        "id": format!("zone-{}", zone.replace('.', "-")),
        "zone": zone,
        "records": [
            {"id": "rec-www", "domain": format!("www.{}", zone), "type": "A"},
            {"id": "rec-mx", "domain": zone, "type": "MX"}
        ]
    }))
    .into_response()
}

async fn qps(headers: HeaderMap, Path(path): Path<String>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if path.starts_with("slow.com") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    if path.starts_with("broken.com") {
        return "<html>oops</html>".into_response();
    }
    let value = if path.contains('/') { 2.5 } else { 10.125 };
    Json(json!({ "qps": value })).into_response()
}

/// Start a fake NS1 API on an ephemeral port.
pub async fn start_fake_ns1() -> SocketAddr {
    let app = Router::new()
        .route("/v1/zones", get(list_zones))
        .route("/v1/zones/{zone}", get(zone_detail))
        .route("/v1/stats/qps/{*path}", get(qps));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn config_for(addr: SocketAddr) -> Ns1Config {
    Ns1Config {
        api_key: API_KEY.to_string(),
        base_url: format!("http://{}/", addr),
        timeout_ms: 500,
        ..Default::default()
    }
}
