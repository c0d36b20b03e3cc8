#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fleetmon_api::config::ServerConfig;
use fleetmon_api::router::build_app_router;
use fleetmon_api::state::AppState;
use fleetmon_zabbix::ZabbixClient;

/// Build a test `ServerConfig` pointing at the given upstream endpoint.
///
/// Short timeouts so tests that accidentally hit the network fail fast;
/// the static dir points at a path that does not exist, so unmatched
/// routes become plain 404s.
pub fn test_config(upstream_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        upstream_url: upstream_url.to_string(),
        service_user: "svc".to_string(),
        service_password: "svc-secret".to_string(),
        request_timeout_secs: 5,
        upstream_timeout_secs: 2,
        static_dir: "./no-such-static-dir".to_string(),
    }
}

/// Build the full application router with all middleware layers,
/// talking to the given upstream endpoint.
///
/// Uses [`build_app_router`] so integration tests exercise the same
/// middleware stack (request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(upstream_url: &str) -> Router {
    let config = test_config(upstream_url);
    let zabbix = ZabbixClient::new(config.upstream_config()).expect("test client");

    let state = AppState {
        config: Arc::new(config.clone()),
        zabbix: Arc::new(zabbix),
    };

    build_app_router(state, &config)
}

/// An upstream endpoint URL guaranteed to refuse connections
/// (port 9, discard). For tests that must not reach the network.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:9/api_jsonrpc.php";

/// Spawn a stub upstream server on an ephemeral port and return the
/// JSON-RPC endpoint URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream");
    });

    format!("http://{addr}/api_jsonrpc.php")
}

/// Stub upstream that answers every RPC with `{"result": <value>}`.
pub fn rpc_result(result: Value) -> Router {
    rpc_raw(serde_json::json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": 1,
    }))
}

/// Stub upstream that answers every RPC with an application error
/// envelope carrying `message`.
pub fn rpc_error(message: &str) -> Router {
    rpc_raw(serde_json::json!({
        "jsonrpc": "2.0",
        "error": { "message": message, "code": -32602 },
        "id": 1,
    }))
}

/// Stub upstream that answers every RPC with the given raw body.
pub fn rpc_raw(body: Value) -> Router {
    let body = Arc::new(body);
    Router::new().route(
        "/api_jsonrpc.php",
        post(move || {
            let body = Arc::clone(&body);
            async move { Json((*body).clone()) }
        }),
    )
}

/// Stub upstream that answers every RPC with a bare HTTP status.
pub fn rpc_http_status(status: StatusCode) -> Router {
    Router::new().route(
        "/api_jsonrpc.php",
        post(move || async move { (status, "upstream exploded") }),
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request carrying the session cookie.
pub async fn get_with_session(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, format!("zabbix_auth_token={token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
