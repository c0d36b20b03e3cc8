pub mod auth;
pub mod devices;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the gateway route tree.
///
/// ```text
/// POST /login                        exchange credentials for a session cookie
/// GET  /api/devices/                 device inventory
/// GET  /api/deviceinfo/?hostid=      one device's folded telemetry
/// GET  /api/devices/triggers/?hostid= active triggers for a device
/// GET  /health                       liveness probe (no session)
/// ```
///
/// Paths keep their trailing slashes -- the frontend requests them that
/// way.
pub fn gateway_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(devices::router())
}
