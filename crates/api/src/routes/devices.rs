//! Route definitions for the device resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::devices;
use crate::state::AppState;

/// Routes mounted at the root (all require the session cookie).
///
/// ```text
/// GET /api/devices/                    -> list_devices
/// GET /api/deviceinfo/?hostid=         -> device_info
/// GET /api/devices/triggers/?hostid=   -> device_triggers
/// ```
///
/// Each path is registered with and without its trailing slash: the
/// frontend requests the slashless forms, and axum does not redirect
/// between the two.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/devices", get(devices::list_devices))
        .route("/api/devices/", get(devices::list_devices))
        .route("/api/deviceinfo", get(devices::device_info))
        .route("/api/deviceinfo/", get(devices::device_info))
        .route("/api/devices/triggers", get(devices::device_triggers))
        .route("/api/devices/triggers/", get(devices::device_triggers))
}
