//! Handlers for the `/api/devices` and `/api/deviceinfo` resources.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use fleetmon_core::device::Device;
use fleetmon_core::trigger::Trigger;

use crate::error::{AppError, AppResult};
use crate::middleware::session::SessionToken;
use crate::state::AppState;

/// Query parameters for the per-device endpoints (`?hostid=`).
#[derive(Debug, Deserialize)]
pub struct HostIdParams {
    pub hostid: Option<String>,
}

impl HostIdParams {
    /// The host identifier, or a 400 if it was absent or empty. The
    /// check runs before any upstream call is made.
    fn require(&self) -> Result<&str, AppError> {
        self.hostid
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("hostid query parameter is required".into()))
    }
}

/// GET /api/devices/
///
/// Full device inventory, in upstream order.
pub async fn list_devices(
    State(state): State<AppState>,
    session: SessionToken,
) -> AppResult<Json<Vec<Device>>> {
    let devices = state.zabbix.get_devices(&session.0).await?;
    Ok(Json(devices))
}

/// GET /api/deviceinfo/?hostid={id}
///
/// One device record folded from the host's allow-listed metric items.
pub async fn device_info(
    State(state): State<AppState>,
    session: SessionToken,
    Query(params): Query<HostIdParams>,
) -> AppResult<Json<Device>> {
    let host_id = params.require()?;
    let device = state.zabbix.get_device_info(&session.0, host_id).await?;
    Ok(Json(device))
}

/// GET /api/devices/triggers/?hostid={id}
///
/// The host's currently-active triggers, in upstream order.
pub async fn device_triggers(
    State(state): State<AppState>,
    session: SessionToken,
    Query(params): Query<HostIdParams>,
) -> AppResult<Json<Vec<Trigger>>> {
    let host_id = params.require()?;
    let triggers = state.zabbix.get_triggers(&session.0, host_id).await?;
    Ok(Json(triggers))
}
