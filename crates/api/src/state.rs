use std::sync::Arc;

use fleetmon_zabbix::ZabbixClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc` and immutable after
/// startup. Request handling shares no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream monitoring-service client.
    pub zabbix: Arc<ZabbixClient>,
}
