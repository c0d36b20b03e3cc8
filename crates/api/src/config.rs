use std::time::Duration;

use fleetmon_zabbix::ZabbixConfig;

/// Server configuration loaded from environment variables.
///
/// The upstream endpoint and service credential are required -- the
/// process refuses to start without them. Everything else has defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Upstream JSON-RPC endpoint URL.
    pub upstream_url: String,
    /// Transport-layer basic-auth user for the upstream service.
    pub service_user: String,
    /// Transport-layer basic-auth password for the upstream service.
    pub service_password: String,
    /// Inbound HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Outbound upstream call timeout in seconds (default: `10`).
    pub upstream_timeout_secs: u64,
    /// Directory the static frontend assets are served from
    /// (default: `./static`).
    pub static_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `HOST`                    | `0.0.0.0`   |
    /// | `PORT`                    | `8080`      |
    /// | `ZABBIX_API_URL`          | *required*  |
    /// | `ZABBIX_SERVICE_USER`     | *required*  |
    /// | `ZABBIX_SERVICE_PASSWORD` | *required*  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`        |
    /// | `UPSTREAM_TIMEOUT_SECS`   | `10`        |
    /// | `STATIC_DIR`              | `./static`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let upstream_url =
            std::env::var("ZABBIX_API_URL").expect("ZABBIX_API_URL must be set");
        let service_user =
            std::env::var("ZABBIX_SERVICE_USER").expect("ZABBIX_SERVICE_USER must be set");
        let service_password = std::env::var("ZABBIX_SERVICE_PASSWORD")
            .expect("ZABBIX_SERVICE_PASSWORD must be set");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".into());

        Self {
            host,
            port,
            upstream_url,
            service_user,
            service_password,
            request_timeout_secs,
            upstream_timeout_secs,
            static_dir,
        }
    }

    /// Assemble the upstream client settings from this configuration.
    ///
    /// The outbound timeout is deliberately shorter than the inbound
    /// request timeout so a slow upstream fails the call before the
    /// whole request times out.
    pub fn upstream_config(&self) -> ZabbixConfig {
        ZabbixConfig {
            api_url: self.upstream_url.clone(),
            service_user: self.service_user.clone(),
            service_password: self.service_password.clone(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }
}
