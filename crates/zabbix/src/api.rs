//! The four upstream operations: session login, device inventory,
//! device telemetry, and active triggers.
//!
//! Each method issues exactly one RPC through
//! [`ZabbixClient::call`](crate::client::ZabbixClient::call) and decodes
//! the `result` payload into the matching `fleetmon-core` type.

use serde_json::Value;

use fleetmon_core::device::Device;
use fleetmon_core::telemetry::{self, MetricItem};
use fleetmon_core::trigger::Trigger;

use crate::client::ZabbixClient;
use crate::error::ZabbixError;

impl ZabbixClient {
    /// Exchange operator credentials for a session token
    /// (`user.login`).
    ///
    /// Both inputs must be non-empty; no other password policy is
    /// enforced here. The token is returned as an opaque string -- the
    /// gateway never inspects, stores, or refreshes it. Neither the
    /// password nor the token appears in logs or error values.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ZabbixError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ZabbixError::EmptyCredentials);
        }

        let params = serde_json::json!({
            "user": username,
            "password": password,
        });

        let result = self.call("user.login", params, None).await?;

        match result {
            Value::String(token) => Ok(token),
            _ => Err(ZabbixError::Malformed(
                "login result is not a string".into(),
            )),
        }
    }

    /// Fetch the full managed-host list (`host.get`) with interfaces,
    /// groups, and items included.
    ///
    /// Devices come back in upstream order; no re-sorting or
    /// de-duplication happens here.
    pub async fn get_devices(&self, token: &str) -> Result<Vec<Device>, ZabbixError> {
        let params = serde_json::json!({
            "output": ["hostid", "host", "name"],
            "selectInterfaces": ["interfaceid", "ip"],
            "selectGroups": ["groupid", "name"],
            "selectItems": ["itemid", "name", "key_", "lastvalue"],
        });

        let result = self.call("host.get", params, Some(token)).await?;

        let devices: Vec<Device> = serde_json::from_value(result)
            .map_err(|e| ZabbixError::Malformed(e.to_string()))?;

        tracing::debug!(count = devices.len(), "fetched device inventory");
        Ok(devices)
    }

    /// Fetch the allow-listed metric items for one host (`item.get`)
    /// and fold them into a single [`Device`] record.
    ///
    /// The filter is built from the core metric table, so the request
    /// and the fold can never drift apart. An empty or partial result
    /// set is not an error; unmatched fields stay at their defaults.
    pub async fn get_device_info(
        &self,
        token: &str,
        host_id: &str,
    ) -> Result<Device, ZabbixError> {
        let params = serde_json::json!({
            "output": ["key_", "name", "lastvalue"],
            "hostids": host_id,
            "filter": { "key_": telemetry::metric_keys() },
            "sortfield": "key_",
        });

        let result = self.call("item.get", params, Some(token)).await?;

        let items: Vec<MetricItem> = serde_json::from_value(result)
            .map_err(|e| ZabbixError::Malformed(e.to_string()))?;

        let (device, downgraded) = telemetry::fold_items(items);
        if downgraded > 0 {
            tracing::warn!(host_id, downgraded, "telemetry fields downgraded to sentinel");
        }

        Ok(device)
    }

    /// Fetch the currently-active triggers for one host
    /// (`trigger.get`, filtered to `value == 1` upstream).
    ///
    /// Zero active triggers yields an empty vec, not an error.
    pub async fn get_triggers(
        &self,
        token: &str,
        host_id: &str,
    ) -> Result<Vec<Trigger>, ZabbixError> {
        let params = serde_json::json!({
            "output": ["triggerid", "description", "priority", "status", "lastchange"],
            "hostids": host_id,
            "filter": { "value": 1 },
        });

        let result = self.call("trigger.get", params, Some(token)).await?;

        let triggers: Vec<Trigger> = serde_json::from_value(result)
            .map_err(|e| ZabbixError::Malformed(e.to_string()))?;

        tracing::debug!(host_id, count = triggers.len(), "fetched active triggers");
        Ok(triggers)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use crate::client::ZabbixConfig;

    use super::*;

    fn offline_client() -> ZabbixClient {
        // Points at a closed port; tests that reach the network would
        // fail fast rather than hang.
        ZabbixClient::new(ZabbixConfig {
            api_url: "http://127.0.0.1:9/api_jsonrpc.php".into(),
            service_user: "svc".into(),
            service_password: "svc-secret".into(),
            timeout: Duration::from_millis(200),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn login_rejects_empty_username_without_network() {
        let client = offline_client();
        assert_matches!(
            client.login("", "password").await,
            Err(ZabbixError::EmptyCredentials)
        );
    }

    #[tokio::test]
    async fn login_rejects_empty_password_without_network() {
        let client = offline_client();
        assert_matches!(
            client.login("operator", "").await,
            Err(ZabbixError::EmptyCredentials)
        );
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_transport_error() {
        let client = offline_client();
        assert_matches!(
            client.get_devices("some-token").await,
            Err(ZabbixError::Transport(_))
        );
    }
}
