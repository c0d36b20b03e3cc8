//! Transport and envelope handling for the upstream JSON-RPC endpoint.
//!
//! Every fetch operation in [`crate::api`] is a thin specialization of
//! [`ZabbixClient::call`]: build a request body, POST it with the static
//! service credential, and decode the `{result, error?}` envelope
//! uniformly.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ZabbixError;

/// Connection settings for a [`ZabbixClient`].
///
/// The service credential is infrastructure configuration, distinct
/// from the per-operator session token; it is loaded once at startup
/// and sent as HTTP basic auth on every call.
#[derive(Debug, Clone)]
pub struct ZabbixConfig {
    /// Full URL of the JSON-RPC endpoint, e.g.
    /// `http://zabbix.internal/zabbix/api_jsonrpc.php`.
    pub api_url: String,
    /// Basic-auth user for the transport layer.
    pub service_user: String,
    /// Basic-auth password for the transport layer.
    pub service_password: String,
    /// Deadline for each outbound call.
    pub timeout: Duration,
}

/// HTTP client for the upstream monitoring service.
pub struct ZabbixClient {
    http: reqwest::Client,
    config: ZabbixConfig,
}

impl ZabbixClient {
    /// Build a client with a dedicated connection pool and the
    /// configured per-request timeout.
    pub fn new(config: ZabbixConfig) -> Result<Self, ZabbixError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// JSON-RPC endpoint URL this client targets.
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Issue a single JSON-RPC call and return the decoded `result`
    /// payload.
    ///
    /// `auth` carries the operator session token; it is `None` only for
    /// the login method. The request body is not logged -- it can
    /// contain credentials.
    pub(crate) async fn call(
        &self,
        method: &str,
        params: Value,
        auth: Option<&str>,
    ) -> Result<Value, ZabbixError> {
        let mut body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1,
        });
        if let Some(token) = auth {
            body["auth"] = Value::String(token.to_string());
        }

        tracing::debug!(method, url = %self.config.api_url, "calling upstream");

        let response = self
            .http
            .post(&self.config.api_url)
            .basic_auth(&self.config.service_user, Some(&self.config.service_password))
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        decode_response(status, &bytes)
    }
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    message: String,
    #[serde(default)]
    code: i64,
}

/// Decode an upstream response into its `result` payload.
///
/// Kept separate from the transport so the envelope discipline is
/// testable without a socket:
///
/// - non-200 status -> [`ZabbixError::Status`], body untouched;
/// - undecodable body -> [`ZabbixError::Malformed`];
/// - `error` present -> [`ZabbixError::Rejected`] with the upstream
///   message verbatim, regardless of what `result` contains;
/// - missing `result` -> [`ZabbixError::Malformed`].
pub(crate) fn decode_response(status: u16, body: &[u8]) -> Result<Value, ZabbixError> {
    if status != 200 {
        return Err(ZabbixError::Status { status });
    }

    let envelope: RpcEnvelope = serde_json::from_slice(body)
        .map_err(|e| ZabbixError::Malformed(e.to_string()))?;

    if let Some(error) = envelope.error {
        tracing::warn!(code = error.code, message = %error.message, "upstream rejected request");
        return Err(ZabbixError::Rejected(error.message));
    }

    envelope
        .result
        .ok_or_else(|| ZabbixError::Malformed("response has neither result nor error".into()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn non_200_status_short_circuits_before_decoding() {
        // The body is valid JSON with a result, but a 500 must never be
        // decoded as success.
        let body = br#"{"jsonrpc":"2.0","result":[],"id":1}"#;
        assert_matches!(
            decode_response(500, body),
            Err(ZabbixError::Status { status: 500 })
        );
    }

    #[test]
    fn error_envelope_wins_over_result() {
        let body = br#"{
            "jsonrpc": "2.0",
            "result": ["should", "be", "ignored"],
            "error": {"message": "Session terminated, re-login, please.", "code": -32602},
            "id": 1
        }"#;
        assert_matches!(
            decode_response(200, body),
            Err(ZabbixError::Rejected(msg)) if msg == "Session terminated, re-login, please."
        );
    }

    #[test]
    fn undecodable_body_is_malformed() {
        assert_matches!(
            decode_response(200, b"<html>gateway timeout</html>"),
            Err(ZabbixError::Malformed(_))
        );
    }

    #[test]
    fn missing_result_and_error_is_malformed() {
        assert_matches!(
            decode_response(200, br#"{"jsonrpc":"2.0","id":1}"#),
            Err(ZabbixError::Malformed(_))
        );
    }

    #[test]
    fn result_payload_is_returned_as_is() {
        let body = br#"{"jsonrpc":"2.0","result":"0424bd59b807674191e7d77572075f33","id":1}"#;
        let result = decode_response(200, body).unwrap();
        assert_eq!(result, "0424bd59b807674191e7d77572075f33");
    }
}
