use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use fleetmon_zabbix::ZabbixError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ZabbixError`] for upstream failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the upstream RPC layer.
    #[error(transparent)]
    Upstream(#[from] ZabbixError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or rejected session credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Upstream(upstream) => match upstream {
                // Input validation, recoverable by the caller.
                ZabbixError::EmptyCredentials => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", upstream.to_string())
                }
                // Everything upstream-shaped is a server-side failure;
                // the upstream message is embedded for the frontend.
                other => {
                    tracing::error!(error = %other, "upstream call failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_ERROR",
                        other.to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
