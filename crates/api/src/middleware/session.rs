//! Cookie-based session token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the upstream session token.
pub const SESSION_COOKIE: &str = "zabbix_auth_token";

/// Opaque upstream session token extracted from the request's cookies.
///
/// Use as an extractor parameter in any handler that talks to the
/// upstream on the operator's behalf:
///
/// ```ignore
/// async fn my_handler(session: SessionToken) -> AppResult<Json<()>> {
///     state.zabbix.get_devices(&session.0).await?;
///     // ...
/// }
/// ```
///
/// The token is never validated locally; an expired or bogus token is
/// only discovered when the upstream rejects a call.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(find_session_cookie)
            .map(SessionToken)
            .ok_or_else(|| AppError::Unauthorized("Missing session cookie".into()))
    }
}

/// Find the session cookie's value in one `Cookie` header line.
fn find_session_cookie(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}
