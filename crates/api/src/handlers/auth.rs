//! Handler for the `/login` endpoint.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect};
use axum::Json;
use serde::Deserialize;

use fleetmon_zabbix::ZabbixError;

use crate::error::{AppError, AppResult};
use crate::middleware::session::SESSION_COOKIE;
use crate::state::AppState;

/// Page the browser is sent to after a successful login.
const LANDING_PAGE: &str = "/main.html";

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /login
///
/// Exchange operator credentials for an upstream session token, hand
/// it back as a site-wide cookie, and redirect to the landing page.
///
/// - empty username or password -> 400
/// - upstream rejected the credentials -> 401 with the upstream message
/// - transport/status/decode failure -> 500
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let token = state
        .zabbix
        .login(&input.username, &input.password)
        .await
        .map_err(|e| match e {
            // A structured upstream error on login means the
            // credentials were refused.
            ZabbixError::Rejected(msg) => AppError::Unauthorized(msg),
            other => AppError::from(other),
        })?;

    tracing::info!(username = %input.username, "operator logged in");

    // Path=/ scopes the cookie to the whole site. No HttpOnly: the
    // frontend reads the cookie to decide whether the operator is
    // logged in.
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Redirect::to(LANDING_PAGE),
    ))
}
