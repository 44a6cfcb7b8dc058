use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, info};

use shared::auth::SessionCheckResponse;
use shared::constants::{LOGIN_FAILED, LOGIN_FIELDS_REQUIRED, LOGOUT_FAILED};

use crate::error::{ErrorKey, RelayError};
use crate::models::{decode_payload, LoginPayload};
use crate::routes::relay_auth;
use crate::upstream::forward_cookies;
use crate::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, RelayError> {
    let payload: LoginPayload = decode_payload(&body, ErrorKey::Message)?;
    let request = payload
        .into_request()
        .ok_or(RelayError::Validation(ErrorKey::Message, LOGIN_FIELDS_REQUIRED))?;

    let reply = relay_auth(&state, "/login", &request, None, LOGIN_FAILED).await?;

    info!(relay = "authenticate", "Sign-in relayed");
    let mut response = Json(reply.json_or_empty()).into_response();
    forward_cookies(&mut response, &reply.set_cookies);
    Ok(response)
}

/// 200 `{ authenticated: true }` on an upstream 2xx. Any other upstream
/// status comes back as-is with `{ authenticated: false }`.
pub async fn check_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, RelayError> {
    let reply = state
        .upstream
        .get(&state.config.auth_url("/me"), headers.get(header::COOKIE))
        .await
        .map_err(|e| RelayError::Network(ErrorKey::Message, e))?;

    let authenticated = reply.is_success();
    let status = if authenticated { StatusCode::OK } else { reply.status };
    debug!(status = reply.status.as_u16(), "Session check answered");

    Ok((status, Json(SessionCheckResponse { authenticated })).into_response())
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, RelayError> {
    let reply = relay_auth(
        &state,
        "/logout",
        &json!({}),
        headers.get(header::COOKIE),
        LOGOUT_FAILED,
    )
    .await?;

    info!(relay = "logout", "Sign-out relayed");
    let mut response = Json(reply.json_or_empty()).into_response();
    forward_cookies(&mut response, &reply.set_cookies);
    Ok(response)
}
