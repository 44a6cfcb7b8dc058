use std::collections::HashMap;

use axum::body::{Body, Bytes};
use axum::extract::{Query, State};
use axum::http::{header, Response, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use shared::constants::{
    AMOUNT_NOT_POSITIVE, CHECKOUT_BAD_RESPONSE, CHECKOUT_FAILED, CHECKOUT_LINK_MISSING,
    DEFAULT_CURRENCY, EMAIL_REQUIRED, LEADERBOARD_FAILED,
};
use shared::donations::CheckoutResponse;
use shared::validation::clamp_leaderboard_limit;

use crate::error::{ErrorKey, RelayError};
use crate::models::{decode_payload, CheckoutPayload};
use crate::upstream::UpstreamReply;
use crate::AppState;

const UPSTREAM_CHECKOUT_PATH: &str = "/api/donations/checkout";
const UPSTREAM_LEADERBOARD_PATH: &str = "/api/donations/leaderboard";

/// Non-2xx donation answers go back byte for byte, with a plain fallback
/// when the upstream body was empty.
fn passthrough(reply: UpstreamReply, fallback: &str) -> RelayError {
    let content_type = reply.content_type_or_json();
    let body = if reply.body.is_empty() {
        fallback.to_string()
    } else {
        reply.body
    };
    RelayError::UpstreamRaw {
        status: reply.status,
        content_type,
        body,
    }
}

pub async fn checkout(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CheckoutResponse>, RelayError> {
    let payload: CheckoutPayload = decode_payload(&body, ErrorKey::Error)?;
    let amount = payload
        .amount()
        .ok_or(RelayError::Validation(ErrorKey::Error, AMOUNT_NOT_POSITIVE))?;
    let currency = payload.currency().unwrap_or(DEFAULT_CURRENCY);
    let email = payload
        .email()
        .ok_or(RelayError::Validation(ErrorKey::Error, EMAIL_REQUIRED))?;

    let forward = json!({ "amount": amount, "currency": currency, "email": email });
    let reply = state
        .upstream
        .post_json(&state.config.donations_url(UPSTREAM_CHECKOUT_PATH), &forward, None)
        .await
        .map_err(|e| RelayError::Network(ErrorKey::Error, e))?;

    if !reply.is_success() {
        warn!(relay = "checkout", status = reply.status.as_u16(), "Donations service refused checkout");
        return Err(passthrough(reply, CHECKOUT_FAILED));
    }

    let data = reply.json().map_err(|e| {
        warn!(relay = "checkout", "Unparsable checkout reply: {}", e);
        RelayError::UpstreamMalformed(ErrorKey::Error, CHECKOUT_BAD_RESPONSE)
    })?;

    let checkout_url = data
        .get("checkoutUrl")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .ok_or(RelayError::UpstreamMalformed(ErrorKey::Error, CHECKOUT_LINK_MISSING))?;

    info!(relay = "checkout", currency = currency, "Checkout session created");
    Ok(Json(CheckoutResponse {
        checkout_url: checkout_url.to_string(),
    }))
}

pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response<Body>, RelayError> {
    let limit = clamp_leaderboard_limit(params.get("limit").map(String::as_str));
    let url = format!(
        "{}?limit={}",
        state.config.donations_url(UPSTREAM_LEADERBOARD_PATH),
        limit
    );

    let reply = state
        .upstream
        .get(&url, None)
        .await
        .map_err(|e| RelayError::Network(ErrorKey::Error, e))?;

    if !reply.is_success() {
        warn!(relay = "leaderboard", status = reply.status.as_u16(), "Donations service refused leaderboard");
        return Err(passthrough(reply, LEADERBOARD_FAILED));
    }

    let content_type = reply.content_type_or_json();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(reply.body))
        .map_err(|e| {
            warn!(relay = "leaderboard", "Could not build passthrough response: {}", e);
            RelayError::UpstreamMalformed(ErrorKey::Error, LEADERBOARD_FAILED)
        })
}
