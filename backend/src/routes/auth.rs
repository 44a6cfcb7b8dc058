use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, info};

use shared::constants::{
    EMAIL_REQUIRED, FORGOT_FAILED, REGISTER_FAILED, REGISTER_FIELDS_REQUIRED, RESET_FAILED,
    RESET_FIELDS_REQUIRED,
};

use crate::error::{ErrorKey, RelayError};
use crate::models::{decode_payload, ForgotPasswordPayload, RegisterPayload, ResetPasswordPayload};
use crate::routes::relay_auth;
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let payload: RegisterPayload = decode_payload(&body, ErrorKey::Message)?;
    let request = payload
        .into_request()
        .ok_or(RelayError::Validation(ErrorKey::Message, REGISTER_FIELDS_REQUIRED))?;

    let reply = relay_auth(&state, "/register", &request, None, REGISTER_FAILED).await?;

    // Upstream fields win over the default flag
    let mut data = reply.json_or_empty();
    match data.as_object_mut() {
        Some(fields) => {
            fields.entry("success").or_insert(Value::Bool(true));
        }
        None => data = json!({ "success": true }),
    }

    info!(relay = "register", "Registration relayed");
    Ok(Json(data))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let payload: ForgotPasswordPayload = decode_payload(&body, ErrorKey::Message)?;
    let request = payload
        .into_request()
        .ok_or(RelayError::Validation(ErrorKey::Message, EMAIL_REQUIRED))?;

    let reply = relay_auth(&state, "/forgot-password", &request, None, FORGOT_FAILED).await?;

    let mut data = reply.json_or_empty();
    if !state.config.expose_reset_token {
        if let Some(fields) = data.as_object_mut() {
            if fields.remove("resetToken").is_some() {
                debug!("Withheld reset token from forgot-password reply");
            }
        }
    }

    Ok(Json(data))
}

pub async fn reset_password(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let payload: ResetPasswordPayload = decode_payload(&body, ErrorKey::Message)?;
    let request = payload
        .into_request()
        .ok_or(RelayError::Validation(ErrorKey::Message, RESET_FIELDS_REQUIRED))?;

    let reply = relay_auth(&state, "/reset-password", &request, None, RESET_FAILED).await?;

    info!(relay = "reset-password", "Password reset relayed");
    Ok(Json(reply.json_or_empty()))
}
