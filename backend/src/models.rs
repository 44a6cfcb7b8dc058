//! Inbound relay payloads.
//!
//! Every field is optional so a well-formed body with missing fields gets
//! the field-specific 400 instead of a generic deserialization error.

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use shared::auth::{ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest};
use shared::validation::present;

use crate::error::{ErrorKey, RelayError};

/// Only a syntax error is an invalid payload. A body of the wrong shape
/// decodes to the all-`None` default and fails the required-field check.
pub fn decode_payload<T>(body: &Bytes, key: ErrorKey) -> Result<T, RelayError>
where
    T: DeserializeOwned + Default,
{
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected relay body: {}", e);
        RelayError::InvalidPayload(key)
    })?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn owned(field: &Option<String>) -> Option<String> {
    present(field).map(str::to_string)
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginPayload {
    pub fn into_request(self) -> Option<LoginRequest> {
        Some(LoginRequest {
            email: owned(&self.email)?,
            password: owned(&self.password)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterPayload {
    pub fn into_request(self) -> Option<RegisterRequest> {
        Some(RegisterRequest {
            name: owned(&self.name)?,
            email: owned(&self.email)?,
            password: owned(&self.password)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ForgotPasswordPayload {
    pub email: Option<String>,
}

impl ForgotPasswordPayload {
    pub fn into_request(self) -> Option<ForgotPasswordRequest> {
        Some(ForgotPasswordRequest {
            email: owned(&self.email)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordPayload {
    pub token: Option<String>,
    pub new_password: Option<String>,
}

impl ResetPasswordPayload {
    pub fn into_request(self) -> Option<ResetPasswordRequest> {
        Some(ResetPasswordRequest {
            token: owned(&self.token)?,
            new_password: owned(&self.new_password)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckoutPayload {
    pub amount: Option<Value>,
    pub currency: Option<Value>,
    pub email: Option<Value>,
}

impl CheckoutPayload {
    /// A positive finite number, or a string holding one. Numbers are
    /// forwarded as sent; whole-valued strings become integers.
    pub fn amount(&self) -> Option<Value> {
        match self.amount.as_ref()? {
            Value::Number(n) => {
                let value = n.as_f64()?;
                (value.is_finite() && value > 0.0).then(|| Value::Number(n.clone()))
            }
            Value::String(s) => {
                let value: f64 = s.trim().parse().ok()?;
                if !value.is_finite() || value <= 0.0 {
                    return None;
                }
                if value.fract() == 0.0 && value < i64::MAX as f64 {
                    Some(json!(value as i64))
                } else {
                    Some(json!(value))
                }
            }
            _ => None,
        }
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_ref().and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.email
            .as_ref()
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
    }
}
