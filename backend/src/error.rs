use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::fmt;

use shared::constants::{INVALID_JSON_PAYLOAD, UPSTREAM_UNAVAILABLE};

/// Which key carries the human-readable text in an error body. The auth
/// relays answer with `message`, the donation relays with `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKey {
    Message,
    Error,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Error => "error",
        }
    }
}

#[derive(Debug)]
pub enum RelayError {
    /// Request body was not JSON at all.
    InvalidPayload(ErrorKey),
    /// A required field was missing, empty or not usable.
    Validation(ErrorKey, &'static str),
    /// Upstream said no; its status is relayed with a short message.
    Upstream {
        key: ErrorKey,
        status: StatusCode,
        message: String,
    },
    /// Upstream said no; its body goes back untouched.
    UpstreamRaw {
        status: StatusCode,
        content_type: String,
        body: String,
    },
    /// Upstream said yes but the answer was unusable.
    UpstreamMalformed(ErrorKey, &'static str),
    /// Upstream could not be reached.
    Network(ErrorKey, reqwest::Error),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayload(_) => write!(f, "{}", INVALID_JSON_PAYLOAD),
            Self::Validation(_, message) => write!(f, "{}", message),
            Self::Upstream { status, message, .. } => write!(f, "Upstream {}: {}", status, message),
            Self::UpstreamRaw { status, .. } => write!(f, "Upstream {} (raw body relayed)", status),
            Self::UpstreamMalformed(_, message) => write!(f, "Malformed upstream reply: {}", message),
            Self::Network(_, e) => write!(f, "Network error: {}", e),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(_, e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        let (key, status, message) = match self {
            Self::InvalidPayload(key) => (key, StatusCode::BAD_REQUEST, INVALID_JSON_PAYLOAD.to_string()),
            Self::Validation(key, message) => (key, StatusCode::BAD_REQUEST, message.to_string()),
            Self::Upstream { key, status, message } => (key, status, message),
            Self::UpstreamMalformed(key, message) => (key, StatusCode::BAD_GATEWAY, message.to_string()),
            Self::Network(key, e) => {
                tracing::error!("Upstream request failed: {}", e);
                (key, StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE.to_string())
            }
            Self::UpstreamRaw { status, content_type, body } => {
                return Response::builder()
                    .status(status)
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response());
            }
        };

        (status, Json(json!({ key.as_str(): message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(error: RelayError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_error_key_follows_relay_family() {
        let (status, body) = body_of(RelayError::InvalidPayload(ErrorKey::Message)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"Invalid JSON payload."}"#);

        let (_, body) = body_of(RelayError::InvalidPayload(ErrorKey::Error)).await;
        assert_eq!(body, r#"{"error":"Invalid JSON payload."}"#);
    }

    #[tokio::test]
    async fn test_upstream_status_is_relayed() {
        let (status, body) = body_of(RelayError::Upstream {
            key: ErrorKey::Message,
            status: StatusCode::CONFLICT,
            message: "Email taken".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, r#"{"message":"Email taken"}"#);
    }

    #[tokio::test]
    async fn test_raw_body_passthrough() {
        let response = RelayError::UpstreamRaw {
            status: StatusCode::SERVICE_UNAVAILABLE,
            content_type: "text/plain".to_string(),
            body: "down for maintenance".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
    }
}
