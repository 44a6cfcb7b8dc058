use axum::body::Body;
use axum::http::{HeaderValue, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tracing::warn;

use shared::auth::auth_error_message;

use crate::error::{ErrorKey, RelayError};
use crate::upstream::UpstreamReply;
use crate::AppState;

pub mod auth;
pub mod donations;
pub mod session;


pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/reset-password", post(auth::reset_password));

    let donation_routes = Router::new()
        .route("/checkout", post(donations::checkout))
        .route("/leaderboard", get(donations::leaderboard));

    Router::new()
        .route("/api/health_check", get(health_check))
        .route("/api/authenticate", post(session::authenticate))
        .route("/api/check-auth", get(session::check_auth))
        .route("/api/logout", post(session::logout))
        .nest("/api/auth", auth_routes)
        .nest("/api/donations", donation_routes)
        .with_state(state)
}

pub async fn health_check() -> impl IntoResponse {
    Response::new(Body::from("OK"))
}

/// POSTs to the auth service and turns a non-2xx answer into a relayed
/// `{ message }` error with the upstream status.
pub(crate) async fn relay_auth<T: Serialize + ?Sized>(
    state: &AppState,
    path: &str,
    body: &T,
    cookie: Option<&HeaderValue>,
    fallback: &str,
) -> Result<UpstreamReply, RelayError> {
    let reply = state
        .upstream
        .post_json(&state.config.auth_url(path), body, cookie)
        .await
        .map_err(|e| RelayError::Network(ErrorKey::Message, e))?;

    if !reply.is_success() {
        let data = reply.json().ok();
        let message = auth_error_message(data.as_ref(), fallback);
        warn!(relay = path, status = reply.status.as_u16(), "Auth service rejected request: {}", message);
        return Err(RelayError::Upstream {
            key: ErrorKey::Message,
            status: reply.status,
            message,
        });
    }

    Ok(reply)
}
