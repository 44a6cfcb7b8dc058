use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::{json, Value};
use web_sys::RequestCredentials;

use shared::auth_flow::{Submission, SubmitOutcome};
use shared::checkout::checkout_url_from_reply;
use shared::constants::{CHECK_AUTH_ENDPOINT, LEADERBOARD_DEFAULT_LIMIT, LEADERBOARD_ENDPOINT, LOGOUT_ENDPOINT};
use shared::donations::{DonationRequest, LeaderboardEntry};
use shared::leaderboard::entries_from_reply;
use shared::session::CheckOutcome;

use crate::config::api_url;

/// Status plus the body, if it was JSON.
#[derive(Debug, Clone)]
pub struct RelayReply {
    pub status: u16,
    pub body: Option<Value>,
}

impl RelayReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub enum ClientError {
    Network(String),
    Encode(String),
    Status(u16),
    Malformed(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Encode(e) => write!(f, "Could not encode request: {}", e),
            Self::Status(status) => write!(f, "Relay answered {}", status),
            Self::Malformed(e) => write!(f, "Unreadable relay reply: {}", e),
        }
    }
}

async fn read(response: Response) -> RelayReply {
    let status = response.status();
    let body = match response.text().await {
        Ok(text) => serde_json::from_str(&text).ok(),
        Err(e) => {
            log::warn!("Could not read relay body: {:?}", e);
            None
        }
    };
    RelayReply { status, body }
}

pub async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<RelayReply, ClientError> {
    let request = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ClientError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    Ok(read(response).await)
}

pub async fn get(path: &str) -> Result<RelayReply, ClientError> {
    let response = Request::get(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    Ok(read(response).await)
}

pub async fn check_session() -> CheckOutcome {
    match get(CHECK_AUTH_ENDPOINT).await {
        Ok(reply) => CheckOutcome::Responded { status: reply.status },
        Err(e) => {
            log::debug!("Session check failed: {}", e);
            CheckOutcome::NetworkFailure
        }
    }
}

pub async fn submit_auth(submission: &Submission) -> SubmitOutcome {
    match post_json(submission.endpoint(), &submission.body()).await {
        Ok(reply) if reply.ok() => SubmitOutcome::Accepted(reply.body.unwrap_or_else(|| json!({}))),
        Ok(reply) => SubmitOutcome::Rejected(reply.body),
        Err(e) => {
            log::error!("{:?} request failed: {}", submission.kind(), e);
            SubmitOutcome::NetworkFailure
        }
    }
}

pub async fn logout() -> Result<(), ClientError> {
    let reply = post_json(LOGOUT_ENDPOINT, &json!({})).await?;
    if !reply.ok() {
        log::warn!("Logout answered {}", reply.status);
    }
    Ok(())
}

/// `None` on any failure; the form shows one generic retry message.
pub async fn request_checkout(endpoint: &str, request: &DonationRequest) -> Option<String> {
    match post_json(endpoint, request).await {
        Ok(reply) => checkout_url_from_reply(reply.ok(), reply.body.as_ref()),
        Err(e) => {
            log::error!("Checkout request failed: {}", e);
            None
        }
    }
}

pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, ClientError> {
    let path = format!("{}?limit={}", LEADERBOARD_ENDPOINT, LEADERBOARD_DEFAULT_LIMIT);
    let reply = get(&path).await?;
    if !reply.ok() {
        return Err(ClientError::Status(reply.status));
    }
    entries_from_reply(reply.body).map_err(|e| ClientError::Malformed(e.to_string()))
}
