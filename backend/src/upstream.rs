use axum::http::{header, HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};

/// Thin wrapper over one shared `reqwest::Client`.
#[derive(Clone, Default)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

/// Everything the relays need from an upstream answer.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub set_cookies: Vec<HeaderValue>,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json(&self) -> Result<Value, serde_json::Error> {
        parse_body(&self.body)
    }

    /// Parsed body, or `{}` when the upstream sent something unreadable.
    pub fn json_or_empty(&self) -> Value {
        self.json().unwrap_or_else(|e| {
            tracing::warn!("Unreadable upstream body ({}), treating as empty", e);
            json!({})
        })
    }

    pub fn content_type_or_json(&self) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| "application/json".to_string())
    }
}

/// An empty body counts as `{}`.
pub fn parse_body(raw: &str) -> Result<Value, serde_json::Error> {
    if raw.is_empty() {
        return Ok(json!({}));
    }
    serde_json::from_str(raw)
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
        cookie: Option<&HeaderValue>,
    ) -> Result<UpstreamReply, reqwest::Error> {
        let mut request = self.client.post(url).json(body);
        if let Some(cookie) = cookie {
            request = request.header("cookie", cookie.as_bytes());
        }
        Self::read(request.send().await?).await
    }

    pub async fn get(
        &self,
        url: &str,
        cookie: Option<&HeaderValue>,
    ) -> Result<UpstreamReply, reqwest::Error> {
        let mut request = self
            .client
            .get(url)
            .header("content-type", "application/json");
        if let Some(cookie) = cookie {
            request = request.header("cookie", cookie.as_bytes());
        }
        Self::read(request.send().await?).await
    }

    // reqwest 0.11 carries its own `http` version, so headers and status
    // are copied across as raw bytes.
    async fn read(response: reqwest::Response) -> Result<UpstreamReply, reqwest::Error> {
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let set_cookies = response
            .headers()
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
            .collect();
        let body = response.text().await?;

        Ok(UpstreamReply {
            status,
            content_type,
            set_cookies,
            body,
        })
    }
}

/// Copies upstream `Set-Cookie` headers onto an outgoing response.
pub fn forward_cookies(response: &mut axum::response::Response, cookies: &[HeaderValue]) {
    for cookie in cookies {
        response.headers_mut().append(header::SET_COOKIE, cookie.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_parses_as_object() {
        assert_eq!(parse_body("").unwrap(), json!({}));
        assert!(parse_body("  \n").is_err());
        assert_eq!(parse_body(r#"{"id":1}"#).unwrap(), json!({ "id": 1 }));
        assert!(parse_body("<html>").is_err());
    }

    #[test]
    fn test_unreadable_body_falls_back() {
        let reply = UpstreamReply {
            status: StatusCode::OK,
            content_type: None,
            set_cookies: Vec::new(),
            body: "not json".to_string(),
        };
        assert_eq!(reply.json_or_empty(), json!({}));
        assert_eq!(reply.content_type_or_json(), "application/json");
    }
}
