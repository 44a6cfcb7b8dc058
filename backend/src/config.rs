use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use shared::constants::{DEFAULT_AUTH_BASE_URL, DEFAULT_DONATIONS_BASE_URL};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:8080,http://127.0.0.1:3000";

/// Process-wide relay settings, read once at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub auth_base_url: String,
    pub donations_base_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    pub expose_reset_token: bool,
    pub allowed_origins: Vec<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, AddrParseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AddrParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, fallback: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let bind_addr = read("RELAY_BIND_ADDR", DEFAULT_BIND_ADDR).parse()?;

        Ok(Self {
            auth_base_url: base_url(read("AUTH_BACKEND_BASE_URL", DEFAULT_AUTH_BASE_URL)),
            donations_base_url: base_url(read("DONATIONS_BACKEND_URL", DEFAULT_DONATIONS_BASE_URL)),
            bind_addr,
            frontend_dist: PathBuf::from(read("FRONTEND_DIST_DIR", DEFAULT_FRONTEND_DIST)),
            expose_reset_token: read("AUTH_EXPOSE_RESET_TOKEN", "false").eq_ignore_ascii_case("true"),
            allowed_origins: read("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}{}", self.auth_base_url, path)
    }

    pub fn donations_url(&self, path: &str) -> String {
        format!("{}{}", self.donations_base_url, path)
    }
}

fn base_url(raw: String) -> String {
    raw.trim_end_matches('/').to_string()
}
