//! Blocking HTTP client for the leaderboard API

use std::time::Duration;

use tracing::debug;

use super::error::ApiError;
use super::types::{ProfileResponse, RowsResponse, decode_profile, decode_rows};
use super::AuraApi;
use crate::domain::{HistoricalQuery, LeaderboardEntry};

fn encode_url_path_segment(segment: &str) -> String {
    // RFC3986 unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    let mut out = String::with_capacity(segment.len());
    for &b in segment.as_bytes() {
        let is_unreserved =
            matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~');
        if is_unreserved {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

/// Default API server URL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client for `/api/perfil`, `/api/leaderboard` and `/api/historico`
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ApiClient {
    /// Create a client with the default URL and timeouts
    pub fn new() -> Self {
        Self::with_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom URL and default timeouts
    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, Duration::from_secs(5), Duration::from_secs(30))
    }

    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(connect_timeout)
            .timeout_read(read_timeout)
            .build();

        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET and return `(status, body)`.
    ///
    /// Non-2xx statuses are not errors here: the API puts `{error}` bodies on
    /// them and the callers decide what that means.
    fn get(&self, request: ureq::Request, url: &str) -> Result<(u16, String), ApiError> {
        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(e)) => {
                return Err(ApiError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let status = response.status();
        let body = response.into_string().map_err(|e| ApiError::Transport {
            url: url.to_string(),
            message: format!("Failed to read response body: {}", e),
        })?;
        debug!("GET {} -> {}", url, status);
        Ok((status, body))
    }

    fn rows(&self, request: ureq::Request, url: &str) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let (status, body) = self.get(request, url)?;
        match decode_rows(&body) {
            Ok(RowsResponse::Error(message)) => Err(ApiError::Server(message)),
            _ if !is_success(status) => Err(status_error(url, status, &body)),
            Ok(RowsResponse::Rows(rows)) => Ok(rows),
            Err(e) => Err(ApiError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn status_error(url: &str, code: u16, body: &str) -> ApiError {
    ApiError::Status {
        url: url.to_string(),
        code,
        body: body.trim().chars().take(200).collect(),
    }
}

impl AuraApi for ApiClient {
    fn profile(&self, user_id: &str) -> Result<ProfileResponse, ApiError> {
        let url = format!(
            "{}/api/perfil/{}",
            self.base_url,
            encode_url_path_segment(user_id)
        );
        let (status, body) = self.get(self.agent.get(&url), &url)?;
        match decode_profile(&body) {
            Ok(ProfileResponse::Invalid(message)) => Ok(ProfileResponse::Invalid(message)),
            _ if !is_success(status) => Err(status_error(&url, status, &body)),
            Ok(response) => Ok(response),
            Err(e) => Err(ApiError::Decode {
                url,
                message: e.to_string(),
            }),
        }
    }

    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let url = format!("{}/api/leaderboard", self.base_url);
        self.rows(self.agent.get(&url), &url)
    }

    fn history(&self, query: HistoricalQuery) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let url = format!("{}/api/historico", self.base_url);
        let request = self
            .agent
            .get(&url)
            .query("ano", &query.year().to_string())
            .query("mes", &query.month().number().to_string());
        self.rows(request, &url)
    }
}
