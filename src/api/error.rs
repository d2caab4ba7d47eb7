//! API error types

/// Error type for leaderboard API calls
///
/// Cloneable so the last failure of a panel can be kept alongside its
/// (stale) content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP {code} from {url}: {body}")]
    Status { url: String, code: u16, body: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Server error: {0}")]
    Server(String),
}

impl ApiError {
    /// Whether the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}
