//! Wire envelopes for the three endpoints
//!
//! Every endpoint can answer with `{"error": ...}` instead of its normal body,
//! usually together with a 4xx/5xx status.

use crate::domain::{LeaderboardEntry, ProfileSnapshot};

/// Outcome of a profile lookup that produced a decodable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileResponse {
    Profile(ProfileSnapshot),
    /// The server rejected the identifier; the session must end
    Invalid(String),
}

/// Decoded list body: rows or a server-side error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowsResponse {
    Rows(Vec<LeaderboardEntry>),
    Error(String),
}

/// Pull the message out of an `{"error": ...}` object, if the body is one
fn error_payload(value: &serde_json::Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    Some(match error {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

pub fn decode_profile(body: &str) -> Result<ProfileResponse, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if let Some(message) = error_payload(&value) {
        return Ok(ProfileResponse::Invalid(message));
    }
    Ok(ProfileResponse::Profile(serde_json::from_value(value)?))
}

pub fn decode_rows(body: &str) -> Result<RowsResponse, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if let Some(message) = error_payload(&value) {
        return Ok(RowsResponse::Error(message));
    }
    Ok(RowsResponse::Rows(serde_json::from_value(value)?))
}
