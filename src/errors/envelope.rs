//! Error envelope detection.
//!
//! Twitter can answer with HTTP 200 and an `errors` list instead of the
//! expected payload, so every body is classified before the success shape is
//! decoded.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{TwitterError, TwitterResult};

/// A single entry of the API error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    /// Numeric error code. v2 endpoints omit it, in which case it is zero.
    #[serde(default)]
    pub code: i64,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
}

/// The `{"errors": [...]}` body shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error entries, absent on success.
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorEntry>>,
}

impl ApiErrorEnvelope {
    /// Returns the entries when the envelope signals a failure.
    pub fn into_failure(self) -> Option<Vec<ApiErrorEntry>> {
        self.errors.filter(|entries| !entries.is_empty())
    }
}

/// Outcome of classifying a response body.
#[derive(Debug)]
pub enum ParsedBody<T> {
    /// The body carried a non-empty error list.
    ApiError(Vec<ApiErrorEntry>),
    /// The body decoded into the expected shape.
    Success(T),
    /// No error list, and the body did not match the expected shape.
    Malformed(serde_json::Error),
}

impl<T> ParsedBody<T> {
    /// Converts the classification into a result.
    pub fn into_result(self, status: u16) -> TwitterResult<T> {
        match self {
            ParsedBody::Success(value) => Ok(value),
            ParsedBody::ApiError(entries) => {
                tracing::debug!(status, count = entries.len(), "API error envelope");
                Err(TwitterError::from_entries(&entries))
            }
            ParsedBody::Malformed(err) => Err(TwitterError::Decode {
                message: err.to_string(),
                status,
            }),
        }
    }
}

/// Classifies a response body.
///
/// The error list is checked first; only bodies without one are decoded as
/// `T`. The HTTP status plays no part in the decision.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> ParsedBody<T> {
    if let Some(entries) = serde_json::from_slice::<ApiErrorEnvelope>(body)
        .ok()
        .and_then(ApiErrorEnvelope::into_failure)
    {
        return ParsedBody::ApiError(entries);
    }

    match serde_json::from_slice(body) {
        Ok(value) => ParsedBody::Success(value),
        Err(err) => ParsedBody::Malformed(err),
    }
}

/// Joins error codes with `", "`.
pub fn join_codes(codes: &[i64]) -> String {
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
