//! Failure classification for REST calls.
//!
//! Pages only ever log these; nothing is propagated past the page that
//! issued the request.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Why a REST call did not produce the expected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response (offline, DNS, CORS, refused).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with {status}{}", detail_suffix(.message.as_deref()))]
    Status { status: u16, message: Option<String> },
    /// A success response carried a body we could not decode.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The request body could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// The call was made outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the server was reached and rejected the request.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Build a `Status` error from a response status and its raw body.
    ///
    /// The body is parsed as the backend's `{status, error, message}` shape;
    /// anything else is ignored.
    #[must_use]
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::types::ApiErrorBody>(body)
            .ok()
            .and_then(super::types::ApiErrorBody::into_message);
        Self::Status { status, message }
    }
}

fn detail_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}
