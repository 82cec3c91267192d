//! Wire DTOs for responses the user API sends back.
//!
//! Request bodies live next to the page state that builds them
//! (`state::login::Credentials`, `state::board::BoardItem`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/users/login`.
///
/// The refresh token travels in an `HttpOnly` cookie, so only the access
/// token is visible here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
}

/// Error body produced by the backend's global exception handler.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The most specific human-readable text in the body, if any.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.is_empty()).or(self.error.filter(|e| !e.is_empty()))
    }
}
