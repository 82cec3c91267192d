//! Injected API configuration.
//!
//! DESIGN
//! ======
//! Pages never embed backend URLs. `App` provides one `ApiConfig` through
//! context and every request joins its path onto the configured origin.
//! The origins are fixed at build time so the SSR binary and the WASM bundle
//! agree on them without a round trip.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

/// Origin of the user API when `MYGALLERY_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8888";

pub const LOGIN_PATH: &str = "/api/users/login";
pub const BOARDS_PATH: &str = "/api/boards";

/// Backend origins used by the pages.
///
/// An empty origin means "same origin as the page", producing a relative URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin of the user/auth endpoints.
    pub auth_base_url: String,
    /// Origin of the board endpoints.
    pub board_base_url: String,
}

impl ApiConfig {
    pub fn new(auth_base_url: impl Into<String>, board_base_url: impl Into<String>) -> Self {
        Self { auth_base_url: auth_base_url.into(), board_base_url: board_base_url.into() }
    }

    /// Read `MYGALLERY_API_BASE_URL` and `MYGALLERY_BOARD_BASE_URL` as baked
    /// in by the compiler, falling back to the local development origins.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("MYGALLERY_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("MYGALLERY_BOARD_BASE_URL").unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        join_url(&self.auth_base_url, LOGIN_PATH)
    }

    #[must_use]
    pub fn boards_url(&self) -> String {
        join_url(&self.board_base_url, BOARDS_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Join an origin and an absolute path with exactly one slash between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Make `config` available to every page below the caller.
pub fn provide_api_config(config: ApiConfig) {
    provide_context(config);
}

/// Fetch the `ApiConfig` provided by `App`.
///
/// # Panics
///
/// Panics when called outside a component tree that provided the config.
pub fn use_api_config() -> ApiConfig {
    expect_context::<ApiConfig>()
}
