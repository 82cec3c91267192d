//! Networking modules for the two HTTP calls the site makes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login POST and the board-list GET, `error` classifies
//! their failures, and `types` holds the wire DTOs they exchange.

pub mod api;
pub mod error;
pub mod types;
