//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form or list state locally and delegates wire work to
//! `net::api`. Pages never share state with each other.

pub mod board;
pub mod home;
pub mod login;
pub mod signup;
