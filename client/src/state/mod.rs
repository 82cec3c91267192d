//! Page-local client state models.
//!
//! DESIGN
//! ======
//! Each page owns its own state; nothing here is shared through context.
//! The models are plain data with pure helpers so validation and fetch
//! bookkeeping can be tested without a browser.

pub mod board;
pub mod login;
pub mod signup;
