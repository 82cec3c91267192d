//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser-only calls from page logic so pages
//! compile and render the same way under SSR.

pub mod dialog;
