//! Blocking user-facing notices.

/// Show `message` in a blocking browser alert.
///
/// Under SSR there is no user to alert, so the message is logged instead.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            log::warn!("alert suppressed: {message}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("alert: {message}");
    }
}
