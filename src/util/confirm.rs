//! Native confirmation dialog wrapper.

/// Ask the user to confirm a destructive action.
///
/// Defaults to `false` when no browser dialog is available, so destructive
/// paths stay inert off-browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
