//! Native confirmation dialogs for destructive actions.

/// Ask the user to confirm `message`. Returns false outside the browser,
/// so destructive paths stay inert under test.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
