//! Blocking Dialog Helpers
//!
//! window.alert / window.confirm wrappers; the app's only modal error and
//! confirmation surface.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Returns false when the user declines or no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
