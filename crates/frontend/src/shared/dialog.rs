//! Blocking browser dialogs.
//!
//! The whole UI deliberately uses the native alert/confirm prompts; a
//! missing window (tests, detached worker) degrades to no-op / declined.

use web_sys::window;

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Returns false when the user declines or no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
