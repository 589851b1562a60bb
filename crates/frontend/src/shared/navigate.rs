//! Full-page navigation helpers.
//!
//! Several flows intentionally leave the SPA (checkout handoff, post-save
//! reload) so the server-rendered state is re-fetched from scratch.

use web_sys::window;

pub fn goto(href: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_href(href);
    }
}

pub fn reload() {
    if let Some(w) = window() {
        let _ = w.location().reload();
    }
}
