//! Server-rendered HTML.
//!
//! Everything here is a pure function from state to markup; handlers decide
//! whether to send a whole [`page`] or only the `#screen` [`fragment`] that
//! HTMX swaps in place.
//!
//! # Structure
//!
//! - [`components`]: Reusable ShadCN-style primitives
//! - [`shell`]: Page chrome with sidebar, mobile header and drawer
//! - [`screens`]: One renderer per tool screen

pub mod components;
pub mod screens;
pub mod shell;

use crate::config::AppConfig;
use crate::router::ViewRouter;
use crate::tools::ScreenState;

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Full document for the session's current view.
#[must_use]
pub fn page(router: &ViewRouter, screen: &ScreenState, config: &AppConfig) -> String {
    shell::render(router, config, &screens::render(screen, config))
}

/// The `#screen` section alone.
#[must_use]
pub fn fragment(screen: &ScreenState, config: &AppConfig) -> String {
    screens::render(screen, config)
}

/// Full document for an unknown path.
#[must_use]
pub fn not_found_page(router: &ViewRouter, config: &AppConfig) -> String {
    shell::render(router, config, &screens::not_found::render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("Género"), "Género");
    }
}
