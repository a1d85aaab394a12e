//! Card component with header and content sections.

use crate::ui::escape;

/// Card container.
#[must_use]
pub fn card(class: &str, inner: &str) -> String {
    format!(
        r#"<div class="rounded-xl border border-panelBorder bg-panel text-textPrimary shadow-sm {class}">{inner}</div>"#
    )
}

/// Card header with a title and an optional description.
#[must_use]
pub fn card_header(title: &str, description: Option<&str>) -> String {
    let description = description
        .map(|d| format!(r#"<p class="text-sm text-textMuted">{}</p>"#, escape(d)))
        .unwrap_or_default();
    format!(
        r#"<div class="flex flex-col space-y-1.5 p-6"><h3 class="text-lg font-semibold leading-none tracking-tight">{}</h3>{description}</div>"#,
        escape(title)
    )
}

/// Card content section.
#[must_use]
pub fn card_content(class: &str, inner: &str) -> String {
    format!(r#"<div class="p-6 pt-0 {class}">{inner}</div>"#)
}
