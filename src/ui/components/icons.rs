//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they inherit `currentColor`.

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

fn svg(class: &str, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{ICON_SIZE} {class}" aria-hidden="true">{body}</svg>"#
    )
}

/// Loader/spinner icon.
#[must_use]
pub fn loader(class: &str) -> String {
    svg(
        &format!("animate-spin {class}"),
        r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
    )
}

/// Menu (hamburger) icon.
#[must_use]
pub fn menu(class: &str) -> String {
    svg(
        class,
        r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
    )
}

/// X/close icon.
#[must_use]
pub fn close(class: &str) -> String {
    svg(class, r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#)
}

/// Wrench icon.
#[must_use]
pub fn wrench(class: &str) -> String {
    svg(
        class,
        r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>"#,
    )
}

/// User icon.
#[must_use]
pub fn user(class: &str) -> String {
    svg(
        class,
        r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
    )
}

#[must_use]
pub fn mail(class: &str) -> String {
    svg(
        class,
        r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
    )
}

#[must_use]
pub fn phone(class: &str) -> String {
    svg(
        class,
        r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
    )
}

/// Speaker icon.
#[must_use]
pub fn volume(class: &str) -> String {
    svg(
        class,
        r#"<polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"/><path d="M15.54 8.46a5 5 0 0 1 0 7.07"/><path d="M19.07 4.93a10 10 0 0 1 0 14.14"/>"#,
    )
}

#[must_use]
pub fn external_link(class: &str) -> String {
    svg(
        class,
        r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
    )
}
