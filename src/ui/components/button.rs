//! Button component with variants and sizes.

use crate::ui::escape;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Outline button.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted",
            Self::Secondary => "bg-panel text-textPrimary border border-panelBorder hover:bg-panelBorder",
            Self::Outline => "bg-transparent border border-panelBorder text-textPrimary hover:bg-panel",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-lg font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-primary disabled:pointer-events-none disabled:opacity-50";

fn classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    format!(
        "{BASE_CLASSES} {} {} {class}",
        variant.classes(),
        size.classes()
    )
}

/// `<button>` element.
///
/// `attrs` is a trusted attribute list (`type="submit" disabled`).
#[must_use]
pub fn button(
    inner_html: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    class: &str,
    attrs: &str,
) -> String {
    format!(
        r#"<button class="{}" {attrs}>{inner_html}</button>"#,
        classes(variant, size, class)
    )
}

/// Anchor styled as a button.
#[must_use]
pub fn link_button(
    href: &str,
    inner_html: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    external: bool,
) -> String {
    let target = if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a href="{}" class="{}"{target}>{inner_html}</a>"#,
        escape(href),
        classes(variant, size, "")
    )
}
