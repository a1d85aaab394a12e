//! Badge component for status indicators and tags.

use crate::ui::escape;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral badge.
    #[default]
    Secondary,
    /// Colour supplied entirely by the caller's class.
    Custom,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Secondary => "bg-panel text-textPrimary border border-panelBorder",
            Self::Custom => "text-white",
        }
    }
}

/// Badge displaying a short label.
#[must_use]
pub fn badge(text: &str, variant: BadgeVariant, class: &str) -> String {
    let base_classes = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold \
                        transition-colors";

    format!(
        r#"<span class="{base_classes} {} {class}">{}</span>"#,
        variant.classes(),
        escape(text)
    )
}
