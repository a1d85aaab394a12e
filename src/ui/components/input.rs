//! Input component for text fields.

use crate::ui::escape;

/// Single-line text input carrying the current value.
#[must_use]
pub fn text_input(name: &str, value: &str, placeholder: &str) -> String {
    let classes = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                   px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                   focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                   focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

    format!(
        r#"<input type="text" name="{}" value="{}" placeholder="{}" autocomplete="off" class="{classes}">"#,
        escape(name),
        escape(value),
        escape(placeholder)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_escaped() {
        let html = text_input("query", r#""><script>"#, "Ejemplo");
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }
}
