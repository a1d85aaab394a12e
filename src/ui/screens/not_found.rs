use super::heading;
use crate::ui::components::{ButtonSize, ButtonVariant, link_button};

#[must_use]
pub fn render() -> String {
    format!(
        r#"<section id="screen" data-tool="not-found" class="space-y-6">{}<div class="flex justify-center">{}</div></section>"#,
        heading("Página no encontrada", "La herramienta solicitada no existe"),
        link_button(
            "/tools/home",
            "Volver al inicio",
            ButtonVariant::Primary,
            ButtonSize::Lg,
            false,
        )
    )
}
