use super::{heading, section};
use crate::config::AboutConfig;
use crate::router::Tool;
use crate::ui::components::{
    ButtonSize, ButtonVariant, card, card_content, card_header, icons, link_button,
};
use crate::ui::escape;

/// `tel:` target: the number without spaces, dashes or parentheses.
fn dial_target(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// Contact card; empty when neither e-mail nor phone is configured.
fn contact(about: &AboutConfig) -> String {
    let mut lines = String::new();
    let mut actions = String::new();
    if let Some(email) = &about.email {
        let href = format!("mailto:{email}");
        lines.push_str(&format!(
            r#"<div class="flex items-center justify-center gap-3">{}<a href="{}" class="text-lg hover:text-primary">{}</a></div>"#,
            icons::mail("h-5 w-5 text-primary"),
            escape(&href),
            escape(email)
        ));
        actions.push_str(&link_button(
            &href,
            "Enviar Email",
            ButtonVariant::Primary,
            ButtonSize::Md,
            false,
        ));
    }
    if let Some(phone) = &about.phone {
        let href = dial_target(phone);
        lines.push_str(&format!(
            r#"<div class="flex items-center justify-center gap-3">{}<a href="{}" class="text-lg hover:text-primary">{}</a></div>"#,
            icons::phone("h-5 w-5 text-primary"),
            escape(&href),
            escape(phone)
        ));
        actions.push_str(&link_button(
            &href,
            "Llamar",
            ButtonVariant::Secondary,
            ButtonSize::Md,
            false,
        ));
    }
    if lines.is_empty() {
        return String::new();
    }
    card(
        "w-full",
        &format!(
            "{}{}",
            card_header(
                "Información de Contacto",
                Some("Disponible para oportunidades laborales")
            ),
            card_content(
                "space-y-4",
                &format!(r#"{lines}<div class="flex gap-2 justify-center mt-6">{actions}</div>"#)
            )
        ),
    )
}

#[must_use]
pub fn render(about: &AboutConfig) -> String {
    let description = card(
        "w-full",
        &format!(
            "{}{}",
            card_header("Sobre esta aplicación", None),
            card_content(
                "",
                r#"<p class="text-center text-textMuted">Esta es una aplicación de utilidades múltiples que incluye predictores de género y edad, búsqueda de universidades, información del clima, Pokédex, noticias de WordPress y más. Desarrollada con Rust, Axum y HTMX.</p>"#
            )
        ),
    );
    let profile = card_content(
        "pt-6",
        &format!(
            r#"<div class="flex flex-col items-center space-y-6">
                <div class="text-center space-y-2"><h2 class="text-3xl font-bold text-primary">{}</h2></div>
                {}{description}
            </div>"#,
            escape(&about.author),
            contact(about)
        ),
    );
    section(
        Tool::About,
        &format!(
            "{}{}",
            heading("Acerca de", "Información del desarrollador"),
            card("max-w-2xl mx-auto", &profile)
        ),
    )
}
