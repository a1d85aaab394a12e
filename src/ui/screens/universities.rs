use super::{FormTexts, heading, notice_for, search_form, section};
use crate::router::Tool;
use crate::tools::Screen;
use crate::tools::universities::{University, found_label};
use crate::ui::components::{
    ButtonSize, ButtonVariant, card, card_content, card_header, icons, link_button,
};
use crate::ui::escape;

const FORM: FormTexts = FormTexts {
    placeholder: "Ejemplo: Dominican Republic, United States, Spain...",
    submit: "Buscar",
};

fn university_card(university: &University) -> String {
    let link = university
        .homepage()
        .map(|href| {
            card_content(
                "",
                &link_button(
                    href,
                    &format!("{} Visitar sitio web", icons::external_link("")),
                    ButtonVariant::Outline,
                    ButtonSize::Md,
                    true,
                ),
            )
        })
        .unwrap_or_default();
    card(
        "university hover:shadow-lg transition-shadow",
        &format!(
            r#"<div class="flex flex-col space-y-1.5 p-6"><h3 class="text-lg font-semibold">{}</h3><p class="text-sm text-textMuted"><span class="font-medium">Dominio:</span> {}</p></div>{link}"#,
            escape(&university.name),
            escape(&university.domains_label()),
        ),
    )
}

fn results(universities: &[University]) -> String {
    let cards: String = universities.iter().map(university_card).collect();
    format!(
        r#"<div class="space-y-4"><p class="text-sm text-textMuted">{}</p><div class="grid gap-4 md:grid-cols-2">{cards}</div></div>"#,
        found_label(universities.len())
    )
}

#[must_use]
pub fn render(screen: &Screen<Vec<University>>) -> String {
    let form = format!(
        "{}{}",
        search_form(Tool::Universities, screen, &FORM),
        notice_for(screen)
    );
    section(
        Tool::Universities,
        &format!(
            "{}{}{}",
            heading(
                "Universidades del Mundo",
                "Busca universidades por país (en inglés)"
            ),
            card(
                "max-w-2xl mx-auto",
                &format!(
                    "{}{}",
                    card_header(
                        "Buscar Universidades",
                        Some("Ingresa el nombre del país en inglés")
                    ),
                    card_content("space-y-4", &form)
                )
            ),
            screen
                .result()
                .map(|list| results(list))
                .unwrap_or_default()
        ),
    )
}
