use super::{FormTexts, heading, notice_for, search_form, section};
use crate::router::Tool;
use crate::tools::Screen;
use crate::tools::creature::{Creature, ability_label, type_color};
use crate::tools::format::capitalize;
use crate::ui::components::{
    BadgeVariant, ButtonSize, ButtonVariant, badge, button, card, card_content, card_header,
    icons,
};
use crate::ui::escape;

const FORM: FormTexts = FormTexts {
    placeholder: "Ejemplo: pikachu, charizard, 25...",
    submit: "Buscar",
};

fn cry_button(cry_url: Option<&str>) -> String {
    let attrs = match cry_url {
        Some(url) => format!(
            r#"type="button" data-cry="{}" onclick="new Audio(this.dataset.cry).play()""#,
            escape(url)
        ),
        None => r#"type="button" disabled"#.to_string(),
    };
    button(
        &format!("{} Escuchar sonido", icons::volume("mr-2")),
        ButtonVariant::Outline,
        ButtonSize::Md,
        "w-full",
        &attrs,
    )
}

fn details(creature: &Creature) -> String {
    let types: String = creature
        .types
        .iter()
        .map(|kind| badge(kind, BadgeVariant::Custom, type_color(kind)))
        .collect();
    let abilities: String = creature
        .abilities
        .iter()
        .map(|name| badge(&ability_label(name), BadgeVariant::Secondary, "capitalize"))
        .collect();
    let experience = card(
        "",
        &format!(
            "{}{}",
            card_header("Experiencia Base", None),
            card_content(
                "",
                &format!(
                    r#"<p class="text-2xl font-bold text-primary">{}</p>"#,
                    creature.base_experience_label()
                )
            )
        ),
    );
    let ability_card = card(
        "",
        &format!(
            "{}{}",
            card_header("Habilidades", None),
            card_content(
                "",
                &format!(r#"<div class="flex flex-wrap gap-1">{abilities}</div>"#)
            )
        ),
    );

    card(
        "bg-surfaceVariant",
        &card_content(
            "pt-6 space-y-4",
            &format!(
                r#"<div class="text-center">
                    <img src="{sprite}" alt="{alt}" class="w-64 h-64 mx-auto object-contain">
                    <h2 class="text-3xl font-bold mt-4">{name}</h2>
                </div>
                <div class="flex justify-center gap-2">{types}</div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{experience}{ability_card}</div>
                {cry}"#,
                sprite = escape(&creature.sprite_url),
                alt = escape(&creature.name),
                name = escape(&capitalize(&creature.name)),
                cry = cry_button(creature.cry_url.as_deref()),
            ),
        ),
    )
}

#[must_use]
pub fn render(screen: &Screen<Creature>) -> String {
    let body = format!(
        "{}{}{}",
        search_form(Tool::Creature, screen, &FORM),
        notice_for(screen),
        screen.result().map(details).unwrap_or_default(),
    );
    section(
        Tool::Creature,
        &format!(
            "{}{}",
            heading("Pokédex", "Busca información de tu Pokémon favorito"),
            card(
                "max-w-2xl mx-auto",
                &format!(
                    "{}{}",
                    card_header(
                        "Buscar Pokémon",
                        Some("Ingresa el nombre o número del Pokémon")
                    ),
                    card_content("space-y-4", &body)
                )
            )
        ),
    )
}
