use super::{FormTexts, heading, notice_for, search_form, section};
use crate::router::Tool;
use crate::tools::Screen;
use crate::tools::format::capitalize;
use crate::tools::gender::GenderPrediction;
use crate::ui::components::{card, card_content, card_header, icons};
use crate::ui::escape;

const FORM: FormTexts = FormTexts {
    placeholder: "Ejemplo: Irma, John, Maria...",
    submit: "Predecir",
};

fn result(prediction: &GenderPrediction) -> String {
    format!(
        r#"<div class="p-8 rounded-lg {color} text-white space-y-4">
            <div class="flex items-center justify-center gap-4">{icon}<div class="text-center">
                <h3 class="text-3xl font-bold">{name}</h3>
                <p class="text-xl opacity-90">{label}</p>
            </div></div>
            <div class="text-center">
                <p class="text-lg opacity-90">{probability}</p>
                <p class="text-sm opacity-75">{sample}</p>
            </div>
        </div>"#,
        color = prediction.gender.color_class(),
        icon = icons::user("h-16 w-16"),
        name = escape(&capitalize(&prediction.name)),
        label = prediction.gender.label(),
        probability = prediction.probability_label(),
        sample = prediction.sample_label(),
    )
}

#[must_use]
pub fn render(screen: &Screen<GenderPrediction>) -> String {
    let body = format!(
        "{form}{notice}{result}",
        form = search_form(Tool::Gender, screen, &FORM),
        notice = notice_for(screen),
        result = screen.result().map(result).unwrap_or_default(),
    );
    section(
        Tool::Gender,
        &format!(
            "{}{}",
            heading(
                "Predictor de Género",
                "Descubre el género más probable según el nombre"
            ),
            card(
                "max-w-2xl mx-auto",
                &format!(
                    "{}{}",
                    card_header(
                        "Ingresa un nombre",
                        Some("Usa nombres en inglés para mejores resultados")
                    ),
                    card_content("space-y-4", &body)
                )
            )
        ),
    )
}
