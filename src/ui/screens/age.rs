use super::{FormTexts, heading, notice_for, search_form, section};
use crate::router::Tool;
use crate::tools::Screen;
use crate::tools::age::AgePrediction;
use crate::tools::format::capitalize;
use crate::ui::components::{card, card_content, card_header};
use crate::ui::escape;

const FORM: FormTexts = FormTexts {
    placeholder: "Ejemplo: Meelad, Robert, Sarah...",
    submit: "Predecir",
};

fn result(prediction: &AgePrediction) -> String {
    let category = prediction.category();
    format!(
        r#"<div class="p-8 rounded-lg {color} text-white space-y-4 text-center">
            <div class="text-8xl">{emoji}</div>
            <h3 class="text-3xl font-bold">{name}</h3>
            <p class="text-5xl font-bold">{age}</p>
            <p class="text-2xl opacity-90">{label}</p>
            <p class="text-sm opacity-75">{sample}</p>
        </div>"#,
        color = category.color_class(),
        emoji = category.emoji(),
        name = escape(&capitalize(&prediction.name)),
        age = prediction.age_label(),
        label = category.label(),
        sample = prediction.sample_label(),
    )
}

#[must_use]
pub fn render(screen: &Screen<AgePrediction>) -> String {
    let body = format!(
        "{}{}{}",
        search_form(Tool::Age, screen, &FORM),
        notice_for(screen),
        screen.result().map(result).unwrap_or_default(),
    );
    section(
        Tool::Age,
        &format!(
            "{}{}",
            heading(
                "Predictor de Edad",
                "Estima la edad promedio según el nombre"
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
