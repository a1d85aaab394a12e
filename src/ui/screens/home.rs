use super::section;
use crate::router::Tool;
use crate::ui::components::{card, card_header, icons};

const TOOL_CARDS: [(Tool, &str, &str); 6] = [
    (Tool::Gender, "🚻 Predictor de Género", "Predice el género basado en un nombre"),
    (Tool::Age, "👶 Predictor de Edad", "Estima la edad promedio de un nombre"),
    (Tool::Universities, "🎓 Universidades", "Busca universidades por país"),
    (Tool::Weather, "🌤️ Clima RD", "Consulta el clima en República Dominicana"),
    (Tool::Creature, "⚡ Pokémon", "Información detallada de Pokémon"),
    (Tool::News, "📰 Noticias", "Últimas noticias de WordPress"),
];

#[must_use]
pub fn render() -> String {
    let cards: String = TOOL_CARDS
        .into_iter()
        .map(|(tool, title, description)| {
            format!(
                r#"<a href="/tools/{}" hx-boost="true" class="block">{}</a>"#,
                tool.slug(),
                card(
                    "hover:shadow-lg transition-shadow hover:border-primary/50",
                    &card_header(title, Some(description)),
                )
            )
        })
        .collect();

    section(
        Tool::Home,
        &format!(
            r#"<div class="text-center space-y-4">
                <div class="flex justify-center mb-6">{icon}</div>
                <h1 class="text-4xl lg:text-6xl font-bold text-primary">Caja de Herramientas</h1>
                <p class="text-xl text-textMuted max-w-2xl mx-auto">Una colección de utilidades prácticas para tu día a día</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mt-8">{cards}</div>"#,
            icon = icons::wrench("h-32 w-32 text-primary animate-pulse"),
        ),
    )
}
