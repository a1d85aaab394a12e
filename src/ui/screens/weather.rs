use super::{heading, mount_loader, notice_for, section};
use crate::router::Tool;
use crate::tools::Screen;
use crate::tools::weather::WeatherSnapshot;
use crate::ui::components::{card, card_content};
use crate::ui::escape;

fn stat(value: &str, label: &str) -> String {
    format!(
        r#"<div class="rounded-lg bg-surfaceVariant p-4 text-center"><p class="text-2xl font-bold">{}</p><p class="text-xs text-textMuted">{label}</p></div>"#,
        escape(value)
    )
}

fn snapshot(weather: &WeatherSnapshot) -> String {
    let header = format!(
        r#"<div class="flex flex-col space-y-1.5 p-6 text-center"><h3 class="text-3xl font-semibold">{}</h3><p class="text-sm text-textMuted capitalize">{}</p></div>"#,
        escape(&weather.location),
        weather.date_label()
    );
    let body = format!(
        r#"<div class="text-center space-y-2">
            <p class="text-6xl font-bold">{temperature}</p>
            <p class="text-xl text-textMuted">{condition}</p>
            <p class="text-sm text-textMuted">{feels_like}</p>
        </div>
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">{humidity}{wind}{visibility}{pressure}</div>"#,
        temperature = weather.temperature_label(),
        condition = weather.condition(),
        feels_like = weather.feels_like_label(),
        humidity = stat(&weather.humidity_label(), "Humedad"),
        wind = stat(&weather.wind_label(), "Viento"),
        visibility = stat(&weather.visibility_label(), "Visibilidad"),
        pressure = stat(&weather.pressure_label(), "Presión"),
    );
    card(
        "max-w-2xl mx-auto",
        &format!("{header}{}", card_content("space-y-6", &body)),
    )
}

#[must_use]
pub fn render(screen: &Screen<WeatherSnapshot>) -> String {
    let body = if screen.loading() {
        mount_loader(Tool::Weather, screen)
    } else {
        format!(
            "{}{}",
            notice_for(screen),
            screen.result().map(snapshot).unwrap_or_default()
        )
    };
    section(
        Tool::Weather,
        &format!(
            "{}{body}",
            heading(
                "Clima en República Dominicana",
                "Condiciones actuales en Santo Domingo"
            )
        ),
    )
}
