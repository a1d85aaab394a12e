//! Current weather for a fixed location.
//!
//! Pressure and visibility are not requested from the forecast service; the
//! screen shows the constants below.

use chrono::NaiveDate;

use super::format::{round_whole, spanish_date_with_weekday};
use super::{Notices, NoticeVariant, Screen, ScreenResult, ScreenState};
use crate::router::Tool;

/// Displayed atmospheric pressure, in hPa.
pub const PRESSURE_HPA: u32 = 1013;

/// Displayed visibility, in metres.
pub const VISIBILITY_M: u32 = 10_000;

/// Text for a WMO weather code.
#[must_use]
pub fn describe_code(code: u32) -> &'static str {
    match code {
        0 => "Despejado",
        1..=3 => "Parcialmente nublado",
        4..=48 => "Nublado",
        49..=67 => "Lluvia",
        68..=77 => "Nieve",
        78..=82 => "Lluvia intensa",
        _ => "Tormenta",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    /// Observation date in the location's timezone.
    pub date: NaiveDate,
    /// Air temperature, °C.
    pub temperature: f64,
    /// Apparent temperature, °C.
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Wind speed, km/h.
    pub wind_speed: f64,
    pub pressure: u32,
    pub visibility: u32,
    pub code: u32,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn condition(&self) -> &'static str {
        describe_code(self.code)
    }

    #[must_use]
    pub fn date_label(&self) -> String {
        spanish_date_with_weekday(self.date)
    }

    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{}°C", round_whole(self.temperature))
    }

    #[must_use]
    pub fn feels_like_label(&self) -> String {
        format!("Sensación térmica: {}°C", round_whole(self.feels_like))
    }

    #[must_use]
    pub fn humidity_label(&self) -> String {
        format!("{}%", round_whole(self.humidity))
    }

    #[must_use]
    pub fn wind_label(&self) -> String {
        format!("{} km/h", round_whole(self.wind_speed))
    }

    #[must_use]
    pub fn visibility_label(&self) -> String {
        format!("{:.1} km", f64::from(self.visibility) / 1000.0)
    }

    #[must_use]
    pub fn pressure_label(&self) -> String {
        format!("{} hPa", self.pressure)
    }
}

pub const NOTICES: Notices = Notices {
    empty_input: "",
    miss_title: "No se encontró información",
    miss_description: "No hay datos del clima disponibles",
    miss_variant: NoticeVariant::Destructive,
    failure: "Error al obtener el clima",
};

impl ScreenResult for WeatherSnapshot {
    const NOTICES: Notices = NOTICES;
    const TOOL: Tool = Tool::Weather;

    fn slot(state: &mut ScreenState) -> Option<&mut Screen<Self>> {
        match state {
            ScreenState::Weather(screen) => Some(screen),
            _ => None,
        }
    }
}
