//! Open-Meteo forecast: current conditions for a fixed coordinate.

use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::config::WeatherConfig;
use crate::error::{Result, ToolError};
use crate::tools::weather::{PRESSURE_HPA, VISIBILITY_M, WeatherSnapshot};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                              precipitation,weather_code,wind_speed_10m";

#[derive(Debug, Deserialize)]
pub(super) struct ForecastResponse {
    #[serde(default)]
    current: Option<Current>,
}

#[derive(Debug, Deserialize)]
struct Current {
    /// Local time of the observation, `2026-10-19T10:15`.
    #[serde(default)]
    time: Option<String>,
    temperature_2m: Option<f64>,
    apparent_temperature: Option<f64>,
    relative_humidity_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
    weather_code: Option<u32>,
}

pub(super) fn url(base: &str, weather: &WeatherConfig) -> Result<Url> {
    Ok(Url::parse_with_params(
        base,
        [
            ("latitude", weather.latitude.to_string().as_str()),
            ("longitude", weather.longitude.to_string().as_str()),
            ("current", CURRENT_FIELDS),
            ("timezone", weather.timezone.as_str()),
        ],
    )?)
}

impl ForecastResponse {
    pub(super) fn into_snapshot(self, location: &str) -> Result<WeatherSnapshot> {
        let current = self.current.ok_or(ToolError::Missing("current"))?;
        let date = current
            .time
            .as_deref()
            .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M").ok())
            .map_or_else(|| Utc::now().date_naive(), |dt| dt.date());

        Ok(WeatherSnapshot {
            location: location.to_string(),
            date,
            temperature: current
                .temperature_2m
                .ok_or(ToolError::Missing("temperature_2m"))?,
            feels_like: current
                .apparent_temperature
                .ok_or(ToolError::Missing("apparent_temperature"))?,
            humidity: current
                .relative_humidity_2m
                .ok_or(ToolError::Missing("relative_humidity_2m"))?,
            wind_speed: current
                .wind_speed_10m
                .ok_or(ToolError::Missing("wind_speed_10m"))?,
            pressure: PRESSURE_HPA,
            visibility: VISIBILITY_M,
            code: current
                .weather_code
                .ok_or(ToolError::Missing("weather_code"))?,
        })
    }
}
