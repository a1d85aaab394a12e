//! Clients for the third-party services behind each tool.
//!
//! [`ToolboxApi`] is the seam the HTTP handlers call through; the production
//! implementation, [`HttpToolboxApi`], issues exactly one unauthenticated GET
//! per call and converts the JSON body into the screen's result type. Every
//! service module owns its wire types and the conversion that decides when a
//! well-formed response is still a semantic miss.

mod agify;
mod genderize;
mod hipolabs;
mod open_meteo;
mod pokeapi;
mod wordpress;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::{AppConfig, UpstreamConfig, WeatherConfig};
use crate::error::{Result, ToolError};
use crate::tools::age::AgePrediction;
use crate::tools::creature::Creature;
use crate::tools::gender::GenderPrediction;
use crate::tools::news::NewsItem;
use crate::tools::universities::University;
use crate::tools::weather::WeatherSnapshot;

/// Data source for every tool screen.
#[async_trait]
pub trait ToolboxApi: Send + Sync {
    async fn predict_gender(&self, name: &str) -> Result<GenderPrediction>;

    async fn predict_age(&self, name: &str) -> Result<AgePrediction>;

    async fn search_universities(&self, country: &str) -> Result<Vec<University>>;

    /// Current conditions at the configured location.
    async fn current_weather(&self) -> Result<WeatherSnapshot>;

    /// Look up a Pokémon by name or national number.
    async fn lookup_creature(&self, name: &str) -> Result<Creature>;

    /// The configured number of most recent posts.
    async fn latest_news(&self) -> Result<Vec<NewsItem>>;
}

/// [`ToolboxApi`] over the public HTTP services.
#[derive(Debug, Clone)]
pub struct HttpToolboxApi {
    http: reqwest::Client,
    upstream: UpstreamConfig,
    weather: WeatherConfig,
    news_per_page: u32,
}

impl HttpToolboxApi {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a client with a custom reqwest client.
    #[must_use]
    pub fn with_client(config: &AppConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            upstream: config.upstream.clone(),
            weather: config.weather.clone(),
            news_per_page: config.news.per_page,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, service: &'static str, url: Url) -> Result<T> {
        debug!(name: "upstream.request", service, url = %url, "Calling upstream");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ToolboxApi for HttpToolboxApi {
    async fn predict_gender(&self, name: &str) -> Result<GenderPrediction> {
        let url = genderize::url(&self.upstream.genderize_url, name)?;
        let body: genderize::GenderizeResponse = self.get_json("genderize", url).await?;
        body.into_prediction(name)
    }

    async fn predict_age(&self, name: &str) -> Result<AgePrediction> {
        let url = agify::url(&self.upstream.agify_url, name)?;
        let body: agify::AgifyResponse = self.get_json("agify", url).await?;
        body.into_prediction(name)
    }

    async fn search_universities(&self, country: &str) -> Result<Vec<University>> {
        let url = hipolabs::url(&self.upstream.universities_url, country)?;
        let body: Vec<hipolabs::UniversityRecord> = self.get_json("universities", url).await?;
        hipolabs::into_universities(body)
    }

    async fn current_weather(&self) -> Result<WeatherSnapshot> {
        let url = open_meteo::url(&self.upstream.open_meteo_url, &self.weather)?;
        let body: open_meteo::ForecastResponse = self.get_json("open-meteo", url).await?;
        body.into_snapshot(&self.weather.label)
    }

    async fn lookup_creature(&self, name: &str) -> Result<Creature> {
        let url = pokeapi::url(&self.upstream.pokeapi_url, name)?;
        let body: pokeapi::PokemonResponse = self.get_json("pokeapi", url).await?;
        body.into_creature()
    }

    async fn latest_news(&self) -> Result<Vec<NewsItem>> {
        let url = wordpress::url(&self.upstream.wordpress_url, self.news_per_page)?;
        let body: Vec<wordpress::Post> = self.get_json("wordpress", url).await?;
        wordpress::into_news(body)
    }
}
