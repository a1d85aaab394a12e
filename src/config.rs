use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub weather: WeatherConfig,
    pub news: NewsConfig,
    pub about: AboutConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
}

/// Base URL of every third-party service.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub genderize_url: String,
    pub agify_url: String,
    pub universities_url: String,
    pub open_meteo_url: String,
    pub pokeapi_url: String,
    pub wordpress_url: String,
}

/// Fixed location the weather screen reports on.
#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsConfig {
    pub per_page: u32,
}

/// Profile shown on the about screen.
#[derive(Debug, Deserialize, Clone)]
pub struct AboutConfig {
    pub author: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub htmx_src: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
                static_dir: "static".to_string(),
            },
            upstream: UpstreamConfig {
                genderize_url: "https://api.genderize.io/".to_string(),
                agify_url: "https://api.agify.io/".to_string(),
                universities_url: "http://universities.hipolabs.com/search".to_string(),
                open_meteo_url: "https://api.open-meteo.com/v1/forecast".to_string(),
                pokeapi_url: "https://pokeapi.co/api/v2/pokemon".to_string(),
                wordpress_url: "https://wordpress.org/news/wp-json/wp/v2/posts".to_string(),
            },
            weather: WeatherConfig {
                label: "Santo Domingo, RD".to_string(),
                latitude: 18.4861,
                longitude: -69.9312,
                timezone: "America/New_York".to_string(),
            },
            news: NewsConfig { per_page: 3 },
            about: AboutConfig {
                author: "Caja de Herramientas".to_string(),
                email: None,
                phone: None,
            },
            session: SessionConfig {
                idle_timeout_secs: 30 * 60,
                sweep_interval_secs: 60,
            },
            ui: UiConfig {
                htmx_src: "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = Self::default();
        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.host", defaults.server.host)?
            .set_default("server.static_dir", defaults.server.static_dir)?
            .set_default("upstream.genderize_url", defaults.upstream.genderize_url)?
            .set_default("upstream.agify_url", defaults.upstream.agify_url)?
            .set_default("upstream.universities_url", defaults.upstream.universities_url)?
            .set_default("upstream.open_meteo_url", defaults.upstream.open_meteo_url)?
            .set_default("upstream.pokeapi_url", defaults.upstream.pokeapi_url)?
            .set_default("upstream.wordpress_url", defaults.upstream.wordpress_url)?
            .set_default("weather.label", defaults.weather.label)?
            .set_default("weather.latitude", defaults.weather.latitude)?
            .set_default("weather.longitude", defaults.weather.longitude)?
            .set_default("weather.timezone", defaults.weather.timezone)?
            .set_default("news.per_page", i64::from(defaults.news.per_page))?
            .set_default("about.author", defaults.about.author)?
            .set_default("session.idle_timeout_secs", 30 * 60)?
            .set_default("session.sweep_interval_secs", 60)?
            .set_default("ui.htmx_src", defaults.ui.htmx_src)?;

        // 2. Config file: explicit path, else ./config.yaml when present
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new("config.yaml").exists() {
            builder = builder.add_source(File::with_name("config.yaml"));
        }

        // 3. Environment variables, e.g. TOOLBOX_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("TOOLBOX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their clap env fallbacks) win over everything
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
