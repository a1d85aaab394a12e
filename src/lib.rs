//! Caja de Herramientas
//!
//! A small multi-tool web application: gender and age prediction from a
//! name, university search by country, current weather in Santo Domingo, a
//! Pokémon lookup and the latest WordPress.org news. Pages are rendered on
//! the server and progressively enhanced with HTMX.
//!
//! # Architecture
//!
//! - **Server**: Axum router with per-browser cookie sessions
//! - **Tools**: one state container per mounted screen, driven by
//!   [`tools::submit`] and [`tools::load`]
//! - **API**: [`api::ToolboxApi`] seam over the public HTTP services
//! - **UI**: HTML string renderers with HTMX fragment swaps
//!
//! # Modules
//!
//! - [`api`]: Upstream service clients
//! - [`config`]: Layered configuration
//! - [`error`]: Tool error type and its three tiers
//! - [`router`]: Tool enumeration and view router
//! - [`server`]: HTTP handlers and server startup
//! - [`session`]: Per-browser session state
//! - [`telemetry`]: Logging setup
//! - [`tools`]: Screen state and result types
//! - [`ui`]: HTML rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::format_push_string)]

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod server;
pub mod session;
pub mod telemetry;
pub mod tools;
pub mod ui;

use std::sync::Arc;

use api::ToolboxApi;
use config::AppConfig;
use session::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Data source for every tool screen.
    pub api: Arc<dyn ToolboxApi>,
    /// Session store for per-browser view state.
    pub sessions: SessionStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
