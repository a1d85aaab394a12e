use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::api::{HttpToolboxApi, ToolboxApi};
use crate::config::{AppConfig, SessionConfig};
use crate::router::Tool;
use crate::session::{Session, SessionStore};
use crate::tools::{
    self, Rejected, age::AgePrediction, creature::Creature, gender::GenderPrediction,
    news::NewsItem, universities::University, weather::WeatherSnapshot,
};
use crate::ui;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "toolbox_session";

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/nav/drawer", post(toggle_drawer))
        .route("/tools/{slug}", get(select_tool).post(submit_tool))
        .route("/tools/{slug}/load", get(load_tool))
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let api: Arc<dyn ToolboxApi> = Arc::new(HttpToolboxApi::new(&config));
    let sessions = SessionStore::new();
    spawn_session_sweeper(sessions.clone(), &config.session);

    let state = AppState {
        api,
        sessions,
        config: Arc::clone(&config),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Periodically drop sessions that have been idle too long.
fn spawn_session_sweeper(sessions: SessionStore, config: &SessionConfig) {
    let timeout = Duration::from_secs(config.idle_timeout_secs);
    let period = Duration::from_secs(config.sweep_interval_secs.max(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = sessions.prune_idle(timeout);
            if removed > 0 {
                debug!(name: "session.pruned", removed, remaining = sessions.len(), "Pruned idle sessions");
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Session & response helpers
// ─────────────────────────────────────────────────────────────────────────────

/// The session named by the cookie, or a new one with the cookie set.
fn session_for(state: &AppState, jar: CookieJar) -> (Session, CookieJar) {
    if let Some(session) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.get(cookie.value()))
    {
        return (session, jar);
    }

    let session = state.sessions.create();
    debug!(name: "session.created", session = %session.id(), "Created new session");
    let cookie = Cookie::build((SESSION_COOKIE, session.id().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (session, jar.add(cookie))
}

/// HTMX swaps want the `#screen` fragment; boosted navigation and plain
/// browser requests want the whole page.
fn wants_fragment(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request") && !headers.contains_key("hx-boosted")
}

fn full_page(state: &AppState, session: &Session) -> Html<String> {
    Html(session.with_view(|router, screen| ui::page(router, screen, &state.config)))
}

fn render(state: &AppState, session: &Session, headers: &HeaderMap, jar: CookieJar) -> Response {
    if wants_fragment(headers) {
        let html = session.with_view(|_, screen| ui::fragment(screen, &state.config));
        (jar, Html(html)).into_response()
    } else {
        (jar, full_page(state, session)).into_response()
    }
}

fn not_found_response(state: &AppState, session: &Session, jar: CookieJar) -> Response {
    let html = session.with_view(|router, _| ui::not_found_page(router, &state.config));
    (StatusCode::NOT_FOUND, jar, Html(html)).into_response()
}

fn select(session: &Session, tool: Tool) {
    if session.select(tool) {
        debug!(name: "screen.mounted", session = %session.id(), tool = %tool, "Mounted screen");
    }
}

fn log_rejection(session: &Session, tool: Tool, rejected: Rejected) {
    debug!(
        name: "screen.request.rejected",
        session = %session.id(),
        tool = %tool,
        reason = ?rejected,
        "Request not started"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - page for the session's current tool.
async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = session_for(&state, jar);
    (jar, full_page(&state, &session)).into_response()
}

/// GET /health - liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// POST /nav/drawer - open or close the mobile navigation drawer, then
/// redirect (303) to the current tool.
async fn toggle_drawer(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = session_for(&state, jar);
    session.toggle_drawer();
    let location = format!("/tools/{}", session.current_tool().slug());
    (jar, Redirect::to(&location)).into_response()
}

/// GET /tools/:slug - select a tool.
async fn select_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    jar: CookieJar,
) -> Response {
    let (session, jar) = session_for(&state, jar);
    match slug.parse::<Tool>() {
        Ok(tool) => {
            select(&session, tool);
            (jar, full_page(&state, &session)).into_response()
        }
        Err(_) => not_found_response(&state, &session, jar),
    }
}

/// Submitted search form.
#[derive(Debug, Deserialize)]
struct QueryForm {
    #[serde(default)]
    query: String,
}

/// POST /tools/:slug - run the query of an input screen.
async fn submit_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(form): Form<QueryForm>,
) -> Response {
    let (session, jar) = session_for(&state, jar);
    let tool = match slug.parse::<Tool>() {
        Ok(tool @ (Tool::Gender | Tool::Age | Tool::Universities | Tool::Creature)) => tool,
        _ => return not_found_response(&state, &session, jar),
    };
    select(&session, tool);

    let api = Arc::clone(&state.api);
    let query = form.query.as_str();
    let outcome = match tool {
        Tool::Gender => {
            tools::submit::<GenderPrediction, _, _>(&session, query, move |name| async move {
                api.predict_gender(&name).await
            })
            .await
        }
        Tool::Age => {
            tools::submit::<AgePrediction, _, _>(&session, query, move |name| async move {
                api.predict_age(&name).await
            })
            .await
        }
        Tool::Universities => {
            tools::submit::<Vec<University>, _, _>(&session, query, move |country| async move {
                api.search_universities(&country).await
            })
            .await
        }
        _ => {
            tools::submit::<Creature, _, _>(&session, query, move |name| async move {
                api.lookup_creature(&name).await
            })
            .await
        }
    };
    if let Err(rejected) = outcome {
        log_rejection(&session, tool, rejected);
    }

    render(&state, &session, &headers, jar)
}

/// GET /tools/:slug/load - run the one-shot fetch of a screen that loads on mount.
async fn load_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let (session, jar) = session_for(&state, jar);
    let tool = match slug.parse::<Tool>() {
        Ok(tool) if tool.fetches_on_mount() => tool,
        _ => return not_found_response(&state, &session, jar),
    };
    select(&session, tool);

    let api = Arc::clone(&state.api);
    let outcome = if tool == Tool::Weather {
        tools::load::<WeatherSnapshot, _, _>(&session, move || async move {
            api.current_weather().await
        })
        .await
    } else {
        tools::load::<Vec<NewsItem>, _, _>(&session, move || async move {
            api.latest_news().await
        })
        .await
    };
    if let Err(rejected) = outcome {
        log_rejection(&session, tool, rejected);
    }

    render(&state, &session, &headers, jar)
}

/// Anything else.
async fn not_found(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = session_for(&state, jar);
    not_found_response(&state, &session, jar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_wants_fragment() {
        let mut headers = HeaderMap::new();
        assert!(!wants_fragment(&headers));

        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert!(wants_fragment(&headers));

        headers.insert("hx-boosted", HeaderValue::from_static("true"));
        assert!(!wants_fragment(&headers));
    }
}
