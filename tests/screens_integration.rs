use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::NaiveDate;
use tokio::sync::oneshot;

use toolbox::AppState;
use toolbox::api::ToolboxApi;
use toolbox::config::AppConfig;
use toolbox::error::{Result, ToolError};
use toolbox::router::Tool;
use toolbox::server::{SESSION_COOKIE, build_router};
use toolbox::session::SessionStore;
use toolbox::tools::age::AgePrediction;
use toolbox::tools::creature::Creature;
use toolbox::tools::gender::{Gender, GenderPrediction};
use toolbox::tools::news::NewsItem;
use toolbox::tools::universities::University;
use toolbox::tools::weather::{PRESSURE_HPA, VISIBILITY_M, WeatherSnapshot};
use toolbox::tools::{self, Rejected, ScreenState};

/// In-memory [`ToolboxApi`] that counts every call.
#[derive(Default)]
struct FakeApi {
    gender_calls: AtomicUsize,
    age_calls: AtomicUsize,
    university_calls: AtomicUsize,
    weather_calls: AtomicUsize,
    creature_calls: AtomicUsize,
    news_calls: AtomicUsize,
    news_fails: bool,
}

impl FakeApi {
    fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn john() -> GenderPrediction {
    GenderPrediction {
        name: "John".to_string(),
        gender: Gender::Male,
        probability: 0.97,
        count: 12_345,
    }
}

#[async_trait]
impl ToolboxApi for FakeApi {
    async fn predict_gender(&self, name: &str) -> Result<GenderPrediction> {
        self.gender_calls.fetch_add(1, Ordering::SeqCst);
        if name.eq_ignore_ascii_case("john") {
            Ok(john())
        } else {
            Err(ToolError::Missing("gender"))
        }
    }

    async fn predict_age(&self, name: &str) -> Result<AgePrediction> {
        self.age_calls.fetch_add(1, Ordering::SeqCst);
        Ok(AgePrediction {
            name: name.to_string(),
            age: 30,
            count: 50,
        })
    }

    async fn search_universities(&self, country: &str) -> Result<Vec<University>> {
        self.university_calls.fetch_add(1, Ordering::SeqCst);
        if country == "Atlantis" {
            return Err(ToolError::Missing("universities"));
        }
        Ok(vec![University {
            name: "Pontificia Universidad Católica Madre y Maestra".to_string(),
            web_pages: vec!["https://www.pucmm.edu.do/".to_string()],
            domains: vec!["pucmm.edu.do".to_string()],
            country: country.to_string(),
        }])
    }

    async fn current_weather(&self) -> Result<WeatherSnapshot> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        Ok(WeatherSnapshot {
            location: "Santo Domingo, RD".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            temperature: 29.6,
            feels_like: 33.2,
            humidity: 74.0,
            wind_speed: 12.4,
            pressure: PRESSURE_HPA,
            visibility: VISIBILITY_M,
            code: 0,
        })
    }

    async fn lookup_creature(&self, name: &str) -> Result<Creature> {
        self.creature_calls.fetch_add(1, Ordering::SeqCst);
        if !name.eq_ignore_ascii_case("pikachu") {
            return Err(ToolError::Status { status: 404 });
        }
        Ok(Creature {
            name: "pikachu".to_string(),
            sprite_url: "https://artwork/25.png".to_string(),
            base_experience: Some(112),
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
            types: vec!["electric".to_string()],
            cry_url: Some("https://cries/25.ogg".to_string()),
        })
    }

    async fn latest_news(&self) -> Result<Vec<NewsItem>> {
        self.news_calls.fetch_add(1, Ordering::SeqCst);
        if self.news_fails {
            return Err(ToolError::Status { status: 500 });
        }
        Ok(vec![NewsItem {
            id: 1,
            title_html: "WordPress 7.1".to_string(),
            excerpt_html: "<p>Release notes.</p>".to_string(),
            link: "https://wordpress.org/news/2026/10/71/".to_string(),
            date: "2026-10-14T18:30:00".to_string(),
        }])
    }
}

struct Harness {
    server: TestServer,
    api: Arc<FakeApi>,
    sessions: SessionStore,
}

fn harness_with(api: FakeApi, save_cookies: bool) -> Harness {
    let api = Arc::new(api);
    let sessions = SessionStore::new();
    let state = AppState {
        api: Arc::clone(&api) as Arc<dyn ToolboxApi>,
        sessions: sessions.clone(),
        config: Arc::new(AppConfig::default()),
    };
    let mut server = TestServer::new(build_router(state)).unwrap();
    if save_cookies {
        server.save_cookies();
    }
    Harness {
        server,
        api,
        sessions,
    }
}

fn harness() -> Harness {
    harness_with(FakeApi::default(), true)
}

fn hx_request() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("hx-request"),
        HeaderValue::from_static("true"),
    )
}

#[tokio::test]
async fn test_home_page_and_session_cookie() {
    let h = harness();

    let response = h.server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Caja de Herramientas"));
    assert!(html.contains("Una colección de utilidades prácticas para tu día a día"));
    assert!(!response.cookie(SESSION_COOKIE).value().is_empty());
    assert_eq!(h.sessions.len(), 1);

    h.server.get("/tools/gender").await.assert_status_ok();
    assert_eq!(h.sessions.len(), 1);
}

#[tokio::test]
async fn test_sessions_are_per_browser() {
    let h = harness_with(FakeApi::default(), false);

    h.server.get("/tools/age").await.assert_status_ok();
    let html = h.server.get("/").await.text();

    // No cookie was sent back, so the second request got a fresh home screen.
    assert_eq!(h.sessions.len(), 2);
    assert!(html.contains(r#"data-tool="home""#));
}

#[tokio::test]
async fn test_john_scenario() {
    let h = harness();
    h.server.get("/tools/gender").await.assert_status_ok();

    let (name, value) = hx_request();
    let response = h
        .server
        .post("/tools/gender")
        .add_header(name, value)
        .form(&[("query", "  John ")])
        .await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.starts_with(r#"<section id="screen" data-tool="gender""#));
    assert!(html.contains("👨 Masculino"));
    assert!(html.contains("Probabilidad: 97.0%"));
    assert!(html.contains("Basado en 12,345 registros"));
    assert!(html.contains("bg-male"));
    assert_eq!(FakeApi::count(&h.api.gender_calls), 1);
}

#[tokio::test]
async fn test_blank_input_makes_no_call() {
    let h = harness();
    h.server.get("/tools/gender").await;
    h.server.post("/tools/gender").form(&[("query", "John")]).await;

    let html = h
        .server
        .post("/tools/gender")
        .form(&[("query", "   ")])
        .await
        .text();

    assert!(html.contains("Por favor ingresa un nombre"));
    assert!(html.contains(r#"role="alert""#));
    // The previous result stays on screen.
    assert!(html.contains("👨 Masculino"));
    assert_eq!(FakeApi::count(&h.api.gender_calls), 1);
}

#[tokio::test]
async fn test_blank_input_on_every_input_screen() {
    type Counter = fn(&FakeApi) -> &AtomicUsize;
    let screens: [(&str, &str, Counter); 4] = [
        ("gender", "Por favor ingresa un nombre", |api| &api.gender_calls),
        ("age", "Por favor ingresa un nombre", |api| &api.age_calls),
        ("universities", "Por favor ingresa un país", |api| {
            &api.university_calls
        }),
        ("pokemon", "Por favor ingresa el nombre de un Pokémon", |api| {
            &api.creature_calls
        }),
    ];

    let h = harness();
    for (slug, message, calls) in screens {
        h.server.get(&format!("/tools/{slug}")).await;
        for blank in ["", "   ", "\t\n"] {
            let (name, value) = hx_request();
            let html = h
                .server
                .post(&format!("/tools/{slug}"))
                .add_header(name, value)
                .form(&[("query", blank)])
                .await
                .text();
            assert!(html.contains(message), "{slug}: {html}");
            assert!(html.contains(r#"role="alert""#), "{slug}");
        }
        assert_eq!(FakeApi::count(calls(&h.api)), 0, "{slug}");
    }
}

#[tokio::test]
async fn test_repeat_query_is_idempotent() {
    let h = harness();
    h.server.get("/tools/gender").await;

    let (name, value) = hx_request();
    let first = h
        .server
        .post("/tools/gender")
        .add_header(name.clone(), value.clone())
        .form(&[("query", "John")])
        .await
        .text();
    let second = h
        .server
        .post("/tools/gender")
        .add_header(name, value)
        .form(&[("query", "John")])
        .await
        .text();

    assert_eq!(first, second);
    assert_eq!(FakeApi::count(&h.api.gender_calls), 2);
}

#[tokio::test]
async fn test_miss_clears_previous_result() {
    let h = harness();
    h.server.get("/tools/gender").await;
    h.server.post("/tools/gender").form(&[("query", "John")]).await;

    let html = h
        .server
        .post("/tools/gender")
        .form(&[("query", "Zzxq")])
        .await
        .text();

    assert!(html.contains("No se encontró información"));
    assert!(html.contains("No se pudo determinar el género para este nombre"));
    assert!(!html.contains("👨 Masculino"));
}

#[tokio::test]
async fn test_pikachu_scenario() {
    let h = harness();
    h.server.get("/tools/pokemon").await;

    let html = h
        .server
        .post("/tools/pokemon")
        .form(&[("query", "Pikachu")])
        .await
        .text();

    assert!(html.contains("bg-yellow-400"));
    assert!(html.contains(">electric</span>"));
    assert!(html.contains(">lightning rod</span>"));
    assert!(html.contains("Escuchar sonido"));

    let html = h
        .server
        .post("/tools/pokemon")
        .form(&[("query", "missingno")])
        .await
        .text();
    assert!(html.contains("Pokémon no encontrado. Intenta con otro nombre"));
    assert!(!html.contains("bg-yellow-400"));
}

#[tokio::test]
async fn test_universities_prefilled_and_empty_result() {
    let h = harness();

    let html = h.server.get("/tools/universities").await.text();
    assert!(html.contains(r#"value="Dominican Republic""#));
    assert_eq!(FakeApi::count(&h.api.university_calls), 0);

    let html = h
        .server
        .post("/tools/universities")
        .form(&[("query", "Dominican Republic")])
        .await
        .text();
    assert!(html.contains("Se encontraron 1 universidades"));
    assert!(html.contains("pucmm.edu.do"));

    let html = h
        .server
        .post("/tools/universities")
        .form(&[("query", "Atlantis")])
        .await
        .text();
    assert!(html.contains("No se encontraron resultados"));
    assert!(html.contains(r#"role="status""#));
    assert!(!html.contains("Visitar sitio web"));
    assert!(!html.contains("Se encontraron"));
}

#[tokio::test]
async fn test_form_post_selects_its_tool() {
    let h = harness();
    h.server.get("/tools/news").await;

    let html = h
        .server
        .post("/tools/age")
        .form(&[("query", "Sarah")])
        .await
        .text();

    assert!(html.contains(r#"data-tool="age""#));
    assert!(html.contains("30 años"));
    assert!(html.contains("Adulto"));
}

#[tokio::test]
async fn test_weather_fetches_once_per_mount() {
    let h = harness();

    let html = h.server.get("/tools/weather").await.text();
    assert!(html.contains(r#"hx-get="/tools/weather/load""#));
    assert!(html.contains(r#"hx-trigger="load""#));
    assert_eq!(FakeApi::count(&h.api.weather_calls), 0);

    let (name, value) = hx_request();
    let html = h
        .server
        .get("/tools/weather/load")
        .add_header(name.clone(), value.clone())
        .await
        .text();
    assert!(html.starts_with(r#"<section id="screen" data-tool="weather""#));
    assert!(html.contains("Santo Domingo, RD"));
    assert!(html.contains("Despejado"));
    assert!(html.contains("30°C"));
    assert!(html.contains("lunes, 19 de octubre de 2026"));
    assert_eq!(FakeApi::count(&h.api.weather_calls), 1);

    // Neither a repeated load nor re-selecting the same tool fetches again.
    h.server
        .get("/tools/weather/load")
        .add_header(name, value)
        .await;
    let html = h.server.get("/tools/weather").await.text();
    assert!(html.contains("Santo Domingo, RD"));
    assert!(!html.contains("hx-get"));
    assert_eq!(FakeApi::count(&h.api.weather_calls), 1);

    // Coming back to the tool mounts a fresh screen.
    h.server.get("/tools/home").await;
    let html = h.server.get("/tools/weather").await.text();
    assert!(html.contains(r#"hx-get="/tools/weather/load""#));
    h.server.get("/tools/weather/load").await;
    assert_eq!(FakeApi::count(&h.api.weather_calls), 2);
}

#[tokio::test]
async fn test_mount_fetch_without_htmx() {
    let h = harness();

    let html = h.server.get("/tools/weather").await.text();
    assert!(html.contains(r#"<script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js"></script>"#));
    assert!(html.contains(r#"<a href="/tools/weather/load""#));
    assert!(!html.contains("<noscript>"));
    assert_eq!(FakeApi::count(&h.api.weather_calls), 0);

    // Following the plain link runs the fetch and returns the whole page.
    let html = h.server.get("/tools/weather/load").await.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Santo Domingo, RD"));
    assert!(!html.contains(r#"href="/tools/weather/load""#));
    assert_eq!(FakeApi::count(&h.api.weather_calls), 1);

    let html = h.server.get("/tools/news").await.text();
    assert!(html.contains(r#"<a href="/tools/news/load""#));
}

#[tokio::test]
async fn test_stylesheet_defines_rendered_palettes() {
    let h = harness();

    let response = h.server.get("/static/app.css").await;
    response.assert_status_ok();
    let css = response.text();

    let kinds = [
        "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
        "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
    ];
    for kind in kinds {
        let class = toolbox::tools::creature::type_color(kind);
        assert!(css.contains(&format!(".{class} ")), "{kind} -> {class}");
    }
    for class in ["bg-male", "bg-female", "bg-young", "bg-adult", "bg-old", "animate-spin"] {
        assert!(css.contains(&format!(".{class} ")), "{class}");
    }
}

#[tokio::test]
async fn test_news_failure_notice() {
    let h = harness_with(
        FakeApi {
            news_fails: true,
            ..FakeApi::default()
        },
        true,
    );
    h.server.get("/tools/news").await;

    let html = h.server.get("/tools/news/load").await.text();
    assert!(html.contains("Error al cargar las noticias"));
    assert!(html.contains(r#"role="alert""#));
    assert!(!html.contains("hx-get"));
    assert_eq!(FakeApi::count(&h.api.news_calls), 1);
}

#[tokio::test]
async fn test_news_articles() {
    let h = harness();
    h.server.get("/tools/news").await;

    let html = h.server.get("/tools/news/load").await.text();
    assert!(html.contains("WordPress 7.1"));
    assert!(html.contains("Release notes...."));
    assert!(html.contains("14 de octubre de 2026"));
    assert!(html.contains("Visitar noticia completa"));
}

#[tokio::test]
async fn test_drawer_toggle_and_close_on_select() {
    let h = harness();

    let response = h.server.post("/nav/drawer").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/tools/home");
    let html = h.server.get("/tools/home").await.text();
    assert!(html.contains(r#"id="drawer""#));
    assert!(html.contains(r#"hx-push-url="false""#));

    let html = h.server.get("/tools/about").await.text();
    assert!(!html.contains(r#"id="drawer""#));
    assert!(html.contains("Acerca de"));

    h.server.post("/nav/drawer").await;
    let response = h.server.post("/nav/drawer").await;
    assert_eq!(response.header("location"), "/tools/about");
    let html = h.server.get("/").await.text();
    assert!(!html.contains(r#"id="drawer""#));
}

#[tokio::test]
async fn test_unknown_paths() {
    let h = harness();

    let response = h.server.get("/tools/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Página no encontrada"));

    h.server
        .post("/tools/weather")
        .form(&[("query", "x")])
        .await
        .assert_status(StatusCode::NOT_FOUND);
    h.server
        .get("/tools/gender/load")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    h.server
        .get("/elsewhere")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let h = harness();
    let response = h.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_loading_span_and_stale_result() {
    let store = SessionStore::new();
    let session = store.create();
    session.select(Tool::Gender);

    let (tx, rx) = oneshot::channel::<Result<GenderPrediction>>();
    let in_flight = session.clone();
    let task = tokio::spawn(async move {
        tools::submit::<GenderPrediction, _, _>(&in_flight, "John", |_| async move {
            rx.await.unwrap_or(Err(ToolError::Missing("gender")))
        })
        .await
    });

    // Wait until the request is in flight.
    loop {
        if matches!(session.screen(), ScreenState::Gender(ref s) if s.loading()) {
            break;
        }
        tokio::task::yield_now().await;
    }

    // A second submission while loading is rejected without a call.
    let called = AtomicBool::new(false);
    let second = tools::submit::<GenderPrediction, _, _>(&session, "Maria", |_| {
        called.store(true, Ordering::SeqCst);
        async { Err(ToolError::Missing("gender")) }
    })
    .await;
    assert_eq!(second, Err(Rejected::Busy));
    assert!(!called.load(Ordering::SeqCst));

    // Navigate away before the response arrives.
    session.select(Tool::Age);
    tx.send(Ok(john())).unwrap();
    assert_eq!(task.await.unwrap(), Ok(()));

    match session.screen() {
        ScreenState::Age(screen) => assert!(screen.result().is_none()),
        other => panic!("unexpected screen: {other:?}"),
    }
    session.select(Tool::Gender);
    match session.screen() {
        ScreenState::Gender(screen) => {
            assert!(screen.result().is_none());
            assert!(!screen.loading());
        }
        other => panic!("unexpected screen: {other:?}"),
    }
}

#[tokio::test]
async fn test_loading_cleared_after_response() {
    let store = SessionStore::new();
    let session = store.create();
    session.select(Tool::Gender);

    let (tx, rx) = oneshot::channel::<Result<GenderPrediction>>();
    let in_flight = session.clone();
    let task = tokio::spawn(async move {
        tools::submit::<GenderPrediction, _, _>(&in_flight, "John", |query| async move {
            assert_eq!(query, "John");
            rx.await.unwrap_or(Err(ToolError::Missing("gender")))
        })
        .await
    });

    loop {
        if matches!(session.screen(), ScreenState::Gender(ref s) if s.loading()) {
            break;
        }
        tokio::task::yield_now().await;
    }
    tx.send(Ok(john())).unwrap();
    task.await.unwrap().unwrap();

    match session.screen() {
        ScreenState::Gender(screen) => {
            assert!(!screen.loading());
            assert_eq!(screen.result(), Some(&john()));
        }
        other => panic!("unexpected screen: {other:?}"),
    }
}
