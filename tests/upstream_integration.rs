//! The real HTTP clients against a local stand-in for every upstream service.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};

use toolbox::api::{HttpToolboxApi, ToolboxApi};
use toolbox::config::AppConfig;
use toolbox::error::{ErrorKind, ToolError};
use toolbox::tools::gender::Gender;

type Params = Query<HashMap<String, String>>;

async fn genderize(Query(params): Params) -> Json<Value> {
    let name = params.get("name").cloned().unwrap_or_default();
    if name == "John" {
        Json(json!({"count": 12345, "name": name, "gender": "male", "probability": 0.97}))
    } else {
        Json(json!({"count": 0, "name": name, "gender": null, "probability": 0.0}))
    }
}

async fn agify(Query(params): Params) -> Json<Value> {
    let name = params.get("name").cloned().unwrap_or_default();
    Json(json!({"count": 0, "name": name, "age": null}))
}

async fn universities(Query(params): Params) -> Json<Value> {
    match params.get("country").map(String::as_str) {
        Some("Dominican Republic") => Json(json!([{
            "name": "Universidad APEC",
            "web_pages": ["http://www.unapec.edu.do/"],
            "domains": ["unapec.edu.do"],
            "country": "Dominican Republic",
            "alpha_two_code": "DO",
            "state-province": null
        }])),
        _ => Json(json!([])),
    }
}

async fn forecast(Query(params): Params) -> impl IntoResponse {
    let complete = ["latitude", "longitude", "current", "timezone"]
        .iter()
        .all(|key| params.contains_key(*key));
    if !complete {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": true}))).into_response();
    }
    Json(json!({
        "latitude": 18.5,
        "longitude": -69.9,
        "timezone": params["timezone"],
        "current": {
            "time": "2026-10-19T10:15",
            "interval": 900,
            "temperature_2m": 29.6,
            "relative_humidity_2m": 74,
            "apparent_temperature": 33.2,
            "precipitation": 0.0,
            "weather_code": 61,
            "wind_speed_10m": 12.4
        }
    }))
    .into_response()
}

async fn pokemon(Path(name): Path<String>) -> impl IntoResponse {
    if name != "pikachu" {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }
    Json(json!({
        "name": "pikachu",
        "base_experience": 112,
        "abilities": [{"ability": {"name": "static"}}],
        "cries": {"latest": "https://cries/25.ogg"},
        "sprites": {
            "front_default": "https://sprites/25.png",
            "other": {"official-artwork": {"front_default": "https://artwork/25.png"}}
        },
        "types": [{"slot": 1, "type": {"name": "electric"}}]
    }))
    .into_response()
}

async fn posts(Query(params): Params) -> Json<Value> {
    let per_page: u64 = params
        .get("per_page")
        .and_then(|n| n.parse().ok())
        .unwrap_or(10);
    let posts: Vec<Value> = (1..=per_page)
        .map(|id| {
            json!({
                "id": id,
                "date": "2026-10-14T18:30:00",
                "link": format!("https://wordpress.org/news/{id}/"),
                "title": {"rendered": format!("Post {id}")},
                "excerpt": {"rendered": "<p>Text</p>"}
            })
        })
        .collect();
    Json(Value::Array(posts))
}

async fn broken() -> &'static str {
    "<html>not json</html>"
}

/// Serve the stand-in services on an ephemeral port and return its base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/genderize/", get(genderize))
        .route("/agify/", get(agify))
        .route("/search", get(universities))
        .route("/v1/forecast", get(forecast))
        .route("/api/v2/pokemon/{name}", get(pokemon))
        .route("/wp/v2/posts", get(posts))
        .route("/broken", get(broken));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn config_for(base: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.genderize_url = format!("{base}/genderize/");
    config.upstream.agify_url = format!("{base}/agify/");
    config.upstream.universities_url = format!("{base}/search");
    config.upstream.open_meteo_url = format!("{base}/v1/forecast");
    config.upstream.pokeapi_url = format!("{base}/api/v2/pokemon");
    config.upstream.wordpress_url = format!("{base}/wp/v2/posts");
    config
}

async fn api() -> HttpToolboxApi {
    HttpToolboxApi::new(&config_for(&spawn_upstream().await))
}

#[tokio::test]
async fn test_gender_prediction() {
    let api = api().await;

    let prediction = api.predict_gender("John").await.unwrap();
    assert_eq!(prediction.gender, Gender::Male);
    assert_eq!(prediction.count, 12_345);
    assert_eq!(prediction.probability_label(), "Probabilidad: 97.0%");

    let err = api.predict_gender("Zzxq").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SemanticMiss);
}

#[tokio::test]
async fn test_unknown_age_is_a_miss() {
    let err = api().await.predict_age("qqq").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SemanticMiss);
}

#[tokio::test]
async fn test_universities() {
    let api = api().await;

    let list = api.search_universities("Dominican Republic").await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].homepage(), Some("http://www.unapec.edu.do/"));

    let err = api.search_universities("Atlantis").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SemanticMiss);
}

#[tokio::test]
async fn test_weather() {
    let snapshot = api().await.current_weather().await.unwrap();
    assert_eq!(snapshot.location, "Santo Domingo, RD");
    assert_eq!(snapshot.condition(), "Lluvia");
    assert_eq!(snapshot.temperature_label(), "30°C");
    assert_eq!(snapshot.pressure_label(), "1013 hPa");
}

#[tokio::test]
async fn test_creature_lookup_lowercases() {
    let api = api().await;

    let creature = api.lookup_creature("Pikachu").await.unwrap();
    assert_eq!(creature.types, vec!["electric"]);
    assert_eq!(creature.sprite_url, "https://artwork/25.png");

    let err = api.lookup_creature("missingno").await.unwrap_err();
    assert!(matches!(err, ToolError::Status { status: 404 }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_news_honours_page_size() {
    let base = spawn_upstream().await;
    let mut config = config_for(&base);
    config.news.per_page = 2;

    let news = HttpToolboxApi::new(&config).latest_news().await.unwrap();
    assert_eq!(news.len(), 2);
    assert_eq!(news[0].title(), "Post 1");

    let news = api().await.latest_news().await.unwrap();
    assert_eq!(news.len(), 3);
}

#[tokio::test]
async fn test_malformed_payload_is_transport() {
    let base = spawn_upstream().await;
    let mut config = config_for(&base);
    config.upstream.agify_url = format!("{base}/broken");

    let err = HttpToolboxApi::new(&config)
        .predict_age("robert")
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Payload(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_unreachable_service_is_transport() {
    // Bind and drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config_for(&format!("http://{addr}"));
    let err = HttpToolboxApi::new(&config)
        .predict_gender("John")
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Http(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}
