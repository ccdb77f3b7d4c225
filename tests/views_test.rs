use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pokedex_web::app::PokeApiPort;
use pokedex_web::config::PokeApiConfig;
use pokedex_web::domain::{NamedResource, PokemonPage};
use pokedex_web::error::{PokedexError, Result};
use pokedex_web::server::{create_router, AppState};

/// Mock PokeAPI: serves canned records, or fails every request when `down`.
#[derive(Default)]
struct MockPokeApi {
    records: HashMap<String, Value>,
    page: Vec<String>,
    down: bool,
    requested: Mutex<Vec<String>>,
}

#[async_trait]
impl PokeApiPort for MockPokeApi {
    async fn get_pokemon(&self, id_or_name: &str) -> Result<Value> {
        self.requested.lock().unwrap().push(id_or_name.to_string());
        if self.down {
            return Err(PokedexError::Timeout {
                url: format!("http://mock/pokemon/{}/", id_or_name),
            });
        }
        self.records
            .get(id_or_name)
            .cloned()
            .ok_or_else(|| PokedexError::NotFound(id_or_name.to_string()))
    }

    async fn get_pokemon_page(&self, _limit: u32, _offset: u32) -> Result<PokemonPage> {
        if self.down {
            return Err(PokedexError::UpstreamStatus {
                status: 503,
                url: "http://mock/pokemon/".into(),
            });
        }
        Ok(PokemonPage {
            results: self
                .page
                .iter()
                .map(|name| NamedResource { name: name.clone() })
                .collect(),
        })
    }
}

fn pikachu() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "sprites": {"front_default": "https://example.com/pikachu.png"},
        "height": 4,
        "weight": 60,
        "types": [{"type": {"name": "electric"}}],
        "abilities": [{"ability": {"name": "static"}}],
        "stats": [{"stat": {"name": "hp"}, "base_stat": 35}]
    })
}

fn healthy_api() -> MockPokeApi {
    let mut records = HashMap::new();
    records.insert("25".to_string(), pikachu());
    records.insert("pikachu".to_string(), pikachu());
    records.insert(
        "bulbasaur".to_string(),
        json!({"id": 1, "name": "bulbasaur", "sprites": {"front_default": null}}),
    );
    MockPokeApi {
        records,
        page: vec!["pikachu".into(), "bulbasaur".into(), "missingno".into()],
        ..Default::default()
    }
}

fn router(api: Arc<MockPokeApi>) -> Router {
    let state = AppState::new(api, &PokeApiConfig::default());
    create_router(state, Path::new("static"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_pokemon_list_view() {
    let (status, body) = get(router(Arc::new(healthy_api())), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-template=\"pokemon_list\""));
    assert!(body.contains("PokéDex List"));

    // Sorted by ID, unknown entries dropped
    let bulbasaur = body.find("Bulbasaur").unwrap();
    let pikachu = body.find("Pikachu").unwrap();
    assert!(bulbasaur < pikachu);
    assert!(!body.contains("Missingno"));
}

#[tokio::test]
async fn test_pokemon_list_view_with_api_down() {
    let api = MockPokeApi {
        down: true,
        ..Default::default()
    };
    let (status, body) = get(router(Arc::new(api)), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-template=\"pokemon_list\""));
    assert!(body.contains("class=\"empty\""));
}

#[tokio::test]
async fn test_pokemon_detail_view_with_valid_id() {
    let (status, body) = get(router(Arc::new(healthy_api())), "/25/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-template=\"pokemon_detail\""));
    assert!(body.contains("<title>Pikachu</title>"));
    assert!(body.contains("40 cm"));
    assert!(body.contains("6.0 kg"));
    assert!(body.contains("<li>Electric</li>"));
    assert!(body.contains("<li>Static</li>"));
    assert!(body.contains("<th>Hp</th>"));
    assert!(!body.contains("error-message"));
}

#[tokio::test]
async fn test_pokemon_detail_view_with_invalid_id() {
    let api = Arc::new(MockPokeApi {
        down: true,
        ..Default::default()
    });
    let (status, body) = get(router(api.clone()), "/99999/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-template=\"pokemon_detail\""));
    assert!(body.contains("class=\"error-message\""));
    assert!(body.contains("not found or could not be fetched."));
    assert_eq!(*api.requested.lock().unwrap(), vec!["99999".to_string()]);
}

#[tokio::test]
async fn test_pokemon_detail_view_with_name() {
    let api = Arc::new(healthy_api());
    let (status, body) = get(router(api.clone()), "/PIKACHU/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-template=\"pokemon_detail\""));
    assert!(body.contains("<title>Pikachu</title>"));
    assert_eq!(*api.requested.lock().unwrap(), vec!["pikachu".to_string()]);
}

#[tokio::test]
async fn test_pokemon_detail_view_error_echoes_identifier_as_typed() {
    let api = Arc::new(MockPokeApi {
        down: true,
        ..Default::default()
    });
    let (status, body) = get(router(api.clone()), "/PIKACHU/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"error-message\""));
    assert!(body.contains("PIKACHU"));
    assert!(!body.contains("pikachu"));
    assert_eq!(*api.requested.lock().unwrap(), vec!["pikachu".to_string()]);
}

#[tokio::test]
async fn test_pokemon_detail_view_with_dot_segment() {
    let api = Arc::new(healthy_api());
    let (status, body) = get(router(api.clone()), "/%2E%2E/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Pokémon Not Found</title>"));
    assert!(body.contains("not found or could not be fetched."));
    assert!(!body.contains("Error processing"));
    assert!(api.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_pokemon_detail_view_with_empty_record() {
    let mut api = healthy_api();
    api.records.insert("25".to_string(), json!({}));
    let (status, body) = get(router(Arc::new(api)), "/25/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Pokémon Not Found</title>"));
    assert!(!body.contains("Error processing"));
}

#[tokio::test]
async fn test_pokemon_detail_view_with_incomplete_record() {
    // bulbasaur's canned record only carries list fields
    let (status, body) = get(router(Arc::new(healthy_api())), "/bulbasaur/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Error</title>"));
    assert!(body.contains("Error processing Pokémon data for"));
}

#[tokio::test]
async fn test_detail_without_trailing_slash_redirects() {
    let response = router(Arc::new(healthy_api()))
        .oneshot(Request::builder().uri("/pikachu").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/pikachu/");
}

#[tokio::test]
async fn test_health_and_disabled_metrics() {
    let (status, body) = get(router(Arc::new(healthy_api())), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "pokedex_web");

    let (status, _) = get(router(Arc::new(healthy_api())), "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
