//! End-to-end smoke tests for the full fastnomadsd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use fastnomads_adapter_http_axum::router;
use fastnomads_adapter_http_axum::state::AppState;
use fastnomads_adapter_storage_sqlite_sqlx::{Config, SqlitePlaceRepository};
use fastnomads_app::services::place_service::PlaceService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
        log_statements: false,
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqlitePlaceRepository::new(db.pool().clone());
    router::build(AppState::new(PlaceService::new(repo)))
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn create(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/places/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn place(name: &str, lat: f64, lng: f64) -> Value {
    json!({
        "name": name,
        "description": format!("{name}, good for a long session"),
        "coffee": true,
        "wifi": true,
        "food": false,
        "lat": lat,
        "lng": lng
    })
}

/// Strip the generated id so a stored record can be compared to its payload.
fn without_id(mut value: Value) -> Value {
    value.as_object_mut().unwrap().remove("id");
    value
}

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_molto_bene_at_root() {
    let app = app().await;
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Molto Bene!"}));
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_assign_positive_unused_ids_on_create() {
    let app = app().await;

    let (status, first) = send(&app, create(&place("Cafe A", 1.0, 2.0))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, create(&place("Cafe B", 3.0, 4.0))).await;

    let first_id = first["id"].as_i64().unwrap();
    let second_id = second["id"].as_i64().unwrap();
    assert!(first_id > 0);
    assert!(second_id > 0);
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn should_fetch_created_place_field_for_field() {
    let app = app().await;
    let payload = place("Heim Café", 38.7105, -9.1467);

    let (_, created) = send(&app, create(&payload)).await;
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, get(&format!("/place/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);
    assert_eq!(without_id(fetched), payload);
}

#[tokio::test]
async fn should_keep_missing_description_as_null() {
    let app = app().await;
    let payload = json!({
        "name": "Bench by the river",
        "coffee": false,
        "wifi": false,
        "food": false,
        "lat": 0.5,
        "lng": 0.25
    });

    let (_, created) = send(&app, create(&payload)).await;
    assert!(created["description"].is_null());
}

#[tokio::test]
async fn should_return_null_for_unknown_id_on_empty_table() {
    let app = app().await;
    let (status, body) = send(&app, get("/place/99999")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn should_list_exactly_the_created_places() {
    let app = app().await;
    let payloads = vec![
        place("One", 1.0, 1.0),
        place("Two", 2.0, 2.0),
        place("Three", 3.0, 3.0),
    ];
    for payload in &payloads {
        send(&app, create(payload)).await;
    }

    let (status, body) = send(&app, get("/places/")).await;
    assert_eq!(status, StatusCode::OK);

    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), payloads.len());
    for payload in &payloads {
        assert!(
            listed.iter().any(|p| without_id(p.clone()) == *payload),
            "missing {payload}"
        );
    }
}

#[tokio::test]
async fn should_reject_missing_required_field_without_persisting() {
    let app = app().await;
    let mut payload = place("No coffee flag", 1.0, 1.0);
    payload.as_object_mut().unwrap().remove("coffee");

    let (status, _) = send(&app, create(&payload)).await;
    assert!(status.is_client_error());

    let (_, body) = send(&app, get("/places/")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_reject_overlong_name_without_persisting() {
    let app = app().await;
    let payload = place(&"n".repeat(51), 1.0, 1.0);

    let (status, body) = send(&app, create(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, body) = send(&app, get("/places/")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_ignore_caller_supplied_id() {
    let app = app().await;
    let mut payload = place("Sneaky", 1.0, 1.0);
    payload["id"] = json!(424_242);

    let (status, created) = send(&app, create(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(created["id"], 424_242);
}
