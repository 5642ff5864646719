//! End-to-end tests driving the real router: page documents, fallback,
//! availability queries, and the booking flow against an on-disk store.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use site_server::{Config, ServerState, api};

// hash("2099-01-1019:30") % 12 == 5 → bookable for any party size
const OPEN_DATE: &str = "2099-01-10";
const OPEN_TIME: &str = "19:30";

// hash("2099-07-0111:30") % 12 == 11 → full for party sizes with % 3 == 2
const FULL_DATE: &str = "2099-07-01";
const FULL_TIME: &str = "11:30";

fn test_state() -> (tempfile::TempDir, ServerState) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).unwrap();
    (dir, state)
}

fn app(state: &ServerState) -> Router {
    api::build_app().with_state(state.clone())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn booking_payload(date: &str, time: &str, party_size: u8) -> Value {
    json!({
        "name": "Samir Ben Ali",
        "email": "samir@exemple.com",
        "phone": "06 11 22 33 44",
        "date": date,
        "time": time,
        "party_size": party_size,
        "notes": "Allergie arachide"
    })
}

#[tokio::test]
async fn named_routes_render_page_documents() {
    let (_dir, state) = test_state();
    let app = app(&state);

    for (uri, title) in [
        ("/", "Smash it. Love it."),
        ("/menu", "Menu"),
        ("/reservations", "Réserver une table"),
        ("/gallery", "Galerie"),
        ("/about", "Notre histoire"),
        ("/contact", "Nous trouver"),
    ] {
        let (status, document) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "uri {uri}");
        assert_eq!(document["page"]["title"], title, "uri {uri}");
        assert_eq!(document["shell"]["brand"]["name"], "BunLab Smash Club");
        assert_eq!(document["shell"]["nav"].as_array().unwrap().len(), 6);
    }
}

#[tokio::test]
async fn menu_page_lists_all_categories() {
    let (_dir, state) = test_state();
    let (status, document) = get_json(&app(&state), "/menu").await;

    assert_eq!(status, StatusCode::OK);
    let categories = document["page"]["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["name"], "Burgers");
    assert_eq!(categories[0]["items"][0]["price"], "12€");
}

#[tokio::test]
async fn reservations_page_exposes_slots_and_party_sizes() {
    let (_dir, state) = test_state();
    let (status, document) = get_json(&app(&state), "/reservations").await;

    assert_eq!(status, StatusCode::OK);
    let slots = document["page"]["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 22);
    assert_eq!(slots[0], "11:30");
    assert_eq!(slots[21], "22:00");
    assert_eq!(document["page"]["party_sizes"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn unknown_path_renders_not_found_with_home_link() {
    let (_dir, state) = test_state();
    let (status, document) = get_json(&app(&state), "/xyz").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(document["page"]["title"], "404");
    assert_eq!(document["page"]["home"], "/");
}

#[tokio::test]
async fn availability_is_deterministic() {
    let (_dir, state) = test_state();
    let app = app(&state);
    let uri = format!(
        "/api/reservations/availability?date={OPEN_DATE}&time={OPEN_TIME}&party_size=2"
    );

    let (status, first) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get_json(&app, &uri).await;
    assert_eq!(first, second);

    assert_eq!(first["capacity"], 12);
    assert_eq!(first["free_seats"], 5);
    assert_eq!(first["bookable"], true);
}

#[tokio::test]
async fn bookable_submission_confirms_and_appends_one_record() {
    let (_dir, state) = test_state();
    let app = app(&state);

    let (status, outcome) =
        post_json(&app, "/api/reservations", booking_payload(OPEN_DATE, OPEN_TIME, 2)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["status"], "confirmed");
    assert_eq!(outcome["date"], OPEN_DATE);
    assert_eq!(outcome["time"], OPEN_TIME);
    assert_eq!(outcome["party_size"], 2);

    let id = outcome["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

    let stored = state.store.load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].notes.as_deref(), Some("Allergie arachide"));
}

#[tokio::test]
async fn full_slot_submission_is_rejected_without_persisting() {
    let (_dir, state) = test_state();
    let app = app(&state);

    let (status, outcome) =
        post_json(&app, "/api/reservations", booking_payload(FULL_DATE, FULL_TIME, 2)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["status"], "rejected");
    assert!(
        outcome["message"].as_str().unwrap().contains("horaire voisin"),
        "message should invite a neighbouring slot"
    );
    assert!(state.store.load().unwrap().is_empty());
}

#[tokio::test]
async fn missing_required_field_is_refused_with_validation_code() {
    let (_dir, state) = test_state();
    let app = app(&state);

    let mut payload = booking_payload(OPEN_DATE, OPEN_TIME, 2);
    payload["name"] = json!("");
    let (status, body) = post_json(&app, "/api/reservations", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(state.store.load().unwrap().is_empty());
}

#[tokio::test]
async fn health_reports_store_ok() {
    let (_dir, state) = test_state();
    let (status, body) = get_json(&app(&state), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
}
