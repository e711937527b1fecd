//! HTTP tests for the venue routes, served in-process

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use venuescope_api::{create_router, AppState};
use venuescope_core::config::SearchSettings;
use venuescope_search::VenueService;
use venuescope_store::MemoryVenueStore;

fn app() -> Router {
    let service = VenueService::new(Arc::new(MemoryVenueStore::new()), SearchSettings::default());
    create_router(Arc::new(AppState::new(service, "memory")))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["venues"], 0);
}

#[tokio::test]
async fn test_add_then_get_venue() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/venues/add",
            json!({
                "name": "Leela Palace",
                "type": "weddingHall",
                "latitude": "12.9606",
                "longitude": 77.6484,
                "externalId": "ChIJ-leela"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["venue"]["type"], "weddingHall");
    assert_eq!(body["venue"]["externalId"], "ChIJ-leela");
    assert_eq!(body["venue"]["location"]["type"], "Point");
    assert_eq!(body["venue"]["location"]["coordinates"], json!([77.6484, 12.9606]));

    let id = body["venue"]["id"].as_str().unwrap().to_string();
    let (status, fetched) = send(&app, get(&format!("/api/venues/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Leela Palace");

    let (_, list) = send(&app, get("/api/venues")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_rejects_bad_coordinates() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/venues/add",
            json!({ "name": "Garden", "type": "lawn", "latitude": 28.6, "longitude": "east" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");
    assert!(body["details"].as_str().unwrap().contains("longitude"));

    let (_, list) = send(&app, get("/api/venues")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_duplicate_external_id_conflicts() {
    let app = app();
    let venue = json!({
        "name": "Taj Falaknuma",
        "type": "palace",
        "latitude": 17.3313,
        "longitude": 78.4672,
        "externalId": "ChIJ-falaknuma"
    });

    let (status, _) = send(&app, post_json("/api/venues/add", venue.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post_json("/api/venues/add", venue)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Venue already exists");
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let app = app();

    let (status, _) =
        send(&app, get("/api/venues/6f1c2a8e-4b7d-4c1e-9a53-0d2f6e8b7c41")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/api/venues/not-a-venue")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Venue not found");
}

#[tokio::test]
async fn test_search_orders_by_distance() {
    let app = app();

    for (name, venue_type, lat) in [
        ("Far Hall", "hall", 19.0760 + 0.1),
        ("Near Resort", "Resort", 19.0760 + 0.005),
        ("Mid Hall", "hall", 19.0760 + 0.02),
    ] {
        let (status, _) = send(
            &app,
            post_json(
                "/api/venues/add",
                json!({ "name": name, "type": venue_type, "latitude": lat, "longitude": 72.8777 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        post_json("/api/venues/search", json!({ "latitude": 19.0760, "longitude": "72.8777" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body.as_array().unwrap().iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Near Resort", "Mid Hall", "Far Hall"]);

    let distances: Vec<f64> =
        body.as_array().unwrap().iter().map(|v| v["distanceKm"].as_f64().unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));

    // Category is case-insensitive and radius is in meters
    let (_, body) = send(
        &app,
        post_json(
            "/api/venues/search",
            json!({ "latitude": 19.0760, "longitude": 72.8777, "venueType": "HALL", "radius": 5000 }),
        ),
    )
    .await;
    let names: Vec<&str> = body.as_array().unwrap().iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Mid Hall"]);
}

#[tokio::test]
async fn test_search_requires_coordinates() {
    let app = app();

    let (status, body) =
        send(&app, post_json("/api/venues/search", json!({ "latitude": 19.0760 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("longitude"));

    let (status, _) = send(
        &app,
        post_json("/api/venues/search", json!({ "latitude": 200, "longitude": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_scalar_coordinates_are_invalid_input() {
    let app = app();

    for (field, body) in [
        ("latitude", json!({ "name": "Garden", "type": "lawn", "latitude": true, "longitude": 10 })),
        ("longitude", json!({ "name": "Garden", "type": "lawn", "latitude": 10, "longitude": [72.8] })),
        ("latitude", json!({ "name": "Garden", "type": "lawn", "latitude": { "deg": 19 }, "longitude": 10 })),
    ] {
        let (status, response) = send(&app, post_json("/api/venues/add", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Invalid input");
        assert!(response["details"].as_str().unwrap().contains(field));
    }

    let (status, response) = send(
        &app,
        post_json("/api/venues/search", json!({ "latitude": true, "longitude": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["details"].as_str().unwrap().contains("latitude"));

    let (_, list) = send(&app, get("/api/venues")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_search_radius_as_string() {
    let app = app();

    for (name, lat) in [("Near Hall", 19.0760 + 0.02), ("Far Hall", 19.0760 + 0.1)] {
        send(
            &app,
            post_json(
                "/api/venues/add",
                json!({ "name": name, "type": "hall", "latitude": lat, "longitude": 72.8777 }),
            ),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        post_json(
            "/api/venues/search",
            json!({ "latitude": 19.0760, "longitude": 72.8777, "radius": "5000" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Near Hall");

    let (status, body) = send(
        &app,
        post_json(
            "/api/venues/search",
            json!({ "latitude": 19.0760, "longitude": 72.8777, "radius": "five km" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("radius"));
}

#[tokio::test]
async fn test_unreadable_bodies_get_json_errors() {
    let app = app();

    // Wrong type for a text field
    let (status, body) = send(
        &app,
        post_json(
            "/api/venues/add",
            json!({ "name": 123, "type": "hall", "latitude": 1, "longitude": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].is_string());

    // Not JSON at all
    let request = Request::builder()
        .method("POST")
        .uri("/api/venues/search")
        .header("content-type", "application/json")
        .body(Body::from("{latitude: 19"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    // Missing content type
    let request = Request::builder()
        .method("POST")
        .uri("/api/venues/search")
        .body(Body::from(json!({ "latitude": 1, "longitude": 1 }).to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}
