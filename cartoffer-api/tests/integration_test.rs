use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cartoffer_api::{app, AppState};
use cartoffer_core::{ResolutionError, StaticSegmentResolver};
use cartoffer_store::InMemoryOfferRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app(resolver: StaticSegmentResolver) -> Router {
    app(AppState::new(
        Arc::new(InMemoryOfferRepository::new()),
        Arc::new(resolver),
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn add_offer(app: &Router, restaurant_id: u64, offer_type: &str, value: u64, segments: &[&str]) -> StatusCode {
    let body = json!({
        "restaurant_id": restaurant_id,
        "offer_type": offer_type,
        "offer_value": value,
        "customer_segment": segments,
    });
    send(app, "POST", "/api/v1/offer", Some(body)).await.0
}

async fn apply_offer(app: &Router, cart_value: u64, user_id: u64, restaurant_id: u64) -> (StatusCode, Value) {
    let body = json!({
        "cart_value": cart_value,
        "user_id": user_id,
        "restaurant_id": restaurant_id,
    });
    send(app, "POST", "/api/v1/cart/apply_offer", Some(body)).await
}

#[tokio::test]
async fn test_valid_offer_flow() {
    let app = test_app(StaticSegmentResolver::new().with_segment(1, "p1"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/offer",
        Some(json!({
            "restaurant_id": 1,
            "offer_type": "FLATX",
            "offer_value": 10,
            "customer_segment": ["p1"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response_msg": "success" }));

    let (status, body) = apply_offer(&app, 200, 1, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "cart_value": 190 }));
}

#[tokio::test]
async fn test_invalid_offer_type_is_rejected() {
    let app = test_app(StaticSegmentResolver::new().with_segment(1, "p1"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/offer",
        Some(json!({
            "restaurant_id": 1,
            "offer_type": "%",
            "offer_value": 10,
            "customer_segment": ["p1"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("%"));

    let (_, body) = apply_offer(&app, 200, 1, 1).await;
    assert_eq!(body["cart_value"], 200);
}

#[tokio::test]
async fn test_scenarios() {
    // (cart, offers, segment) -> expected
    let app = test_app(StaticSegmentResolver::new().with_segment(1, "p1"));
    add_offer(&app, 10, "FLATX", 300, &["p1"]).await;
    assert_eq!(apply_offer(&app, 200, 1, 10).await.1["cart_value"], 0);

    add_offer(&app, 11, "FLATX", 30, &["p1"]).await;
    add_offer(&app, 11, "FLATX", 10, &["p1"]).await;
    assert_eq!(apply_offer(&app, 200, 1, 11).await.1["cart_value"], 170);

    assert_eq!(apply_offer(&app, 200, 1, 12).await.1["cart_value"], 200);

    add_offer(&app, 14, "FLATX", 10, &["p1"]).await;
    assert_eq!(apply_offer(&app, 200, 1, 13).await.1["cart_value"], 200);

    add_offer(&app, 15, "FLATX%", 10, &["p1"]).await;
    assert_eq!(apply_offer(&app, 199, 1, 15).await.1["cart_value"], 179);
}

#[tokio::test]
async fn test_user_without_segment() {
    let app = test_app(StaticSegmentResolver::new().without_segment(1));
    assert_eq!(add_offer(&app, 1, "FLATX", 10, &["p1"]).await, StatusCode::OK);

    let (status, body) = apply_offer(&app, 200, 1, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cart_value"], 200);
}

#[tokio::test]
async fn test_invalid_segment_type() {
    let app = test_app(StaticSegmentResolver::new().with_segment(1, "p4"));
    assert_eq!(add_offer(&app, 1, "FLATX", 10, &["p4"]).await, StatusCode::OK);

    assert_eq!(apply_offer(&app, 200, 1, 1).await.1["cart_value"], 200);
}

#[tokio::test]
async fn test_resolution_failure_is_bad_gateway() {
    let app = test_app(StaticSegmentResolver::new().failing(
        1,
        ResolutionError::Transport("connection refused".to_string()),
    ));
    add_offer(&app, 1, "FLATX", 10, &["p1"]).await;

    let (status, body) = apply_offer(&app, 200, 1, 1).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_list_offers_in_order() {
    let app = test_app(StaticSegmentResolver::new());
    add_offer(&app, 1, "FLATX", 30, &["p1"]).await;
    add_offer(&app, 1, "FLATX%", 5, &["p2", "p9"]).await;
    add_offer(&app, 2, "FLATX", 1, &["p3"]).await;

    let (status, body) = send(&app, "GET", "/api/v1/offers/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let offers = body.as_array().unwrap();
    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0]["offer_type"], "FLATX");
    assert_eq!(offers[0]["offer_value"], 30);
    assert_eq!(offers[1]["offer_type"], "FLATX%");
    assert_eq!(offers[1]["customer_segment"], json!(["p2", "p9"]));

    let (_, body) = send(&app, "GET", "/api/v1/offers/3", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_malformed_requests() {
    let app = test_app(StaticSegmentResolver::new());

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/cart/apply_offer",
        Some(json!({ "cart_value": -5, "user_id": 1, "restaurant_id": 1 })),
    )
    .await;
    assert!(status.is_client_error());

    let (status, _) = send(&app, "POST", "/api/v1/offer", Some(json!({ "offer_type": "FLATX" }))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_health() {
    let app = test_app(StaticSegmentResolver::new());
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
