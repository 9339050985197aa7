mod common;

use axum::http::StatusCode;
use common::TestApp;
use mongodb::bson::oid::ObjectId;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn create_item_with_empty_body_returns_generated_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/items", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let id = body["id"].as_str().expect("id should be a string");
    assert_eq!(id.len(), 24);
    assert!(ObjectId::parse_str(id).is_ok());
    assert!(body["name"].is_null());
    assert!(body["description"].is_null());
    assert!(body["price"].is_null());
    assert!(body.get("_id").is_none());

    app.cleanup().await;
}

#[tokio::test]
async fn create_then_get_round_trips_submitted_fields() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let payload = json!({
        "name": "Bamboo toothbrush",
        "description": "Compostable handle",
        "price": 3.99,
        "image": "https://example.com/toothbrush.png",
        "co2": "0.2kg"
    });

    let created: serde_json::Value = client
        .post(format!("{}/items", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let id = created["id"].as_str().expect("id should be a string");

    let response = client
        .get(format!("{}/items/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let fetched: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], payload["name"]);
    assert_eq!(fetched["description"], payload["description"]);
    assert_eq!(fetched["price"], payload["price"]);
    assert_eq!(fetched["image"], payload["image"]);
    assert_eq!(fetched["co2"], payload["co2"]);
    assert!(fetched["createdAt"].is_string());
    assert!(fetched["updatedAt"].is_string());
    assert!(fetched.get("_id").is_none());

    app.cleanup().await;
}

#[tokio::test]
async fn get_with_malformed_id_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/items/not-an-id", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Invalid ID");

    app.cleanup().await;
}

#[tokio::test]
async fn get_with_unknown_id_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/items/{}", app.address, ObjectId::new().to_hex()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Item not found");

    app.cleanup().await;
}

#[tokio::test]
async fn create_with_malformed_body_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/items", app.address))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let message = body["error"].as_str().expect("error should be a string");
    assert!(
        message.starts_with("Failed to add item"),
        "Unexpected error message: {}",
        message
    );

    app.cleanup().await;
}

#[tokio::test]
async fn listing_returns_created_items_with_unique_ids() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let mut created_ids = Vec::new();
    for n in 0..3 {
        let created: serde_json::Value = client
            .post(format!("{}/items", app.address))
            .json(&json!({ "name": format!("Item {}", n) }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse JSON");
        created_ids.push(created["id"].as_str().unwrap().to_string());
    }

    let response = client
        .get(format!("{}/items", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let items: Vec<serde_json::Value> = response.json().await.expect("Failed to parse JSON");
    assert!(items.len() >= 3);

    let listed_ids: Vec<&str> = items
        .iter()
        .map(|item| item["id"].as_str().expect("id should be a string"))
        .collect();

    for id in &created_ids {
        assert_eq!(
            1,
            listed_ids.iter().filter(|listed| *listed == id).count(),
            "Created id {} should appear exactly once",
            id
        );
    }

    for item in &items {
        assert!(item.get("_id").is_none(), "Internal _id key must not leak");
    }

    app.cleanup().await;
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/items", app.address))
        .header("origin", "http://example.com")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        "*",
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("Missing CORS header")
            .to_str()
            .unwrap()
    );

    app.cleanup().await;
}
