// ABOUTME: HTTP tests for the order form pages, JSON API, and health endpoints
// ABOUTME: Drives the full router with in-memory SQLite and a mock nutrition provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;
mod helpers;

use common::{resources_with_stores, sqlite_resources, CountingCatalogStore, RecordingOrderStore};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use smoothie_order_server::external::{MockNutritionProvider, MockReply};
use smoothie_order_server::resources::ServerResources;
use smoothie_order_server::server::build_router;
use std::sync::Arc;

fn provider() -> Arc<MockNutritionProvider> {
    Arc::new(
        MockNutritionProvider::new()
            .with_reply(
                "banana",
                MockReply::Json(json!({"name": "Banana", "nutritions": {"carbohydrates": 22}})),
            )
            .with_reply(
                "lime",
                MockReply::Raw {
                    status: 200,
                    body: "<html>oops</html>".to_owned(),
                },
            ),
    )
}

async fn pending_count(resources: &ServerResources) -> usize {
    resources.orders.list_pending_orders().await.unwrap().len()
}

// ============================================================================
// HTML form
// ============================================================================

#[tokio::test]
async fn test_form_lists_catalog_and_prompts_for_selection() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::get("/").send(build_router(resources)).await;

    assert_eq!(response.status(), 200);
    let html = response.text();
    assert!(html.contains("Name on Smoothie:"));
    assert!(html.contains("Choose up to 5 ingredients:"));
    assert!(html.contains(r#"<option value="Watermelon">Watermelon</option>"#));
    assert_eq!(html.matches(r#"<option value="Kiwi""#).count(), 1);
    assert!(html.contains("Select one or more fruits"));
}

#[tokio::test]
async fn test_form_echoes_name_and_shows_nutrition_with_warnings() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::get("/?name=Alice&ingredients=Banana&ingredients=Lime")
        .send(build_router(resources.clone()))
        .await;

    assert_eq!(response.status(), 200);
    let html = response.text();
    assert!(html.contains("The name on your Smoothie will be: Alice"));
    assert!(html.contains(r#"<option value="Banana" selected>"#));
    assert!(html.contains("Banana Nutrition Information"));
    assert!(html.contains("<th>nutritions.carbohydrates</th>"));
    assert!(html.contains("Nutrition data for Lime is unavailable"));
    assert!(html.contains("&lt;html&gt;oops&lt;/html&gt;"));
    assert_eq!(pending_count(&resources).await, 0);
}

#[tokio::test]
async fn test_form_rejects_more_than_five_ingredients() {
    let resources = sqlite_resources(provider()).await;
    let query = "/?ingredients=Apples&ingredients=Banana&ingredients=Kiwi&ingredients=Lime&ingredients=Mango&ingredients=Papaya";

    let response = AxumTestRequest::get(query).send(build_router(resources)).await;

    assert_eq!(response.status(), 200);
    assert!(response
        .text()
        .contains("At most 5 ingredients may be chosen, got 6."));
}

#[tokio::test]
async fn test_form_post_submits_order() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::post("/")
        .form("name=Alice&ingredients=Banana&ingredients=Kiwi&submit=1")
        .send(build_router(resources.clone()))
        .await;

    assert_eq!(response.status(), 200);
    assert!(response.text().contains("Your Smoothie is ordered, Alice!"));

    let pending = resources.orders.list_pending_orders().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].ingredients, "Banana, Kiwi");
}

#[tokio::test]
async fn test_form_post_without_name_blocks_submit() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::post("/")
        .form("name=&ingredients=Banana&submit=1")
        .send(build_router(resources.clone()))
        .await;

    assert_eq!(response.status(), 200);
    assert!(response
        .text()
        .contains("Please enter a name for your Smoothie before submitting."));
    assert_eq!(pending_count(&resources).await, 0);
}

#[tokio::test]
async fn test_form_post_rejects_fruit_outside_catalog() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::post("/")
        .form("name=Eve&ingredients=%3Cscript%3E&submit=1")
        .send(build_router(resources.clone()))
        .await;

    assert_eq!(response.status(), 200);
    let html = response.text();
    assert!(html.contains(r#"<div class="banner warning">&lt;script&gt; is not on the menu.</div>"#));
    assert!(!html.contains("<script>"));
    assert_eq!(pending_count(&resources).await, 0);
}

#[tokio::test]
async fn test_form_post_rejects_repeated_fruit() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::post("/")
        .form("name=Eve&ingredients=Kiwi&ingredients=Kiwi&submit=1")
        .send(build_router(resources.clone()))
        .await;

    assert_eq!(response.status(), 200);
    assert!(response.text().contains("Kiwi was chosen more than once."));
    assert_eq!(pending_count(&resources).await, 0);
}

#[tokio::test]
async fn test_form_offers_nutrition_preview_without_submitting() {
    let resources = sqlite_resources(provider()).await;
    let router = build_router(resources.clone());

    let form = AxumTestRequest::get("/").send(router.clone()).await.text();
    assert!(form.contains(
        r#"<button type="submit" formmethod="get" formaction="/">Show Nutrition</button>"#
    ));

    // The preview button sends the same widgets as a GET
    let preview = AxumTestRequest::get("/?name=Alice&ingredients=Banana")
        .send(router)
        .await;

    assert_eq!(preview.status(), 200);
    assert!(preview.text().contains("Banana Nutrition Information"));
    assert_eq!(pending_count(&resources).await, 0);
}

#[tokio::test]
async fn test_form_post_store_failure_shows_error_banner() {
    let resources = resources_with_stores(
        Arc::new(CountingCatalogStore::new(common::sample_catalog())),
        Arc::new(RecordingOrderStore::failing()),
        provider(),
    )
    .await;

    let response = AxumTestRequest::post("/")
        .form("name=Alice&ingredients=Banana&submit=1")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let html = response.text();
    assert!(html.contains(r#"class="banner error""#));
    assert!(html.contains("database is locked"));
}

#[tokio::test]
async fn test_catalog_unavailable_renders_503() {
    let resources = resources_with_stores(
        Arc::new(CountingCatalogStore::failing()),
        Arc::new(RecordingOrderStore::new()),
        provider(),
    )
    .await;

    let response = AxumTestRequest::get("/").send(build_router(resources)).await;

    assert_eq!(response.status(), 503);
    assert!(response.text().contains("Fruit catalog unavailable"));
}

#[tokio::test]
async fn test_pending_orders_page() {
    let resources = sqlite_resources(provider()).await;
    let router = build_router(resources.clone());

    let empty = AxumTestRequest::get("/orders/pending")
        .send(router.clone())
        .await;
    assert!(empty.text().contains("no pending orders"));

    resources
        .submitter
        .submit("Alice", &["Mango".to_owned()])
        .await
        .unwrap();

    let listed = AxumTestRequest::get("/orders/pending").send(router).await;
    let html = listed.text();
    assert!(html.contains("<td>Alice</td>"));
    assert!(html.contains("<td>Mango</td>"));
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_fruit_options() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::get("/api/fruit-options")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["fruit_options"][0]["name"], "Apples");
    assert_eq!(body["fruit_options"][0]["lookup_key"], "Apple");
}

#[tokio::test]
async fn test_api_create_order() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::post("/api/orders")
        .json(&json!({"name": "Alice", "ingredients": ["Banana"]}))
        .send(build_router(resources.clone()))
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["name_on_order"], "Alice");
    assert_eq!(body["ingredients"], "Banana");
    assert_eq!(body["message"], "Your Smoothie is ordered, Alice!");
    assert_eq!(pending_count(&resources).await, 1);
}

#[tokio::test]
async fn test_api_create_order_validation_errors() {
    let resources = sqlite_resources(provider()).await;
    let router = build_router(resources.clone());

    let missing_name = AxumTestRequest::post("/api/orders")
        .json(&json!({"name": "", "ingredients": ["Banana"]}))
        .send(router.clone())
        .await;
    assert_eq!(missing_name.status(), 400);
    let body: Value = missing_name.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["message"], "name required");

    let too_many = AxumTestRequest::post("/api/orders")
        .json(&json!({
            "name": "Alice",
            "ingredients": ["Apples", "Banana", "Kiwi", "Lime", "Mango", "Papaya"]
        }))
        .send(router)
        .await;
    assert_eq!(too_many.status(), 400);
    let body: Value = too_many.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");

    assert_eq!(pending_count(&resources).await, 0);
}

#[tokio::test]
async fn test_api_nutrition_returns_results_and_warnings() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::post("/api/nutrition")
        .json(&json!({"ingredients": ["Banana", "Lime"]}))
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["results"][0]["fruit_name"], "Banana");
    assert_eq!(body["results"][0]["table"]["rows"][0].as_array().unwrap().len(), 2);
    assert_eq!(body["results"][1]["payload"], Value::Null);
    assert_eq!(body["warnings"][0]["kind"], "nutrition_service_error");
    assert_eq!(body["warnings"][0]["fruit"], "Lime");
    assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_api_nutrition_rejects_fruit_outside_catalog() {
    let resources = sqlite_resources(provider()).await;

    let response = AxumTestRequest::post("/api/nutrition")
        .json(&json!({"ingredients": ["Banana", "Durian"]}))
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["message"], "Durian is not on the menu");
}

#[tokio::test]
async fn test_api_create_order_rejects_unknown_and_repeated_fruits() {
    let resources = sqlite_resources(provider()).await;
    let router = build_router(resources.clone());

    let unknown = AxumTestRequest::post("/api/orders")
        .json(&json!({"name": "Mallory", "ingredients": ["Not A Fruit", "Kiwi"]}))
        .send(router.clone())
        .await;
    assert_eq!(unknown.status(), 400);
    let body: Value = unknown.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["message"], "Not A Fruit is not on the menu");

    let repeated = AxumTestRequest::post("/api/orders")
        .json(&json!({"name": "Mallory", "ingredients": ["Kiwi", "Lime", "Kiwi"]}))
        .send(router)
        .await;
    assert_eq!(repeated.status(), 400);
    let body: Value = repeated.json();
    assert_eq!(body["error"]["message"], "Kiwi was chosen more than once");

    assert_eq!(pending_count(&resources).await, 0);
}

#[tokio::test]
async fn test_api_invalidate_catalog_reloads() {
    let catalog = Arc::new(CountingCatalogStore::new(common::sample_catalog()));
    let resources = resources_with_stores(
        catalog.clone(),
        Arc::new(RecordingOrderStore::new()),
        provider(),
    )
    .await;
    let router = build_router(resources);

    AxumTestRequest::get("/api/fruit-options").send(router.clone()).await;
    AxumTestRequest::get("/api/fruit-options").send(router.clone()).await;
    assert_eq!(catalog.loads(), 1);

    let response = AxumTestRequest::post("/api/catalog/invalidate")
        .send(router.clone())
        .await;
    assert_eq!(response.status(), 200);

    AxumTestRequest::get("/api/fruit-options").send(router).await;
    assert_eq!(catalog.loads(), 2);
}

#[tokio::test]
async fn test_api_pending_orders() {
    let resources = sqlite_resources(provider()).await;
    resources
        .submitter
        .submit("Alice", &["Kiwi".to_owned()])
        .await
        .unwrap();

    let response = AxumTestRequest::get("/api/orders/pending")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["orders"][0]["name_on_order"], "Alice");
    assert_eq!(body["orders"][0]["order_filled"], false);
}

// ============================================================================
// Health and middleware
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let resources = sqlite_resources(provider()).await;
    let router = build_router(resources);

    let health = AxumTestRequest::get("/health").send(router.clone()).await;
    assert_eq!(health.status(), 200);
    let body: Value = health.json();
    assert_eq!(body["status"], "healthy");

    let ready = AxumTestRequest::get("/ready").send(router).await;
    assert_eq!(ready.status(), 200);
    let body: Value = ready.json();
    assert_eq!(body["checks"]["database"], "ok");
}

#[tokio::test]
async fn test_request_id_propagated() {
    let resources = sqlite_resources(provider()).await;

    let generated = AxumTestRequest::get("/health")
        .send(build_router(resources.clone()))
        .await;
    assert!(generated.header("x-request-id").is_some());
    assert_eq!(generated.header("x-content-type-options").as_deref(), Some("nosniff"));

    let supplied = AxumTestRequest::get("/health")
        .header("x-request-id", "order-123")
        .send(build_router(resources))
        .await;
    assert_eq!(supplied.header("x-request-id").as_deref(), Some("order-123"));
}
