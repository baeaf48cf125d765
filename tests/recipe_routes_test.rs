// ABOUTME: HTTP tests for the recipe and health routes using tower oneshot requests
// ABOUTME: Covers submission, validation rejection without writes, catalog reads, and error statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{get_catalog, memory_app, post_recipe, resources_with, send, FaultyStore};
use recipe_catalog::server::build_router;
use recipe_catalog::store::{memory::InMemoryRecipeStore, RecipeStore};
use serde_json::json;

#[tokio::test]
async fn test_post_then_get_round_trip() {
    let (app, _store) = memory_app();

    let (status, body) = post_recipe(
        &app,
        &json!({"mealName": "soup", "ingredientsList": [["salt", 1, "tsp"]]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe added!");
    assert_eq!(body["mealName"], "soup");
    assert_eq!(body["written"], 1);

    let (status, body) = get_catalog(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": [{
            "mealName": "soup",
            "ingredientsList": [{
                "ingredientName": "salt",
                "ingredientNumber": "1",
                "ingredientMeasurement": "tsp"
            }]
        }]})
    );
}

#[tokio::test]
async fn test_empty_catalog() {
    let (app, _store) = memory_app();
    let (status, body) = get_catalog(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_unknown_unit_rejected_without_writes() {
    let (app, store) = memory_app();

    let (status, body) = post_recipe(
        &app,
        &json!({
            "mealName": "soup",
            "ingredientsList": [["salt", 1, "tsp"], ["water", 1, "gallon"]]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("gallon"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_bodies_rejected() {
    let (app, store) = memory_app();

    let (status, body) = send(&app, Method::POST, "/api/recipes", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");

    let (status, body) = post_recipe(&app, &json!({"ingredientsList": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");

    let (status, _) = post_recipe(
        &app,
        &json!({"mealName": "soup", "ingredientsList": [["salt", "a lot", "tsp"]]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_empty_ingredient_list_is_accepted() {
    let (app, store) = memory_app();

    let (status, body) =
        post_recipe(&app, &json!({"mealName": "soup", "ingredientsList": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe added!");
    assert_eq!(body["mealName"], "soup");
    assert_eq!(body["written"], 0);
    assert_eq!(body["unchanged"], 0);

    assert!(store.is_empty().await);
    let (status, body) = get_catalog(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_resubmission_is_first_write_wins() {
    let (app, store) = memory_app();

    post_recipe(
        &app,
        &json!({"mealName": "soup", "ingredientsList": [["salt", 1, "tsp"]]}),
    )
    .await;
    let (status, body) = post_recipe(
        &app,
        &json!({"mealName": "soup", "ingredientsList": [["salt", 2, "tbsp"]]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["written"], 0);
    assert_eq!(body["unchanged"], 1);
    assert_eq!(
        store.get_fields("soup").await.unwrap(),
        vec![("salt".to_owned(), "1tsp".to_owned())]
    );
}

#[tokio::test]
async fn test_single_recipe_route() {
    let (app, store) = memory_app();
    store.put_raw("cake", "sugar", "0.5lbs").await;

    let (status, body) = send(&app, Method::GET, "/api/recipes/cake", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["mealName"], "cake");
    assert_eq!(body["data"]["ingredientsList"][0]["ingredientNumber"], "0.5");

    let (status, body) = send(&app, Method::GET, "/api/recipes/pie", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_corrupt_stored_value_is_server_error() {
    let (app, store) = memory_app();
    store.put_raw("legacy", "pepper", "1pinch").await;

    let (status, body) = get_catalog(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "MALFORMED_MEASURE");
}

#[tokio::test]
async fn test_store_write_failure_is_server_error() {
    let inner = InMemoryRecipeStore::new();
    let store: Arc<dyn RecipeStore> = Arc::new(FaultyStore::failing_write_at(inner.clone(), 1));
    let app = build_router(resources_with(store));

    let (status, body) = post_recipe(
        &app,
        &json!({"mealName": "soup", "ingredientsList": [["salt", 1, "tsp"], ["water", 2, "cup"]]}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    assert_eq!(body["error"]["details"]["written"], 1);
    assert!(body["error"]["request_id"].as_str().is_some());
    // First ingredient stays written
    assert_eq!(inner.get_fields("soup").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_and_readiness() {
    let (app, _store) = memory_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "memory");

    let down: Arc<dyn RecipeStore> =
        Arc::new(FaultyStore::failing_reads(InMemoryRecipeStore::new()));
    let app = build_router(resources_with(down));
    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");

    // Liveness does not depend on the store
    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
