// ABOUTME: Route handlers for the recipe catalog REST API
// ABOUTME: Lists the catalog, reads a single recipe, and accepts new recipe submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! - `GET /api/recipes` returns every recipe with decoded ingredients
//! - `GET /api/recipes/:name` returns one recipe
//! - `POST /api/recipes` validates a submission and writes it
//!
//! A submission is validated in full before the first store write, so a
//! rejected request leaves the store untouched.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use tracing::{debug, info};

use crate::errors::{AppError, ValidationError};
use crate::middleware::RequestId;
use crate::recipes::models::{DataResponse, RecipeAdded, RecipeSubmission};
use crate::resources::ServerResources;

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recipes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/recipes/:name", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/recipes - List every recipe
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
    ) -> Result<Response, AppError> {
        let catalog = resources
            .reader
            .fetch_catalog()
            .await
            .map_err(|e| tag_request(e, request_id.as_ref()))?;

        debug!(recipes = catalog.len(), "Catalog served");
        Ok((StatusCode::OK, Json(DataResponse { data: catalog })).into_response())
    }

    /// Handle GET /api/recipes/:name - Read one recipe
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        Path(name): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = resources
            .reader
            .fetch_recipe(&name)
            .await
            .and_then(|recipe| recipe.ok_or_else(|| AppError::not_found(format!("Recipe {name}"))))
            .map_err(|e| tag_request(e, request_id.as_ref()))?;

        Ok((StatusCode::OK, Json(DataResponse { data: recipe })).into_response())
    }

    /// Handle POST /api/recipes - Validate and store a recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let submission = serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| ValidationError::MalformedBody(e.to_string()))
            .and_then(|value| RecipeSubmission::from_json(&value))
            .map_err(|e| tag_request(e.into(), request_id.as_ref()))?;

        let summary = resources
            .writer
            .write(&submission.meal_name, &submission.ingredients)
            .await
            .map_err(|e| tag_request(e.into(), request_id.as_ref()))?;

        info!(
            recipe = %submission.meal_name,
            written = summary.written,
            unchanged = summary.unchanged,
            "Recipe added"
        );

        let response = RecipeAdded {
            message: "Recipe added!".to_owned(),
            meal_name: submission.meal_name,
            summary,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

/// Attach the request's correlation id to an error response
fn tag_request(error: AppError, request_id: Option<&Extension<RequestId>>) -> AppError {
    match request_id {
        Some(Extension(id)) => error.with_request_id(id.as_str()),
        None => error,
    }
}
