// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory resources, a fault-injecting store, and HTTP request helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_catalog`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use recipe_catalog::{
    config::environment::{ServerConfig, StoreConfig},
    errors::StoreError,
    resources::ServerResources,
    server::build_router,
    store::{memory::InMemoryRecipeStore, RecipeFields, RecipeStore},
};
use serde_json::Value;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration pointing at the in-memory backend
pub fn memory_config() -> ServerConfig {
    ServerConfig {
        store: StoreConfig::memory(),
        ..ServerConfig::default()
    }
}

/// Resources over `store`
pub fn resources_with(store: Arc<dyn RecipeStore>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(store, Arc::new(memory_config())))
}

/// Router over a fresh in-memory store, plus a handle to inspect that store
pub fn memory_app() -> (Router, InMemoryRecipeStore) {
    let store = InMemoryRecipeStore::new();
    let router = build_router(resources_with(Arc::new(store.clone())));
    (router, store)
}

/// Send a request and return the status and JSON body (`Null` when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// `POST /api/recipes` with a JSON value
pub async fn post_recipe(app: &Router, body: &Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/recipes", Some(&body.to_string())).await
}

/// `GET /api/recipes`
pub async fn get_catalog(app: &Router) -> (StatusCode, Value) {
    send(app, Method::GET, "/api/recipes", None).await
}

/// Store wrapper that fails selected operations
///
/// Writes succeed until `fail_write_at` writes have been attempted; that
/// write and every later one fail. Reads and health checks fail when
/// `fail_reads` is set.
pub struct FaultyStore {
    inner: InMemoryRecipeStore,
    fail_write_at: Option<usize>,
    fail_reads: bool,
    write_attempts: AtomicUsize,
}

impl FaultyStore {
    /// Fail the write with zero-based index `index` and all after it
    pub fn failing_write_at(inner: InMemoryRecipeStore, index: usize) -> Self {
        Self {
            inner,
            fail_write_at: Some(index),
            fail_reads: false,
            write_attempts: AtomicUsize::new(0),
        }
    }

    /// Fail every read and health check
    pub fn failing_reads(inner: InMemoryRecipeStore) -> Self {
        Self {
            inner,
            fail_write_at: None,
            fail_reads: true,
            write_attempts: AtomicUsize::new(0),
        }
    }

    /// Number of writes attempted so far
    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    fn read_guard(&self, operation: &'static str, target: &str) -> Result<(), StoreError> {
        if self.fail_reads {
            Err(StoreError::new(operation, target, "connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecipeStore for FaultyStore {
    async fn list_recipe_names(&self) -> Result<Vec<String>, StoreError> {
        self.read_guard("list", "recipes")?;
        self.inner.list_recipe_names().await
    }

    async fn get_fields(&self, name: &str) -> Result<RecipeFields, StoreError> {
        self.read_guard("get_fields", name)?;
        self.inner.get_fields(name).await
    }

    async fn set_field_if_absent(
        &self,
        name: &str,
        field: &str,
        value: &str,
    ) -> Result<bool, StoreError> {
        let attempt = self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_write_at.is_some_and(|at| attempt >= at) {
            return Err(StoreError::new(
                "set_field_if_absent",
                name,
                "connection reset by peer",
            ));
        }
        self.inner.set_field_if_absent(name, field, value).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.read_guard("ping", "server")
    }

    fn backend_name(&self) -> &'static str {
        "faulty"
    }
}
