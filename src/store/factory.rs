// ABOUTME: Store factory for environment-based backend selection
// ABOUTME: Returns a shared trait object so handlers stay backend-agnostic
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{memory::InMemoryRecipeStore, redis::RedisRecipeStore, RecipeStore};
use crate::config::environment::{StoreBackend, StoreConfig};
use crate::errors::AppResult;
use std::sync::Arc;

/// Create the recipe store selected by configuration
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and cannot be reached
pub async fn create_store(config: &StoreConfig) -> AppResult<Arc<dyn RecipeStore>> {
    match config.backend {
        StoreBackend::Redis => {
            let store = RedisRecipeStore::connect(config).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory recipe store; recipes are lost on restart");
            Ok(Arc::new(InMemoryRecipeStore::new()))
        }
    }
}
