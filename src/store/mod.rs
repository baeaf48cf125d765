// ABOUTME: Recipe store abstraction over the external key-value backend
// ABOUTME: Pluggable backend support (Redis, in-memory) selected by configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Store factory for creating the configured backend
pub mod factory;
/// In-memory store implementation
pub mod memory;
/// Redis store implementation
pub mod redis;

use crate::errors::StoreError;

/// Field/value pairs of one recipe, in the order the store returned them
pub type RecipeFields = Vec<(String, String)>;

/// Store operations the recipe core needs
///
/// Each recipe is one container keyed by recipe name, holding ingredient
/// names as fields and encoded measures as values. Implementations own
/// connection handling, timeouts, and reconnection; callers only propagate
/// the reported failure.
///
/// # Examples
///
/// ```rust,no_run
/// use recipe_catalog::store::{memory::InMemoryRecipeStore, RecipeStore};
/// # async fn example() -> Result<(), recipe_catalog::errors::StoreError> {
/// let store = InMemoryRecipeStore::new();
///
/// assert!(store.set_field_if_absent("soup", "salt", "1tsp").await?);
/// // Second write to the same field is a no-op
/// assert!(!store.set_field_if_absent("soup", "salt", "2tsp").await?);
///
/// let fields = store.get_fields("soup").await?;
/// assert_eq!(fields, vec![("salt".to_owned(), "1tsp".to_owned())]);
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    /// Names of every stored recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot enumerate its recipes
    async fn list_recipe_names(&self) -> Result<Vec<String>, StoreError>;

    /// All ingredient fields of one recipe; empty when the recipe is unknown
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    async fn get_fields(&self, name: &str) -> Result<RecipeFields, StoreError>;

    /// Write `value` under `field` unless the field already exists
    ///
    /// Returns `true` when the field was written and `false` when it was
    /// already present (the existing value is left untouched).
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    async fn set_field_if_absent(
        &self,
        name: &str,
        field: &str,
        value: &str,
    ) -> Result<bool, StoreError>;

    /// Verify the backend is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend does not answer
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Short backend label for logs and readiness output
    fn backend_name(&self) -> &'static str;
}
