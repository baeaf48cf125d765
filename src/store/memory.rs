// ABOUTME: In-memory recipe store preserving recipe and field insertion order
// ABOUTME: Backs local development and tests without a running Redis
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{RecipeFields, RecipeStore};
use crate::errors::StoreError;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredRecipe {
    name: String,
    fields: RecipeFields,
}

/// In-memory recipe store
///
/// Uses `Arc<RwLock<..>>` so clones share one underlying map. Recipes and
/// their fields are kept in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryRecipeStore {
    recipes: Arc<RwLock<Vec<StoredRecipe>>>,
}

impl InMemoryRecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored recipes
    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    /// Whether no recipe has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }

    /// Store a raw field value, replacing any existing one
    ///
    /// Bypasses first-write-wins; used to seed fixtures and to simulate data
    /// written by older clients.
    pub async fn put_raw(&self, name: &str, field: &str, value: &str) {
        let mut recipes = self.recipes.write().await;
        let index = Self::index_or_insert(&mut recipes, name);
        let fields = &mut recipes[index].fields;
        match fields.iter().position(|(f, _)| f == field) {
            Some(slot) => value.clone_into(&mut fields[slot].1),
            None => fields.push((field.to_owned(), value.to_owned())),
        }
    }

    fn index_or_insert(recipes: &mut Vec<StoredRecipe>, name: &str) -> usize {
        if let Some(index) = recipes.iter().position(|r| r.name == name) {
            return index;
        }
        recipes.push(StoredRecipe {
            name: name.to_owned(),
            fields: Vec::new(),
        });
        recipes.len() - 1
    }
}

#[async_trait::async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn list_recipe_names(&self) -> Result<Vec<String>, StoreError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.iter().map(|r| r.name.clone()).collect())
    }

    async fn get_fields(&self, name: &str) -> Result<RecipeFields, StoreError> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.fields.clone())
            .unwrap_or_default())
    }

    async fn set_field_if_absent(
        &self,
        name: &str,
        field: &str,
        value: &str,
    ) -> Result<bool, StoreError> {
        let mut recipes = self.recipes.write().await;
        let index = Self::index_or_insert(&mut recipes, name);
        let fields = &mut recipes[index].fields;

        if fields.iter().any(|(f, _)| f == field) {
            return Ok(false);
        }
        fields.push((field.to_owned(), value.to_owned()));
        drop(recipes);

        Ok(true)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        // In-memory store is always healthy
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
