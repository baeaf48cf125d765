// ABOUTME: Reads the catalog from the injected store, fetching recipes concurrently
// ABOUTME: Hands fetched fields to the aggregator so decoding stays side-effect free
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::debug;

use super::aggregator::{aggregate, recipe_view};
use super::models::{CatalogView, RecipeView};
use crate::errors::AppResult;
use crate::store::RecipeStore;

/// Catalog read path over the injected store
#[derive(Clone)]
pub struct CatalogReader {
    store: Arc<dyn RecipeStore>,
}

impl CatalogReader {
    /// Create a reader over `store`
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Every stored recipe with its decoded ingredients
    ///
    /// Lists recipe names, then fetches every recipe's fields concurrently
    /// and aggregates them in listing order.
    ///
    /// # Errors
    ///
    /// Returns a storage error if listing or any fetch fails, or a malformed
    /// measure error if any stored value does not decode. No partial catalog
    /// is returned.
    pub async fn fetch_catalog(&self) -> AppResult<CatalogView> {
        let names = self.store.list_recipe_names().await?;

        let fetches = names.iter().map(|name| async move {
            let fields = self.store.get_fields(name).await?;
            Ok::<_, crate::errors::StoreError>((name.clone(), fields))
        });
        let fields_by_name: HashMap<_, _> = try_join_all(fetches).await?.into_iter().collect();

        debug!(recipes = names.len(), "Fetched recipe fields");
        Ok(aggregate(&names, &fields_by_name)?)
    }

    /// One recipe by name, or `None` if it has no stored ingredients
    ///
    /// # Errors
    ///
    /// Returns a storage error if the fetch fails, or a malformed measure error
    /// if a stored value does not decode.
    pub async fn fetch_recipe(&self, name: &str) -> AppResult<Option<RecipeView>> {
        let fields = self.store.get_fields(name).await?;
        if fields.is_empty() {
            return Ok(None);
        }
        Ok(Some(recipe_view(name, &fields)?))
    }
}
