// ABOUTME: Persists validated ingredients under a recipe with first-write-wins semantics
// ABOUTME: Writes run in request order and stop at the first store failure without rollback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::models::WriteSummary;
use crate::errors::WriteError;
use crate::ingredients::IngredientRecord;
use crate::store::RecipeStore;

/// Writes recipes into the injected store
#[derive(Clone)]
pub struct RecipeWriter {
    store: Arc<dyn RecipeStore>,
}

impl RecipeWriter {
    /// Create a writer over `store`
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Write every ingredient of `recipe`
    ///
    /// Each ingredient becomes one field set only if absent, so an existing
    /// ingredient keeps its first value. Writes are not transactional: if one
    /// fails, earlier ingredients of this call stay written.
    ///
    /// # Errors
    ///
    /// Returns `WriteError` for the first failing ingredient, carrying how many
    /// ingredients this call had already written.
    pub async fn write(
        &self,
        recipe: &str,
        ingredients: &[IngredientRecord],
    ) -> Result<WriteSummary, WriteError> {
        let mut summary = WriteSummary::default();

        for (position, record) in ingredients.iter().enumerate() {
            let encoded = record.encoded_measure();
            let written = self
                .store
                .set_field_if_absent(recipe, &record.name, encoded.as_str())
                .await
                .map_err(|source| {
                    warn!(
                        recipe,
                        ingredient = %record.name,
                        position,
                        written = summary.written,
                        "Recipe write aborted"
                    );
                    WriteError {
                        recipe: recipe.to_owned(),
                        ingredient: record.name.clone(),
                        position,
                        written: summary.written,
                        source,
                    }
                })?;

            if written {
                summary.written += 1;
            } else {
                summary.unchanged += 1;
                debug!(recipe, ingredient = %record.name, "Ingredient already stored, keeping first value");
            }
        }

        info!(
            recipe,
            written = summary.written,
            unchanged = summary.unchanged,
            backend = self.store.backend_name(),
            "Recipe written"
        );
        Ok(summary)
    }
}
