// ABOUTME: Request and response models for recipe submission and catalog reads
// ABOUTME: JSON field names follow the public API (mealName, ingredientsList, ...)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;
use crate::ingredients::{self, IngredientRecord};
use crate::units::UnitToken;

/// One decoded ingredient of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientView {
    /// Field name in the recipe container
    pub ingredient_name: String,
    /// Quantity text as stored
    pub ingredient_number: String,
    /// Unit token
    pub ingredient_measurement: UnitToken,
}

/// A recipe with its decoded ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    /// Recipe name
    pub meal_name: String,
    /// Ingredients in store order
    pub ingredients_list: Vec<IngredientView>,
}

/// Every recipe in the catalog, in listing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogView {
    /// Recipes
    pub recipes: Vec<RecipeView>,
}

impl CatalogView {
    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Find a recipe by name
    #[must_use]
    pub fn get(&self, meal_name: &str) -> Option<&RecipeView> {
        self.recipes.iter().find(|r| r.meal_name == meal_name)
    }
}

/// `{"data": ...}` envelope for successful reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Payload
    pub data: T,
}

/// Outcome of writing one recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteSummary {
    /// Ingredients newly stored
    pub written: usize,
    /// Ingredients that already existed and kept their first value
    pub unchanged: usize,
}

/// Confirmation body for an accepted recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAdded {
    /// Human-readable confirmation
    pub message: String,
    /// Recipe name
    pub meal_name: String,
    /// Write counts
    #[serde(flatten)]
    pub summary: WriteSummary,
}

/// A validated `POST /api/recipes` body
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSubmission {
    /// Recipe name
    pub meal_name: String,
    /// Validated ingredients, in request order
    pub ingredients: Vec<IngredientRecord>,
}

impl RecipeSubmission {
    /// Validate a decoded JSON body
    ///
    /// Expects `{"mealName": string, "ingredientsList": [[name, quantity, unit], ...]}`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a missing or mistyped field, an empty
    /// ingredient list, or the first invalid ingredient entry.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or_else(|| {
            ValidationError::MalformedBody("expected a JSON object".to_owned())
        })?;

        let meal_name = object
            .get("mealName")
            .ok_or(ValidationError::MissingField("mealName"))?
            .as_str()
            .filter(|name| !name.trim().is_empty())
            .ok_or(ValidationError::InvalidField {
                field: "mealName",
                reason: "must be a non-empty string",
            })?;

        let entries = object
            .get("ingredientsList")
            .ok_or(ValidationError::MissingField("ingredientsList"))?
            .as_array()
            .ok_or(ValidationError::InvalidField {
                field: "ingredientsList",
                reason: "must be an array",
            })?;

        Ok(Self {
            meal_name: meal_name.to_owned(),
            ingredients: ingredients::parse(entries)?,
        })
    }
}
