// ABOUTME: Rebuilds recipe views from flat per-recipe store fields
// ABOUTME: Pure function over already-fetched data; one corrupt measure fails the whole view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use super::models::{CatalogView, IngredientView, RecipeView};
use crate::errors::CorruptRecipe;
use crate::measure;
use crate::store::RecipeFields;

/// Build the catalog view for `names`, in that order
///
/// A name with no entry in `fields_by_name` yields a recipe with no
/// ingredients.
///
/// # Errors
///
/// Returns `CorruptRecipe` for the first stored value that does not decode.
pub fn aggregate<S: std::hash::BuildHasher>(
    names: &[String],
    fields_by_name: &HashMap<String, RecipeFields, S>,
) -> Result<CatalogView, CorruptRecipe> {
    let recipes = names
        .iter()
        .map(|name| {
            let fields = fields_by_name.get(name).map_or(&[][..], Vec::as_slice);
            recipe_view(name, fields)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CatalogView { recipes })
}

/// Decode one recipe's fields into its view, keeping field order
///
/// # Errors
///
/// Returns `CorruptRecipe` naming the first ingredient whose value does not decode.
pub fn recipe_view(name: &str, fields: &[(String, String)]) -> Result<RecipeView, CorruptRecipe> {
    let ingredients_list = fields
        .iter()
        .map(|(ingredient, encoded)| {
            measure::decode(encoded)
                .map(|decoded| IngredientView {
                    ingredient_name: ingredient.clone(),
                    ingredient_number: decoded.quantity,
                    ingredient_measurement: decoded.unit,
                })
                .map_err(|measure| CorruptRecipe {
                    recipe: name.to_owned(),
                    ingredient: ingredient.clone(),
                    measure,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecipeView {
        meal_name: name.to_owned(),
        ingredients_list,
    })
}
