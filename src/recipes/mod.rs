// ABOUTME: Recipe write path and read-side aggregation over the recipe store
// ABOUTME: Writer persists validated ingredients; reader and aggregator build the catalog view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes
//!
//! - **models**: request and response shapes (`RecipeSubmission`, `CatalogView`)
//! - **writer**: one first-write-wins store write per ingredient, stopping at the first failure
//! - **aggregator**: pure reconstruction of recipe → ingredients from flat store fields
//! - **reader**: fetches store fields concurrently and hands them to the aggregator

/// Pure aggregation of stored fields into the catalog view
pub mod aggregator;
/// Request/response models
pub mod models;
/// Concurrent catalog reads
pub mod reader;
/// Sequential ingredient writes
pub mod writer;

pub use aggregator::{aggregate, recipe_view};
pub use models::{CatalogView, IngredientView, RecipeSubmission, RecipeView, WriteSummary};
pub use reader::CatalogReader;
pub use writer::RecipeWriter;
