// ABOUTME: Domain error types for ingredient validation, measure decoding, and store access
// ABOUTME: Each type converts into AppError with the status class the transport reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Error Types
//!
//! - `ValidationError` - malformed or unrecognized request input, always a client error
//! - `MalformedMeasure` / `CorruptRecipe` - persisted values that no longer decode
//! - `StoreError` - the external store failed a read or a write
//! - `WriteError` - a recipe write aborted part-way; earlier ingredients stay persisted

use serde_json::json;
use thiserror::Error;

use super::{AppError, ErrorCode};

/// Why a single raw ingredient entry was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngredientIssue {
    /// Entry is not a `[name, quantity, unit]` array
    #[error("expected a [name, quantity, unit] triple")]
    NotATriple,
    /// Name is missing, not a string, or blank
    #[error("ingredient name must be a non-empty string")]
    InvalidName,
    /// Quantity is not a JSON number
    #[error("quantity must be a number")]
    QuantityNotANumber,
    /// Quantity is negative or not finite
    #[error("quantity must be a finite, non-negative number")]
    QuantityOutOfRange,
    /// Unit is not a string
    #[error("unit must be a string")]
    UnitNotAString,
    /// Unit is not part of the vocabulary
    #[error("unrecognized unit `{0}`")]
    UnknownUnit(String),
}

/// Request input that cannot be turned into a recipe
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not JSON or not an object
    #[error("request body is not a JSON object: {0}")]
    MalformedBody(String),
    /// A top-level field is absent
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// A top-level field has the wrong shape
    #[error("field `{field}` {reason}")]
    InvalidField {
        /// Offending field
        field: &'static str,
        /// What was expected
        reason: &'static str,
    },
    /// An ingredient entry failed validation
    #[error("invalid ingredient at position {position}: {issue}")]
    InvalidIngredient {
        /// Zero-based index into `ingredientsList`
        position: usize,
        /// What was wrong with the entry
        issue: IngredientIssue,
    },
}

impl ValidationError {
    /// Position of the rejected ingredient, if the failure was entry-specific
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidIngredient { position, .. } => Some(*position),
            _ => None,
        }
    }

    const fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedBody(_) => ErrorCode::InvalidFormat,
            Self::MissingField(_) => ErrorCode::MissingRequiredField,
            Self::InvalidIngredient {
                issue: IngredientIssue::QuantityOutOfRange,
                ..
            } => ErrorCode::ValueOutOfRange,
            Self::InvalidField { .. } | Self::InvalidIngredient { .. } => ErrorCode::InvalidInput,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let details = error
            .position()
            .map_or(serde_json::Value::Null, |position| {
                json!({ "position": position })
            });
        Self::new(error.code(), error.to_string()).with_details(details)
    }
}

/// A stored value that does not split into a quantity and a known unit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stored measure `{value}` is malformed: {reason}")]
pub struct MalformedMeasure {
    /// The raw stored value
    pub value: String,
    /// Which decoding rule failed
    pub reason: &'static str,
}

impl MalformedMeasure {
    /// Create a decode failure for `value`
    pub fn new(value: impl Into<String>, reason: &'static str) -> Self {
        Self {
            value: value.into(),
            reason,
        }
    }
}

/// A malformed measure located inside a specific recipe
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("recipe `{recipe}` ingredient `{ingredient}`: {measure}")]
pub struct CorruptRecipe {
    /// Recipe holding the bad field
    pub recipe: String,
    /// Field name of the bad value
    pub ingredient: String,
    /// Underlying decode failure
    #[source]
    pub measure: MalformedMeasure,
}

impl From<MalformedMeasure> for AppError {
    fn from(error: MalformedMeasure) -> Self {
        Self::new(ErrorCode::MalformedMeasure, error.to_string())
    }
}

impl From<CorruptRecipe> for AppError {
    fn from(error: CorruptRecipe) -> Self {
        let resource = format!("{}/{}", error.recipe, error.ingredient);
        Self::new(ErrorCode::MalformedMeasure, error.to_string())
            .with_resource_id(resource)
            .with_source(error)
    }
}

/// The external store failed an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("store {operation} failed for `{target}`: {message}")]
pub struct StoreError {
    /// Store operation (`list`, `get_fields`, `set_field_if_absent`, `ping`)
    pub operation: &'static str,
    /// Key or pattern the operation addressed
    pub target: String,
    /// Error reported by the store client
    pub message: String,
}

impl StoreError {
    /// Create a store failure
    pub fn new(
        operation: &'static str,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            target: target.into(),
            message: message.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

/// A recipe write stopped at the first failing ingredient
///
/// Ingredients before `position` were persisted and are not rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "writing ingredient `{ingredient}` (position {position}) of recipe `{recipe}` failed after {written} new field(s) were stored"
)]
pub struct WriteError {
    /// Recipe being written
    pub recipe: String,
    /// Ingredient whose write failed
    pub ingredient: String,
    /// Zero-based index of the failing ingredient
    pub position: usize,
    /// Fields newly stored before the failure
    pub written: usize,
    /// Store failure
    #[source]
    pub source: StoreError,
}

impl From<WriteError> for AppError {
    fn from(error: WriteError) -> Self {
        let details = json!({
            "position": error.position,
            "ingredient": error.ingredient,
            "written": error.written,
        });
        Self::new(ErrorCode::StorageError, error.to_string())
            .with_resource_id(error.recipe.clone())
            .with_details(details)
            .with_source(error)
    }
}
