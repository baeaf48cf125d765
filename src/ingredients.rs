// ABOUTME: Validation of raw [name, quantity, unit] ingredient entries from request payloads
// ABOUTME: Fails fast on the first bad entry and never yields a partial ingredient list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use tracing::debug;

use crate::errors::{IngredientIssue, ValidationError};
use crate::measure::{self, EncodedMeasure};
use crate::units::UnitToken;

/// A validated ingredient ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRecord {
    /// Ingredient name, used as the field key inside the recipe
    pub name: String,
    /// Non-negative quantity
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: UnitToken,
}

impl IngredientRecord {
    /// Persisted form of this ingredient's quantity and unit
    #[must_use]
    pub fn encoded_measure(&self) -> EncodedMeasure {
        measure::encode(self.quantity, self.unit)
    }
}

/// Validate raw ingredient entries in order
///
/// Each entry must be a `[name, quantity, unit]` array. Parsing stops at the
/// first invalid entry.
///
/// # Errors
///
/// Returns `ValidationError::InvalidIngredient` carrying the zero-based
/// position of the first rejected entry.
pub fn parse(raw_entries: &[Value]) -> Result<Vec<IngredientRecord>, ValidationError> {
    raw_entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            parse_entry(entry).map_err(|issue| {
                debug!(position, %issue, "Rejected ingredient entry");
                ValidationError::InvalidIngredient { position, issue }
            })
        })
        .collect()
}

fn parse_entry(entry: &Value) -> Result<IngredientRecord, IngredientIssue> {
    let Some([name, quantity, unit]) = entry.as_array().map(Vec::as_slice) else {
        return Err(IngredientIssue::NotATriple);
    };

    let name = name
        .as_str()
        .filter(|n| !n.trim().is_empty())
        .ok_or(IngredientIssue::InvalidName)?;

    let quantity = quantity
        .as_f64()
        .ok_or(IngredientIssue::QuantityNotANumber)?;
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(IngredientIssue::QuantityOutOfRange);
    }

    let token = unit.as_str().ok_or(IngredientIssue::UnitNotAString)?;
    let unit =
        UnitToken::parse(token).ok_or_else(|| IngredientIssue::UnknownUnit(token.to_owned()))?;

    debug!(ingredient = %name, quantity, unit = %unit, "Parsed ingredient");

    Ok(IngredientRecord {
        name: name.to_owned(),
        quantity,
        unit,
    })
}
