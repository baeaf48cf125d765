// ABOUTME: Codec between (quantity, unit) pairs and the single string persisted per ingredient
// ABOUTME: Encodes without a separator and decodes by longest unit-suffix match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Measure Codec
//!
//! An ingredient's quantity and unit are stored as one string: the formatted
//! quantity immediately followed by the unit token (`1.5cup`, `2tbsp`).
//!
//! Quantities are formatted with at most two decimal places, with trailing
//! zeros and a trailing decimal point removed, so `1.0` becomes `"1"` and
//! `0.333` becomes `"0.33"`. Decoding strips the longest matching unit token
//! from the end of the value; whatever remains must be a non-negative decimal.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::errors::MalformedMeasure;
use crate::units::UnitToken;

/// Persisted form of a quantity and its unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedMeasure(String);

impl EncodedMeasure {
    /// Borrow the stored string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the stored string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for EncodedMeasure {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A decoded measure
///
/// The quantity stays in its stored textual form so values written by older
/// formatting rules are reported exactly as persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    /// Quantity text preceding the unit
    pub quantity: String,
    /// Unit suffix
    pub unit: UnitToken,
}

/// Format a quantity for storage
///
/// Rounds to two decimal places and drops trailing zeros and a dangling point.
#[must_use]
pub fn format_quantity(quantity: f64) -> String {
    let fixed = format!("{quantity:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Encode a quantity and unit into the persisted measure string
#[must_use]
pub fn encode(quantity: f64, unit: UnitToken) -> EncodedMeasure {
    let mut value = format_quantity(quantity);
    value.push_str(unit.as_str());
    EncodedMeasure(value)
}

/// Split a persisted measure string back into quantity text and unit
///
/// # Errors
///
/// Returns `MalformedMeasure` when no unit token ends the value, or when the
/// text before the unit is empty or not a plain non-negative decimal
/// (digits with at most one `.`).
pub fn decode(value: &str) -> Result<Measure, MalformedMeasure> {
    let (quantity, unit) = UnitToken::ALL
        .into_iter()
        .find_map(|unit| {
            value
                .strip_suffix(unit.as_str())
                .map(|quantity| (quantity, unit))
        })
        .ok_or_else(|| MalformedMeasure::new(value, "no recognized unit suffix"))?;

    if quantity.is_empty() {
        return Err(MalformedMeasure::new(value, "missing quantity before unit"));
    }

    if !is_plain_decimal(quantity) {
        return Err(MalformedMeasure::new(
            value,
            "quantity is not a non-negative decimal number",
        ));
    }

    Ok(Measure {
        quantity: quantity.to_owned(),
        unit,
    })
}

/// Digits with at most one `.` and at least one digit (`1`, `1.5`, `.5`, `2.`)
fn is_plain_decimal(text: &str) -> bool {
    let mut digits = 0_usize;
    let mut dots = 0_usize;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
