// ABOUTME: Closed vocabulary of measurement-unit tokens accepted for recipe ingredients
// ABOUTME: Single canonical list shared by request validation and stored-measure decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Measurement unit attached to an ingredient quantity
///
/// Membership in this set is the only validity rule: tokens are matched
/// byte-for-byte, with no case folding and no synonyms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitToken {
    /// Pounds
    Lbs,
    /// Ounces
    Oz,
    /// US cups
    Cup,
    /// Tablespoons
    Tbsp,
    /// Teaspoons
    Tsp,
}

impl UnitToken {
    /// Every unit, longest token first.
    ///
    /// Suffix decoding walks this slice in order, so a shorter token can never
    /// match inside the tail of a longer one.
    pub const ALL: [Self; 5] = [Self::Tbsp, Self::Lbs, Self::Cup, Self::Tsp, Self::Oz];

    /// Wire and storage spelling of the unit
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lbs => "lbs",
            Self::Oz => "oz",
            Self::Cup => "cup",
            Self::Tbsp => "tbsp",
            Self::Tsp => "tsp",
        }
    }

    /// Look up a token in the vocabulary
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == token)
    }
}

impl Display for UnitToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Whether `token` is a recognized unit
#[must_use]
pub fn is_unit(token: &str) -> bool {
    UnitToken::parse(token).is_some()
}
