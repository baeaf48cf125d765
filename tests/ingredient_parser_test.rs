// ABOUTME: Integration tests for raw ingredient entry validation
// ABOUTME: Verifies fail-fast behavior and the reported position of the first bad entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_catalog::errors::{AppError, ErrorCode, IngredientIssue, ValidationError};
use recipe_catalog::ingredients::parse;
use recipe_catalog::units::UnitToken;
use serde_json::json;

#[test]
fn test_parse_keeps_request_order() {
    let entries = [
        json!(["flour", 2, "cup"]),
        json!(["butter", 0.5, "lbs"]),
        json!(["salt", 1, "tsp"]),
    ];

    let records = parse(&entries).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["flour", "butter", "salt"]);
    assert_eq!(records[1].unit, UnitToken::Lbs);
    assert_eq!(records[1].encoded_measure().as_str(), "0.5lbs");
}

#[test]
fn test_empty_list_parses_to_nothing() {
    assert!(parse(&[]).unwrap().is_empty());
}

#[test]
fn test_first_invalid_entry_is_reported() {
    let entries = [
        json!(["flour", 2, "cup"]),
        json!(["milk", 1, "gallon"]),
        json!(["salt", "lots", "tsp"]),
    ];

    let err = parse(&entries).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidIngredient {
            position: 1,
            issue: IngredientIssue::UnknownUnit("gallon".to_owned()),
        }
    );
    assert_eq!(err.position(), Some(1));
}

#[test]
fn test_zero_quantity_is_accepted() {
    let records = parse(&[json!(["garnish", 0, "oz"])]).unwrap();
    assert_eq!(records[0].encoded_measure().as_str(), "0oz");
}

#[test]
fn test_validation_errors_map_to_client_status() {
    let unknown_unit = parse(&[json!(["salt", 1, "tbps"])]).unwrap_err();
    let app: AppError = unknown_unit.into();
    assert_eq!(app.code, ErrorCode::InvalidInput);
    assert_eq!(app.http_status(), 400);
    assert_eq!(app.context.details["position"], 0);

    let negative = parse(&[json!(["salt", -2, "tsp"])]).unwrap_err();
    let app: AppError = negative.into();
    assert_eq!(app.code, ErrorCode::ValueOutOfRange);
    assert!(app.is_client_error());
}
