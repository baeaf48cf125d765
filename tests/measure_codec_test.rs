// ABOUTME: Integration tests for the stored measure codec
// ABOUTME: Covers quantity formatting, suffix decoding, and rejection of malformed stored values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_catalog::measure::{decode, encode, format_quantity};
use recipe_catalog::units::UnitToken;

#[test]
fn test_encode_then_decode_preserves_formatted_quantity() {
    for unit in UnitToken::ALL {
        for quantity in [0.0, 0.25, 1.0, 2.5, 12.75, 100.0] {
            let encoded = encode(quantity, unit);
            let decoded = decode(encoded.as_str()).unwrap();

            assert_eq!(decoded.unit, unit, "unit of {encoded}");
            assert_eq!(decoded.quantity, format_quantity(quantity));
        }
    }
}

#[test]
fn test_decode_prefers_longest_suffix() {
    let measure = decode("2tbsp").unwrap();
    assert_eq!(measure.quantity, "2");
    assert_eq!(measure.unit, UnitToken::Tbsp);

    let measure = decode("3tsp").unwrap();
    assert_eq!(measure.quantity, "3");
    assert_eq!(measure.unit, UnitToken::Tsp);
}

#[test]
fn test_rounding_to_two_decimals() {
    assert_eq!(encode(0.333, UnitToken::Cup).as_str(), "0.33cup");
    assert_eq!(encode(1.005_1, UnitToken::Oz).as_str(), "1.01oz");
    assert_eq!(encode(2.999, UnitToken::Lbs).as_str(), "3lbs");
}

#[test]
fn test_decode_rejects_malformed_values() {
    let cases = [
        ("", "no recognized unit suffix"),
        ("salt", "no recognized unit suffix"),
        ("1gallon", "no recognized unit suffix"),
        ("1tbps", "no recognized unit suffix"),
        ("1TSP", "no recognized unit suffix"),
        ("tsp", "missing quantity before unit"),
        ("onetsp", "quantity is not a non-negative decimal number"),
        ("1.2.3cup", "quantity is not a non-negative decimal number"),
        ("-1cup", "quantity is not a non-negative decimal number"),
        ("infcup", "quantity is not a non-negative decimal number"),
        ("1 cup", "quantity is not a non-negative decimal number"),
        ("+1cup", "quantity is not a non-negative decimal number"),
        ("1e3cup", "quantity is not a non-negative decimal number"),
        (".cup", "quantity is not a non-negative decimal number"),
    ];

    for (value, reason) in cases {
        let err = decode(value).unwrap_err();
        assert_eq!(err.value, value);
        assert_eq!(err.reason, reason, "value {value:?}");
    }
}

#[test]
fn test_decode_keeps_stored_text_verbatim() {
    let measure = decode("0.50lbs").unwrap();
    assert_eq!(measure.quantity, "0.50");
    assert_eq!(measure.unit, UnitToken::Lbs);
}
