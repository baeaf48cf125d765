// ABOUTME: Unified error handling for the recipe catalog
// ABOUTME: Re-exports AppError, error codes, and catalog domain errors from recipe-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types are defined in `recipe-core` and re-exported here so the rest
//! of the crate imports them from `crate::errors`.

pub use recipe_core::errors::*;
