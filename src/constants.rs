// ABOUTME: System-wide constants for the recipe catalog
// ABOUTME: Re-exports the shared server, store, and Redis defaults from recipe-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Defaults live in `recipe-core` so every workspace crate agrees on them.

pub use recipe_core::constants::*;
