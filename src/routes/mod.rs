// ABOUTME: Route module organization for the recipe catalog HTTP endpoints
// ABOUTME: Each domain module defines its routes and thin handlers over shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the recipe catalog
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the recipe layer.

/// Health check and readiness routes
pub mod health;
/// Recipe catalog routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
