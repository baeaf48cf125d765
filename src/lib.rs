// ABOUTME: Main library entry point for the recipe catalog service
// ABOUTME: Unit vocabulary, measure codec, ingredient parsing, recipe storage, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Catalog
//!
//! A small HTTP service that stores recipes as per-ingredient entries in a
//! key-value store and serves them back as a catalog.
//!
//! ## Architecture
//!
//! - **Units**: the closed set of measurement tokens (`lbs`, `oz`, `cup`, `tbsp`, `tsp`)
//! - **Measure**: codec between a (quantity, unit) pair and the stored string (`1.5cup`)
//! - **Ingredients**: validation of raw `[name, quantity, unit]` request entries
//! - **Store**: the `RecipeStore` trait with Redis and in-memory backends
//! - **Recipes**: first-write-wins writer, concurrent reader, and pure aggregator
//! - **Routes**: `GET`/`POST /api/recipes`, `GET /api/recipes/:name`, health checks
//!
//! The store is created once at startup and passed explicitly to every
//! component through [`resources::ServerResources`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_catalog::config::environment::ServerConfig;
//! use recipe_catalog::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe catalog configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Shared defaults
pub mod constants;

/// Error types and HTTP error responses
pub mod errors;

/// Validation of raw ingredient entries
pub mod ingredients;

/// Structured logging setup
pub mod logging;

/// Stored measure codec
pub mod measure;

/// Request id and CORS middleware
pub mod middleware;

/// Recipe write, read, and aggregation
pub mod recipes;

/// Shared server resources
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Recipe store trait and backends
pub mod store;

/// Measurement unit vocabulary
pub mod units;
