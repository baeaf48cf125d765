// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports environment-driven server, store, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the recipe catalog server
//!
//! - **Environment**: server, store backend, Redis connection, and CORS settings
//!   read from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, Environment, RedisConnectionConfig, ServerConfig, StoreBackend, StoreConfig,
};
