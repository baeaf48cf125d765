// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Server, store, and Redis connection defaults shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// HTTP server defaults
pub mod server {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 18_080;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
    /// Prefix for generated request ids
    pub const REQUEST_ID_PREFIX: &str = "req_";
}

/// Recipe store defaults
pub mod store {
    /// Default Redis connection URL
    pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
    /// Key prefix namespacing recipe hashes in a shared Redis instance
    pub const DEFAULT_KEY_PREFIX: &str = "recipe:";
    /// Keys fetched per SCAN iteration
    pub const SCAN_BATCH_SIZE: usize = 100;
}

/// Redis connection configuration defaults
pub mod redis {
    /// Redis connection timeout in seconds
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;
    /// Redis response timeout in seconds
    pub const RESPONSE_TIMEOUT_SECS: u64 = 5;
    /// Number of reconnection retries
    pub const RECONNECTION_RETRIES: usize = 5;
    /// Exponential backoff base for retry delays
    pub const RETRY_EXPONENT_BASE: u64 = 2;
    /// Maximum retry delay in milliseconds
    pub const MAX_RETRY_DELAY_MS: u64 = 30_000;
    /// Initial connection retry count
    pub const INITIAL_CONNECTION_RETRIES: u32 = 3;
    /// Initial retry delay in milliseconds (doubles with exponential backoff)
    pub const INITIAL_RETRY_DELAY_MS: u64 = 500;
}

/// Service names for structured logging
pub mod service_names {
    /// Recipe catalog HTTP server
    pub const RECIPE_CATALOG_SERVER: &str = "recipe-catalog-server";
}
