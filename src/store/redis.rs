// ABOUTME: Redis recipe store with one hash per recipe and first-write-wins fields
// ABOUTME: Connection manager with retry on startup, SCAN-based recipe enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecipeFields, RecipeStore};
use crate::config::environment::{RedisConnectionConfig, StoreConfig};
use crate::constants::store::SCAN_BATCH_SIZE;
use crate::errors::{AppError, AppResult, StoreError};
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, RedisError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Redis recipe store
///
/// Each recipe is a Redis hash at `<key_prefix><recipe name>`; ingredient names
/// are hash fields and encoded measures are the values. Uses `ConnectionManager`
/// for automatic reconnection; clones share the same multiplexed connection.
#[derive(Clone)]
pub struct RedisRecipeStore {
    manager: ConnectionManager,
    key_prefix: String,
}

impl RedisRecipeStore {
    /// Connect to Redis using the store configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or every connection attempt fails
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        let conn_config = &config.redis_connection;

        info!(
            "Connecting to Redis at {} (timeout={}s, response_timeout={}s, retries={})",
            config.redacted_redis_url(),
            conn_config.connection_timeout_secs,
            conn_config.response_timeout_secs,
            conn_config.initial_connection_retries
        );

        let client = redis::Client::open(config.redis_url.as_str())
            .map_err(|e| AppError::config_invalid(format!("Invalid Redis URL: {e}")))?;

        let manager = Self::connect_with_retry(&client, conn_config).await?;

        info!("Successfully connected to Redis");

        Ok(Self {
            manager,
            key_prefix: config.key_prefix.clone(),
        })
    }

    /// Connect to Redis with exponential backoff retry on failure
    async fn connect_with_retry(
        client: &redis::Client,
        conn_config: &RedisConnectionConfig,
    ) -> AppResult<ConnectionManager> {
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(Duration::from_secs(conn_config.connection_timeout_secs))
            .set_response_timeout(Duration::from_secs(conn_config.response_timeout_secs))
            .set_number_of_retries(conn_config.reconnection_retries)
            .set_exponent_base(conn_config.retry_exponent_base)
            .set_max_delay(conn_config.max_retry_delay_ms);

        let max_retries = conn_config.initial_connection_retries;
        let max_delay_ms = conn_config.max_retry_delay_ms;
        let mut delay_ms = conn_config.initial_retry_delay_ms;
        let mut last_error: Option<RedisError> = None;

        for attempt in 0..=max_retries {
            match ConnectionManager::new_with_config(client.clone(), manager_config.clone()).await
            {
                Ok(manager) => {
                    if attempt > 0 {
                        info!("Redis connection established after {} retries", attempt);
                    }
                    return Ok(manager);
                }
                Err(e) => {
                    if attempt < max_retries {
                        warn!(
                            "Redis connection attempt {}/{} failed, retrying in {}ms: {}",
                            attempt + 1,
                            max_retries + 1,
                            delay_ms,
                            e
                        );
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        delay_ms = (delay_ms * 2).min(max_delay_ms);
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(AppError::storage(format!(
            "Failed to connect to Redis after {} attempts: {}",
            max_retries + 1,
            last_error.map_or_else(|| "unknown error".to_owned(), |e| e.to_string())
        )))
    }

    /// Full Redis key of a recipe hash
    fn recipe_key(&self, name: &str) -> String {
        format!("{}{}", self.key_prefix, name)
    }

    /// SCAN pattern matching every recipe hash under the prefix
    fn scan_pattern(&self) -> String {
        let mut pattern = escape_glob(&self.key_prefix);
        pattern.push('*');
        pattern
    }

    fn store_error(operation: &'static str, target: &str, e: &RedisError) -> StoreError {
        error!("Redis {} failed for {}: {}", operation, target, e);
        StoreError::new(operation, target, e.to_string())
    }
}

/// Escape Redis glob metacharacters so a prefix matches literally
fn escape_glob(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait::async_trait]
impl RecipeStore for RedisRecipeStore {
    async fn list_recipe_names(&self) -> Result<Vec<String>, StoreError> {
        let pattern = self.scan_pattern();
        let mut conn = self.manager.clone();
        let mut names = Vec::new();

        // Cursor-based SCAN; KEYS would block the server on large keyspaces
        let mut cursor = 0u64;
        loop {
            let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .arg("TYPE")
                .arg("hash")
                .query_async(&mut conn)
                .await
                .map_err(|e| Self::store_error("list", &pattern, &e))?;

            names.extend(
                keys.into_iter()
                    .filter_map(|key| key.strip_prefix(&self.key_prefix).map(str::to_owned)),
            );

            cursor = next_cursor;
            if cursor == 0 {
                break;
            }
        }

        // SCAN order is arbitrary and may repeat keys
        names.sort_unstable();
        names.dedup();
        debug!(count = names.len(), "Listed recipe names");

        Ok(names)
    }

    async fn get_fields(&self, name: &str) -> Result<RecipeFields, StoreError> {
        let key = self.recipe_key(name);
        let mut conn = self.manager.clone();

        conn.hgetall(&key)
            .await
            .map_err(|e| Self::store_error("get_fields", &key, &e))
    }

    async fn set_field_if_absent(
        &self,
        name: &str,
        field: &str,
        value: &str,
    ) -> Result<bool, StoreError> {
        let key = self.recipe_key(name);
        let mut conn = self.manager.clone();

        let written: bool = conn
            .hset_nx(&key, field, value)
            .await
            .map_err(|e| Self::store_error("set_field_if_absent", &key, &e))?;

        debug!(recipe = %name, ingredient = %field, written, "HSETNX");
        Ok(written)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();

        let response: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| Self::store_error("ping", "server", &e))?;

        if response == "PONG" {
            Ok(())
        } else {
            Err(StoreError::new(
                "ping",
                "server",
                format!("unexpected PING response '{response}'"),
            ))
        }
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
