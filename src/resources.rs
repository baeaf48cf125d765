// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Wires the injected recipe store into the writer and reader once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::recipes::{CatalogReader, RecipeWriter};
use crate::store::RecipeStore;

/// Dependencies shared by all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Recipe store every component reads from and writes to
    pub store: Arc<dyn RecipeStore>,
    /// Recipe write path
    pub writer: RecipeWriter,
    /// Catalog read path
    pub reader: CatalogReader,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Build resources around one store
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>, config: Arc<ServerConfig>) -> Self {
        Self {
            writer: RecipeWriter::new(Arc::clone(&store)),
            reader: CatalogReader::new(Arc::clone(&store)),
            store,
            config,
        }
    }
}
