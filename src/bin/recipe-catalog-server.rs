// ABOUTME: Recipe catalog server binary
// ABOUTME: Loads configuration, initializes logging, connects the recipe store, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog Server Binary
//!
//! Serves `GET`/`POST /api/recipes` over the configured recipe store.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use recipe_catalog::{
    config::environment::{ServerConfig, StoreBackend},
    logging,
    resources::ServerResources,
    server,
    store::factory::create_store,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Recipe catalog API - stores recipes as encoded ingredient measures")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override store backend (redis or memory)
    #[arg(long)]
    store_backend: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(backend) = args.store_backend.as_deref() {
        config.store.backend = StoreBackend::parse(backend)?;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Loaded configuration from environment variables");
    info!("Starting recipe catalog");
    info!("{}", config.summary());

    let store = create_store(&config.store).await?;
    info!("Recipe store ready: {}", store.backend_name());

    let resources = Arc::new(ServerResources::new(store, Arc::new(config)));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
