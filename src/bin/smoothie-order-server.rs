// ABOUTME: Server binary for the smoothie order form
// ABOUTME: Loads configuration, prepares the database, and serves the router until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Smoothie Order Server Binary
//!
//! Starts the order form and JSON API over HTTP with graceful shutdown on
//! Ctrl-C or SIGTERM.

use anyhow::Result;
use clap::Parser;
use smoothie_order_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    external::SmoothieFrootClient,
    logging,
    resources::ServerResources,
    server::{build_router, serve, shutdown_signal},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "smoothie-order-server")]
#[command(about = "Smoothie order form - fruit catalog, nutrition lookup, and order submission")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http.port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url);
    }

    info!("Starting smoothie order server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    if config.database.auto_migrate {
        database.migrate().await?;
        info!("Database migrations applied");
    }

    let provider = Arc::new(SmoothieFrootClient::new(&config.nutrition)?);
    let address = format!("{}:{}", config.http.host, config.http.port);
    let resources = Arc::new(ServerResources::new(Arc::new(config), database, provider));

    let listener = TcpListener::bind(&address).await?;
    serve(listener, build_router(resources), shutdown_signal()).await?;

    Ok(())
}
