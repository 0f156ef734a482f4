// ABOUTME: Fruit catalog seeding utility for the smoothie order server
// ABOUTME: Loads the default fruit names and nutrition lookup keys into fruit_options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fruit catalog seeder.
//!
//! Usage:
//! ```bash
//! # Seed the catalog (uses DATABASE_URL from environment)
//! cargo run --bin seed-fruit-catalog
//!
//! # Override database URL
//! cargo run --bin seed-fruit-catalog -- --database-url sqlite:./data/smoothies.db
//!
//! # Replace an existing catalog
//! cargo run --bin seed-fruit-catalog -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use smoothie_order_server::{
    config::DatabaseUrl,
    constants::defaults,
    database::{CatalogManager, Database},
    models::FruitOption,
};
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-fruit-catalog",
    about = "Smoothie Order Server Fruit Catalog Seeder",
    long_about = "Create the default fruit_options rows used by the smoothie order form"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Replace the catalog even if rows already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Display name and nutrition service lookup key
const DEFAULT_FRUITS: &[(&str, &str)] = &[
    ("Apples", "Apple"),
    ("Blueberries", "Blueberry"),
    ("Cantaloupe", "Cantaloupe"),
    ("Dragon Fruit", "Dragonfruit"),
    ("Elderberries", "Elderberry"),
    ("Figs", "Fig"),
    ("Guava", "Guava"),
    ("Honeydew", "Honeydew"),
    ("Jackfruit", "Jackfruit"),
    ("Kiwi", "Kiwi"),
    ("Lime", "Lime"),
    ("Mango", "Mango"),
    ("Nectarine", "Nectarine"),
    ("Papaya", "Papaya"),
    ("Pomegranate", "Pomegranate"),
    ("Raspberries", "Raspberry"),
    ("Strawberries", "Strawberry"),
    ("Tangerine", "Tangerine"),
    ("Vanilla Fruit", "Vanilla"),
    ("Watermelon", "Watermelon"),
    ("Ximenia", "Ximenia"),
    ("Yerba Mate", "Yerba Mate"),
    ("Ziziphus Jujube", "Jujube"),
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Smoothie Order Server Fruit Catalog Seeder ===");

    // Load database URL
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());

    info!("Connecting to database: {database_url}");
    let database = Database::new(&DatabaseUrl::parse_url(&database_url)).await?;
    database.migrate().await?;

    let manager = CatalogManager::new(database.pool().clone());
    let existing = manager.count().await?;
    if existing > 0 && !args.force {
        info!("Fruit catalog already seeded ({existing} rows). Use --force to replace it.");
        return Ok(());
    }

    let options: Vec<FruitOption> = DEFAULT_FRUITS
        .iter()
        .map(|(name, lookup_key)| FruitOption::new(*name, *lookup_key))
        .collect();

    let seeded = manager.replace_catalog(&options).await?;
    info!("Seeded {seeded} fruit options");

    Ok(())
}
