//! # censusd — census daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its
//!   port trait
//! - Insert the one-shot seed data
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use census_adapter_http_axum::state::AppState;
use census_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqlitePersonRepository};
use census_app::services::person_service::PersonService;

use crate::config::Config;

/// Family names inserted once at startup, each with a randomized age.
const SEED_FAMILY_NAMES: [&str; 2] = ["Stephane Maldini", "Arjen Poutsma"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Repository and service
    let person_repo = SqlitePersonRepository::new(db.pool().clone());
    let person_service = PersonService::new(person_repo);

    // One-shot seed data
    let seeded = person_service.seed_people(&SEED_FAMILY_NAMES).await?;
    tracing::info!(count = seeded.len(), "seeded person records");

    // HTTP
    let state = AppState::new(person_service);
    let app = census_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "censusd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
