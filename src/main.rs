//! Provisioning entry point: initializes the database schema and seeds the
//! curated affirmations and marketplace templates from config.toml. Run this
//! once per deployment (re-running is harmless; seeding is idempotent).

use dotenvy::dotenv;
use keepsake::{config, errors::Result};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect and create tables
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!(url = %config::database::get_database_url(), "Database initialized.");

    // 4. Seed curated content, if a config.toml is present
    if Path::new("config.toml").exists() {
        let seed_config = config::seed::load_default_config()?;
        let (affirmations, templates) =
            config::seed::seed_curated_content(&db, &seed_config).await?;
        info!(affirmations, templates, "Curated content seeded.");
    } else {
        warn!("No config.toml found; skipping curated-content seeding.");
    }

    Ok(())
}
