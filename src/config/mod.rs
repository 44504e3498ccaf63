/// Database configuration and connection management
pub mod database;

/// Curated-content seeding from config.toml
pub mod seed;
