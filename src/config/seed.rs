//! Curated-content seeding from config.toml
//!
//! This module loads the curated affirmations and marketplace templates that
//! ship with a fresh deployment from a TOML configuration file, and seeds
//! them into the database idempotently (rows that already exist by
//! affirmation text / template name are left alone).

use crate::errors::{Error, Result};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Curated affirmations to seed
    #[serde(default)]
    pub affirmations: Vec<AffirmationSeed>,
    /// Marketplace templates to seed
    #[serde(default)]
    pub templates: Vec<TemplateSeed>,
}

/// Configuration for a single curated affirmation
#[derive(Debug, Deserialize, Clone)]
pub struct AffirmationSeed {
    /// The affirmation text
    pub text: String,
    /// Attribution, defaults to anonymous
    #[serde(default)]
    pub author: String,
}

/// Configuration for a single marketplace template
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSeed {
    /// Template name shown in the marketplace
    pub name: String,
    /// What adopting this template sets up
    #[serde(default)]
    pub description: String,
    /// Marketplace category
    pub category: String,
    /// Prompt strings for the template
    pub prompts: Vec<String>,
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads seed configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<SeedConfig> {
    load_config("config.toml")
}

/// Seeds curated affirmations and templates into the database.
///
/// Idempotent: an affirmation whose text already exists, or a template whose
/// name already exists, is skipped. Returns (affirmations added, templates
/// added).
pub async fn seed_curated_content(
    db: &DatabaseConnection,
    config: &SeedConfig,
) -> Result<(usize, usize)> {
    let existing_affirmations = crate::core::affirmation::list_affirmations(db).await?;
    let mut affirmations_added = 0;
    for seed in &config.affirmations {
        if existing_affirmations.iter().any(|a| a.text == seed.text.trim()) {
            continue;
        }
        crate::core::affirmation::create_affirmation(db, seed.text.clone(), seed.author.clone())
            .await?;
        affirmations_added += 1;
    }

    let existing_templates = crate::core::template::list_templates(db).await?;
    let mut templates_added = 0;
    for seed in &config.templates {
        if existing_templates.iter().any(|t| t.name == seed.name.trim()) {
            continue;
        }
        let content = serde_json::to_string(&seed.prompts)?;
        crate::core::template::create_template(
            db,
            seed.name.clone(),
            seed.description.clone(),
            seed.category.clone(),
            content,
        )
        .await?;
        templates_added += 1;
    }

    info!(
        affirmations_added,
        templates_added, "Seeded curated content"
    );

    Ok((affirmations_added, templates_added))
}
