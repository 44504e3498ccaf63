//! Database configuration module for Keepsake.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Affirmation, Entry, Goal, Journal, ProgressEvent, Target, Template};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/keepsake.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation
/// from entity definitions.
///
/// Creates tables for journals, entries, goals, targets, progress events,
/// affirmations, and templates.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let journal_table = schema.create_table_from_entity(Journal);
    let entry_table = schema.create_table_from_entity(Entry);
    let goal_table = schema.create_table_from_entity(Goal);
    let target_table = schema.create_table_from_entity(Target);
    let progress_event_table = schema.create_table_from_entity(ProgressEvent);
    let affirmation_table = schema.create_table_from_entity(Affirmation);
    let template_table = schema.create_table_from_entity(Template);

    db.execute(builder.build(&journal_table)).await?;
    db.execute(builder.build(&entry_table)).await?;
    db.execute(builder.build(&goal_table)).await?;
    db.execute(builder.build(&target_table)).await?;
    db.execute(builder.build(&progress_event_table)).await?;
    db.execute(builder.build(&affirmation_table)).await?;
    db.execute(builder.build(&template_table)).await?;

    Ok(())
}
