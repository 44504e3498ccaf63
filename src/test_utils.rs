//! Shared test utilities for Keepsake.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{entry, goal, journal, progress::Direction, template},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test journal with a default description.
pub async fn create_test_journal(
    db: &DatabaseConnection,
    user_id: &str,
    title: &str,
) -> Result<entities::journal::Model> {
    journal::create_journal(
        db,
        user_id.to_string(),
        title.to_string(),
        "test journal".to_string(),
    )
    .await
}

/// Creates a test entry with sensible defaults.
///
/// # Defaults
/// * `user_id`: `"test_user"`
/// * `kind`: `"free"`
/// * `title`: empty
/// * `mood_score`: None
pub async fn create_test_entry(
    db: &DatabaseConnection,
    journal_id: i64,
    body: &str,
) -> Result<entities::entry::Model> {
    entry::create_entry(
        db,
        journal_id,
        "test_user".to_string(),
        entry::KIND_FREE.to_string(),
        String::new(),
        body.to_string(),
        None,
    )
    .await
}

/// A max-direction test target running from 0 toward 10.
#[must_use]
pub fn test_target(name: &str) -> goal::NewTarget {
    goal::NewTarget {
        name: name.to_string(),
        direction: Direction::Max,
        start_value: 0.0,
        target_value: 10.0,
        unit: "km".to_string(),
        unit_type: "distance".to_string(),
        unit_system: "metric".to_string(),
    }
}

/// Creates a test template with sensible defaults in the "gratitude"
/// category.
pub async fn create_test_template(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::template::Model> {
    create_test_template_in_category(db, name, "gratitude").await
}

/// Creates a test template in a specific marketplace category.
pub async fn create_test_template_in_category(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
) -> Result<entities::template::Model> {
    template::create_template(
        db,
        name.to_string(),
        "test template".to_string(),
        category.to_string(),
        r#"["What are you grateful for?"]"#.to_string(),
    )
    .await
}

/// Sets up a complete test environment with a journal.
/// Returns (db, journal) for common test scenarios.
pub async fn setup_with_journal() -> Result<(DatabaseConnection, entities::journal::Model)> {
    let db = setup_test_db().await?;
    let journal = create_test_journal(&db, "test_user", "Test Journal").await?;
    Ok((db, journal))
}

/// Sets up a complete test environment with a journal and a two-target goal
/// ("distance" and "sessions", both max-direction, 0 toward 10).
/// Returns (db, journal, goal, targets) for tracking-related tests.
pub async fn setup_with_goal() -> Result<(
    DatabaseConnection,
    entities::journal::Model,
    entities::goal::Model,
    Vec<entities::target::Model>,
)> {
    let (db, journal) = setup_with_journal().await?;
    let (goal, targets) = goal::create_goal(
        &db,
        journal.id,
        "test_user".to_string(),
        "Run a 10k".to_string(),
        "fitness".to_string(),
        "train three times a week".to_string(),
        vec![test_target("distance"), test_target("sessions")],
    )
    .await?;
    Ok((db, journal, goal, targets))
}
