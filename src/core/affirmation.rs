//! Affirmation business logic - Admin curation and daily rotation.
//!
//! Affirmations are curated by the admin surface and shown to users one per
//! day. The rotation is deterministic (day-of-year modulo the active count)
//! so every client renders the same affirmation on the same day without any
//! shared random state.

use crate::{
    entities::{Affirmation, affirmation},
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Adds a new affirmation to the curated pool. The text must be non-empty;
/// `author` may be empty for anonymous affirmations.
pub async fn create_affirmation(
    db: &DatabaseConnection,
    text: String,
    author: String,
) -> Result<affirmation::Model> {
    if text.trim().is_empty() {
        return Err(Error::Config {
            message: "Affirmation text cannot be empty".to_string(),
        });
    }

    let affirmation = affirmation::ActiveModel {
        text: Set(text.trim().to_string()),
        author: Set(author),
        created_at: Set(chrono::Utc::now()),
        is_deleted: Set(false),
        ..Default::default()
    };

    let result = affirmation.insert(db).await?;
    Ok(result)
}

/// Retrieves all active affirmations in insertion order.
pub async fn list_affirmations(db: &DatabaseConnection) -> Result<Vec<affirmation::Model>> {
    Affirmation::find()
        .filter(affirmation::Column::IsDeleted.eq(false))
        .order_by_asc(affirmation::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Soft-deletes an affirmation, removing it from the rotation.
pub async fn soft_delete_affirmation(db: &DatabaseConnection, affirmation_id: i64) -> Result<()> {
    let affirmation = Affirmation::find_by_id(affirmation_id)
        .filter(affirmation::Column::IsDeleted.eq(false))
        .one(db)
        .await?
        .ok_or_else(|| Error::Config {
            message: format!("Affirmation not found: {affirmation_id}"),
        })?;

    let mut active_model: affirmation::ActiveModel = affirmation.into();
    active_model.is_deleted = Set(true);
    active_model.update(db).await?;
    Ok(())
}

/// Picks the affirmation for a given date, or None when the pool is empty.
///
/// Rotation is day-of-year modulo the active count, over the pool in
/// insertion order. Deleting an affirmation shifts the rotation; that is
/// acceptable for this feature.
pub async fn affirmation_of_the_day(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Option<affirmation::Model>> {
    let pool = list_affirmations(db).await?;
    if pool.is_empty() {
        return Ok(None);
    }

    let index = (date.ordinal0() as usize) % pool.len();
    Ok(pool.into_iter().nth(index))
}
