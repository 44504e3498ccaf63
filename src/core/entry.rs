//! Entry business logic - Handles all journal-entry operations.
//!
//! This module provides functions for creating, retrieving, and soft-deleting
//! categorized entries, plus the pure day-streak calculation used for daily
//! check-in tracking. Entry kinds are validated against a fixed list; mood
//! scores are only accepted on mood entries and must be between 1 and 10.

use crate::{
    entities::{Entry, entry},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Entry kind for mood tracking (carries a 1-10 `mood_score`)
pub const KIND_MOOD: &str = "mood";
/// Entry kind for gratitude lists
pub const KIND_GRATITUDE: &str = "gratitude";
/// Entry kind for daily check-ins (feeds the streak calculation)
pub const KIND_DAILY_CHECKIN: &str = "daily_checkin";
/// Entry kind for notes attached to goal work
pub const KIND_GOAL_NOTE: &str = "goal_note";
/// Entry kind for free-form writing
pub const KIND_FREE: &str = "free";

/// All entry kinds accepted by [`create_entry`]
pub const ENTRY_KINDS: [&str; 5] = [
    KIND_MOOD,
    KIND_GRATITUDE,
    KIND_DAILY_CHECKIN,
    KIND_GOAL_NOTE,
    KIND_FREE,
];

/// Creates a new entry in a journal, performing input validation.
///
/// The journal must exist and not be deleted, the kind must be one of
/// [`ENTRY_KINDS`], the body must be non-empty, and a mood score (1-10)
/// is only accepted on mood entries.
pub async fn create_entry(
    db: &DatabaseConnection,
    journal_id: i64,
    user_id: String,
    kind: String,
    title: String,
    body: String,
    mood_score: Option<i32>,
) -> Result<entry::Model> {
    if !ENTRY_KINDS.contains(&kind.as_str()) {
        return Err(Error::UnknownEntryKind { kind });
    }

    if body.trim().is_empty() {
        return Err(Error::Config {
            message: "Entry body cannot be empty".to_string(),
        });
    }

    if let Some(score) = mood_score {
        if kind != KIND_MOOD {
            return Err(Error::Config {
                message: format!("Mood score is only valid on mood entries, got kind '{kind}'"),
            });
        }
        if !(1..=10).contains(&score) {
            return Err(Error::InvalidValue {
                value: f64::from(score),
            });
        }
    }

    crate::core::journal::get_journal_by_id(db, journal_id)
        .await?
        .ok_or(Error::JournalNotFound { id: journal_id })?;

    let entry = entry::ActiveModel {
        journal_id: Set(journal_id),
        user_id: Set(user_id),
        kind: Set(kind),
        title: Set(title),
        body: Set(body),
        mood_score: Set(mood_score),
        created_at: Set(chrono::Utc::now()),
        is_deleted: Set(false),
        ..Default::default()
    };

    let result = entry.insert(db).await?;
    Ok(result)
}

/// Retrieves all active entries for a journal, newest first.
pub async fn get_entries_for_journal(
    db: &DatabaseConnection,
    journal_id: i64,
) -> Result<Vec<entry::Model>> {
    Entry::find()
        .filter(entry::Column::JournalId.eq(journal_id))
        .filter(entry::Column::IsDeleted.eq(false))
        .order_by_desc(entry::Column::CreatedAt)
        .order_by_desc(entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the most recent active entries for a journal, capped at `limit`.
pub async fn get_recent_entries(
    db: &DatabaseConnection,
    journal_id: i64,
    limit: u64,
) -> Result<Vec<entry::Model>> {
    Entry::find()
        .filter(entry::Column::JournalId.eq(journal_id))
        .filter(entry::Column::IsDeleted.eq(false))
        .order_by_desc(entry::Column::CreatedAt)
        .order_by_desc(entry::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an entry by its unique ID, returning None if not found or deleted.
pub async fn get_entry_by_id(
    db: &DatabaseConnection,
    entry_id: i64,
) -> Result<Option<entry::Model>> {
    Entry::find_by_id(entry_id)
        .filter(entry::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Soft-deletes an entry.
pub async fn soft_delete_entry(db: &DatabaseConnection, entry_id: i64) -> Result<()> {
    let entry = get_entry_by_id(db, entry_id)
        .await?
        .ok_or(Error::EntryNotFound { id: entry_id })?;

    let mut active_model: entry::ActiveModel = entry.into();
    active_model.is_deleted = Set(true);
    active_model.update(db).await?;
    Ok(())
}

/// Counts the user's current consecutive-day streak over a set of entry
/// dates.
///
/// The streak ends on `today` or `yesterday` (writing later today keeps the
/// streak alive); an older latest entry means the streak is broken and the
/// count is 0. Duplicate dates count once.
#[must_use]
pub fn current_streak_days(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut unique: Vec<NaiveDate> = dates.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let Some(&latest) = unique.last() else {
        return 0;
    };
    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in unique.windows(2).rev() {
        if (pair[1] - pair[0]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
