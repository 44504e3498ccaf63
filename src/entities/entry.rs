//! Entry entity - Represents one categorized journal entry.
//!
//! Each entry has a `journal_id`, a `kind` string (`"mood"`, `"gratitude"`,
//! `"daily_checkin"`, `"goal_note"`, `"free"`), free-text title and body, and
//! an optional `mood_score` that is only meaningful for mood entries.
//! Backticks are used for field names to enable proper documentation linking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the journal this entry belongs to
    pub journal_id: i64,
    /// User who wrote the entry
    pub user_id: String,
    /// Entry kind: `"mood"`, `"gratitude"`, `"daily_checkin"`, `"goal_note"`, or `"free"`
    pub kind: String,
    /// Short title for the entry
    pub title: String,
    /// Entry body text
    pub body: String,
    /// Mood rating 1-10, present only for mood entries
    pub mood_score: Option<i32>,
    /// When the entry was written
    pub created_at: DateTimeUtc,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// Defines relationships between Entry and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry belongs to one journal
    #[sea_orm(
        belongs_to = "super::journal::Entity",
        from = "Column::JournalId",
        to = "super::journal::Column::Id"
    )]
    Journal,
}

impl Related<super::journal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
