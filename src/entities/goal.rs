//! Goal entity - Represents one measurable goal inside a journal.
//!
//! A goal owns an ordered list of targets (separate table) and carries a
//! denormalized `progress` percentage. The snapshot is written in the same
//! database transaction as the progress events that justify it, so it can
//! never drift from the event log.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Goal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    /// Unique identifier for the goal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the journal this goal belongs to
    pub journal_id: i64,
    /// User who owns the goal
    pub user_id: String,
    /// The goal statement (e.g., "Run a sub-4h marathon")
    pub statement: String,
    /// Why this goal matters to the user
    pub rationale: String,
    /// Free-text next steps
    pub next_steps: String,
    /// Denormalized overall progress percentage (0-100), median across targets
    pub progress: f64,
    /// When the goal was created (timeline reconstruction anchors here)
    pub created_at: DateTimeUtc,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// Defines relationships between Goal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each goal belongs to one journal
    #[sea_orm(
        belongs_to = "super::journal::Entity",
        from = "Column::JournalId",
        to = "super::journal::Column::Id"
    )]
    Journal,
    /// One goal has many targets
    #[sea_orm(has_many = "super::target::Entity")]
    Targets,
    /// One goal has many progress events
    #[sea_orm(has_many = "super::progress_event::Entity")]
    ProgressEvents,
}

impl Related<super::journal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journal.def()
    }
}

impl Related<super::target::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Targets.def()
    }
}

impl Related<super::progress_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
