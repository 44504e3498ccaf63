//! Journal entity - Represents one user-owned journal.
//!
//! A journal is the container users write into: it owns categorized entries
//! and goals. Journals are soft-deleted so history stays queryable.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Journal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journals")]
pub struct Model {
    /// Unique identifier for the journal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user's id (opaque string supplied by the auth layer)
    pub user_id: String,
    /// Human-readable title (e.g., "Morning Pages", "Training Log")
    pub title: String,
    /// Free-text description of what this journal is for
    pub description: String,
    /// When the journal was created
    pub created_at: DateTimeUtc,
    /// Soft delete flag - if true, journal is hidden but data is preserved
    pub is_deleted: bool,
}

/// Defines relationships between Journal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One journal has many entries
    #[sea_orm(has_many = "super::entry::Entity")]
    Entries,
    /// One journal has many goals
    #[sea_orm(has_many = "super::goal::Entity")]
    Goals,
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
