//! Progress event entity - One immutable tracked value for one target.
//!
//! Events are append-only: they are written once when the user submits a
//! tracking update and never mutated afterwards. `photo_urls` holds an
//! optional JSON array of evidence photo URLs.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Progress event database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "progress_events")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the goal this event belongs to (query key for history fetches)
    pub goal_id: i64,
    /// Stable id of the target this value was recorded for
    pub target_id: i64,
    /// The tracked value the user submitted
    pub value: f64,
    /// Optional JSON array of photo evidence URLs
    pub photo_urls: Option<String>,
    /// Optional free-text reflection attached to this update
    pub reflection: Option<String>,
    /// When the value was recorded
    pub timestamp: DateTimeUtc,
}

/// Defines relationships between ProgressEvent and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each event belongs to one goal
    #[sea_orm(
        belongs_to = "super::goal::Entity",
        from = "Column::GoalId",
        to = "super::goal::Column::Id"
    )]
    Goal,
    /// Each event belongs to one target
    #[sea_orm(
        belongs_to = "super::target::Entity",
        from = "Column::TargetId",
        to = "super::target::Column::Id"
    )]
    Target,
}

impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goal.def()
    }
}

impl Related<super::target::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Target.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
