//! Target entity - One measurable dimension of a goal.
//!
//! Targets carry a stable generated `id`; progress events key on that id,
//! never on the display `name`. Renaming a target therefore cannot orphan
//! its history. The `direction` string is `"min"` or `"max"` and decides
//! how the progress percentage is computed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Target database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "targets")]
pub struct Model {
    /// Stable unique identifier; progress events reference this
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the goal this target belongs to
    pub goal_id: i64,
    /// Renamable display label (e.g., "distance run")
    pub name: String,
    /// Progress direction: `"min"` (improve by decreasing) or `"max"` (by increasing)
    pub direction: String,
    /// Value when the goal was created
    pub start_value: f64,
    /// Value the user is aiming for
    pub target_value: f64,
    /// Most recently tracked value (denormalized from the latest event)
    pub current_value: f64,
    /// Unit label for display (e.g., "km", "minutes") - not used in calculation
    pub unit: String,
    /// Unit classification for display (e.g., "distance", "duration")
    pub unit_type: String,
    /// Measurement system for display (e.g., "metric", "imperial")
    pub unit_system: String,
}

/// Defines relationships between Target and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each target belongs to one goal
    #[sea_orm(
        belongs_to = "super::goal::Entity",
        from = "Column::GoalId",
        to = "super::goal::Column::Id"
    )]
    Goal,
    /// One target has many progress events
    #[sea_orm(has_many = "super::progress_event::Entity")]
    ProgressEvents,
}

impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goal.def()
    }
}

impl Related<super::progress_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
