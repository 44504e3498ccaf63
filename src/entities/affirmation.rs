//! Affirmation entity - Admin-curated affirmation text.
//! Affirmations rotate deterministically by day of year; soft-deleted
//! affirmations drop out of the rotation but stay in the table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Affirmation database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "affirmations")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The affirmation text shown to users
    pub text: String,
    /// Attribution, empty string for anonymous
    pub author: String,
    /// When the affirmation was added
    pub created_at: DateTimeUtc,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// `Affirmation` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
