//! Template entity - Marketplace journal template.
//!
//! A template bundles a name, category, and a JSON list of prompts. Users
//! adopt a template to create a pre-configured journal of their own.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Template database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "templates")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Template name shown in the marketplace
    pub name: String,
    /// What adopting this template sets up
    pub description: String,
    /// Marketplace category (e.g., "gratitude", "fitness")
    pub category: String,
    /// JSON array of prompt strings
    pub content: String,
    /// When the template was published
    pub created_at: DateTimeUtc,
    /// Soft delete flag - removes the template from the marketplace
    pub is_deleted: bool,
}

/// `Template` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
