//! Briefing entity - One morning press briefing per calendar date.
//!
//! The `content` column holds the executive summary text exactly as it is
//! displayed and copied; categories hang off the briefing by `briefing_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Briefing database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "briefings")]
pub struct Model {
    /// Unique identifier for the briefing
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the briefing covers, looked up by exact match
    #[sea_orm(unique)]
    pub date: Date,
    /// Executive summary text (multi-line)
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// When the briefing was created
    pub created_at: DateTimeUtc,
    /// When the briefing was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Briefing and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One briefing has many categories
    #[sea_orm(has_many = "super::category::Entity")]
    Categories,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
