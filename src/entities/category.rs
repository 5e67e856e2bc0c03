//! Category entity - Grouping label for articles within a single briefing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the briefing this category belongs to
    pub briefing_id: i64,
    /// Display name (e.g., "재무 및 경영 관련 기사"), compared verbatim
    pub name: String,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each category belongs to one briefing
    #[sea_orm(
        belongs_to = "super::briefing::Entity",
        from = "Column::BriefingId",
        to = "super::briefing::Column::Id"
    )]
    Briefing,
    /// One category has many articles
    #[sea_orm(has_many = "super::article::Entity")]
    Articles,
}

impl Related<super::briefing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Briefing.def()
    }
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Articles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
