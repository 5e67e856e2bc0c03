//! Article entity - A single press article attached to a briefing category.
//!
//! Articles reach their briefing only through `category_id`; the join back to
//! the category name happens in memory at read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Article database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    /// Unique identifier for the article
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the category this article is filed under
    pub category_id: i64,
    /// Headline as published
    pub title: String,
    /// Outbound link to the article
    pub url: String,
    /// Media outlet name (e.g., "뉴시스")
    pub source: String,
    /// Reporter byline, when known
    pub journalist_name: Option<String>,
    /// When the article row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Article and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each article belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
