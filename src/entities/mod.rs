//! Entity module - Contains all SeaORM entity definitions for the database.
//! Briefings own categories, categories own articles; nothing else is stored.

pub mod article;
pub mod briefing;
pub mod category;

// Re-export specific types to avoid conflicts
pub use article::{Column as ArticleColumn, Entity as Article, Model as ArticleModel};
pub use briefing::{Column as BriefingColumn, Entity as Briefing, Model as BriefingModel};
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
