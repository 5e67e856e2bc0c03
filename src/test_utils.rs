//! Shared test utilities for the briefing desk.
//!
//! This module provides helpers for setting up an in-memory briefing database
//! and inserting briefings, categories and articles with sensible defaults.

use crate::{entities, errors::Result};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all database-backed tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a briefing for `date`.
///
/// # Defaults
/// * `content`: two lines of summary text
/// * `created_at` / `updated_at`: now
pub async fn create_test_briefing(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<entities::briefing::Model> {
    let now = Utc::now();
    let briefing = entities::briefing::ActiveModel {
        date: Set(date),
        content: Set("금일 KT 관련 주요 보도입니다.\n보안 투자 확대가 부각되었습니다.".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(briefing.insert(db).await?)
}

/// Inserts a category under `briefing_id`.
pub async fn create_test_category(
    db: &DatabaseConnection,
    briefing_id: i64,
    name: &str,
) -> Result<entities::category::Model> {
    let category = entities::category::ActiveModel {
        briefing_id: Set(briefing_id),
        name: Set(name.to_string()),
        ..Default::default()
    };
    Ok(category.insert(db).await?)
}

/// Inserts an article under `category_id`.
///
/// # Defaults
/// * `url`: derived from the title length
/// * `journalist_name`: `"기자명"`
pub async fn create_test_article(
    db: &DatabaseConnection,
    category_id: i64,
    title: &str,
    source: &str,
) -> Result<entities::article::Model> {
    let article = entities::article::ActiveModel {
        category_id: Set(category_id),
        title: Set(title.to_string()),
        url: Set(format!("https://news.example/{category_id}/{}", title.len())),
        source: Set(source.to_string()),
        journalist_name: Set(Some("기자명".to_string())),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(article.insert(db).await?)
}

/// Sets up a test database holding one briefing for `date`.
/// Returns (db, briefing) for common test scenarios.
pub async fn setup_with_briefing(
    date: NaiveDate,
) -> Result<(DatabaseConnection, entities::briefing::Model)> {
    let db = setup_test_db().await?;
    let briefing = create_test_briefing(&db, date).await?;
    Ok((db, briefing))
}
