//! Database configuration module for the briefing store.
//!
//! Handles connecting to the hosted briefing database (Postgres in production,
//! `SQLite` for local runs and tests) and creating the three briefing tables from
//! the entity definitions with `Schema::create_table_from_entity`, so the schema
//! always matches the Rust structs without hand-written SQL.

use crate::entities::{Article, Briefing, Category};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info, instrument};

/// Reads `DATABASE_URL` from the environment.
///
/// Returns `None` when the variable is unset or blank, in which case the
/// dashboard serves the built-in fixture briefings instead of a database.
#[must_use]
pub fn get_database_url() -> Option<String> {
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Establishes a connection to the briefing database at `database_url`.
#[instrument(skip(database_url))]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to briefing database");
    let db = Database::connect(database_url).await?;
    info!("Briefing database connection established.");
    Ok(db)
}

/// Creates the briefings, categories and articles tables if they do not exist.
///
/// Tables are created parent-first so the foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Briefing).await?;
    create_table(db, Category).await?;
    create_table(db, Article).await?;
    info!("Briefing tables ensured.");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}
