//! Read-only briefing store.
//!
//! The briefing viewer reads through three sequential lookups: briefing by date,
//! categories by briefing id, articles by category-id set. [`BriefingStore`] is
//! the seam for those lookups; [`DatabaseStore`] answers them from the hosted
//! database and [`FixtureStore`] from the built-in fixture briefings.

use crate::{
    entities::{Article, Briefing, Category, article, briefing, category},
    fixtures::briefings::{BriefingFixture, FIXTURE_JOURNALIST},
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// The two ways a store lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Nothing matches the filter
    #[error("not found: {what}")]
    NotFound { what: String },
    /// The store is unreachable or rejected the query
    #[error("transport failure: {message}")]
    Transport { message: String },
}

impl From<DbErr> for FetchError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(what) => Self::NotFound { what },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

/// Lookups the briefing viewer performs, in the order it performs them.
#[async_trait]
pub trait BriefingStore: Send + Sync {
    /// The briefing for exactly `date`.
    async fn briefing_by_date(&self, date: NaiveDate) -> Result<briefing::Model, FetchError>;

    /// Categories belonging to a briefing.
    async fn categories_for_briefing(
        &self,
        briefing_id: i64,
    ) -> Result<Vec<category::Model>, FetchError>;

    /// Articles filed under any of `category_ids`.
    async fn articles_for_categories(
        &self,
        category_ids: &[i64],
    ) -> Result<Vec<article::Model>, FetchError>;
}

/// Store backed by the briefing database.
#[derive(Debug, Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BriefingStore for DatabaseStore {
    #[instrument(skip(self))]
    async fn briefing_by_date(&self, date: NaiveDate) -> Result<briefing::Model, FetchError> {
        Briefing::find()
            .filter(briefing::Column::Date.eq(date))
            .one(&self.db)
            .await?
            .ok_or_else(|| FetchError::NotFound {
                what: format!("briefing for {date}"),
            })
    }

    #[instrument(skip(self))]
    async fn categories_for_briefing(
        &self,
        briefing_id: i64,
    ) -> Result<Vec<category::Model>, FetchError> {
        let categories = Category::find()
            .filter(category::Column::BriefingId.eq(briefing_id))
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Fetched {} categories.", categories.len());
        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn articles_for_categories(
        &self,
        category_ids: &[i64],
    ) -> Result<Vec<article::Model>, FetchError> {
        let articles = Article::find()
            .filter(article::Column::CategoryId.is_in(category_ids.iter().copied()))
            .order_by_asc(article::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Fetched {} articles.", articles.len());
        Ok(articles)
    }
}

/// Store answering from the fixture briefings, used when no database is
/// configured. Rows are materialized once with sequential ids.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    briefings: Vec<briefing::Model>,
    categories: Vec<category::Model>,
    articles: Vec<article::Model>,
}

impl FixtureStore {
    /// Builds the store from the built-in briefings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_fixtures(crate::fixtures::BRIEFINGS)
    }

    /// Builds the store from an explicit fixture list. Fixtures with an
    /// unparseable date are skipped.
    #[must_use]
    pub fn from_fixtures(fixtures: &[BriefingFixture]) -> Self {
        let now = Utc::now();
        let mut store = Self::default();

        for fixture in fixtures {
            let Ok(date) = super::dates::parse_date(fixture.date) else {
                warn!("Skipping fixture briefing with invalid date {:?}", fixture.date);
                continue;
            };

            let briefing_id = next_id(store.briefings.len());
            store.briefings.push(briefing::Model {
                id: briefing_id,
                date,
                content: fixture.content.to_string(),
                created_at: now,
                updated_at: now,
            });

            for category_fixture in fixture.categories {
                let category_id = next_id(store.categories.len());
                store.categories.push(category::Model {
                    id: category_id,
                    briefing_id,
                    name: category_fixture.name.to_string(),
                });

                for article_fixture in category_fixture.articles {
                    store.articles.push(article::Model {
                        id: next_id(store.articles.len()),
                        category_id,
                        title: article_fixture.title.to_string(),
                        url: article_fixture.url.to_string(),
                        source: article_fixture.source.to_string(),
                        journalist_name: Some(FIXTURE_JOURNALIST.to_string()),
                        created_at: now,
                    });
                }
            }
        }

        store
    }
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).map_or(i64::MAX, |n| n + 1)
}

#[async_trait]
impl BriefingStore for FixtureStore {
    async fn briefing_by_date(&self, date: NaiveDate) -> Result<briefing::Model, FetchError> {
        self.briefings
            .iter()
            .find(|briefing| briefing.date == date)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                what: format!("briefing for {date}"),
            })
    }

    async fn categories_for_briefing(
        &self,
        briefing_id: i64,
    ) -> Result<Vec<category::Model>, FetchError> {
        Ok(self
            .categories
            .iter()
            .filter(|category| category.briefing_id == briefing_id)
            .cloned()
            .collect())
    }

    async fn articles_for_categories(
        &self,
        category_ids: &[i64],
    ) -> Result<Vec<article::Model>, FetchError> {
        Ok(self
            .articles
            .iter()
            .filter(|article| category_ids.contains(&article.category_id))
            .cloned()
            .collect())
    }
}
