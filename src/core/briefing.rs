//! Briefing viewer pipeline: fetch a day's briefing, join its articles to their
//! category names, group and count them.
//!
//! Reads run as one sequential chain (briefing, categories, articles). The first
//! failure short-circuits the rest and the page degrades to its empty state; a
//! transport failure additionally raises a single [`Notice::load_failed`].

use super::{
    grouping::{CategoryGroup, group_by_category},
    notice::Notice,
    stats::DerivedStats,
    store::{BriefingStore, FetchError},
};
use crate::entities::{article, briefing, category};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, error, instrument};

/// An article as displayed, with its category name already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub journalist_name: Option<String>,
    /// Category name, or the fallback label when the category is unknown
    pub category: String,
}

impl ArticleView {
    fn from_model(model: article::Model, category: String) -> Self {
        Self {
            id: model.id.to_string(),
            title: model.title,
            url: model.url,
            source: model.source,
            journalist_name: model.journalist_name,
            category,
        }
    }
}

/// Everything the briefing page renders for one date.
#[derive(Debug, Clone, Serialize)]
pub struct BriefingPage {
    pub date: NaiveDate,
    /// The briefing record, if one exists for `date`
    pub briefing: Option<briefing::Model>,
    pub articles: Vec<ArticleView>,
    pub groups: Vec<CategoryGroup>,
    pub stats: DerivedStats,
    /// Notices to show alongside the page
    pub notices: Vec<Notice>,
}

impl BriefingPage {
    /// A page with nothing loaded.
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            briefing: None,
            articles: Vec::new(),
            groups: Vec::new(),
            stats: DerivedStats::default(),
            notices: Vec::new(),
        }
    }

    /// The briefing content exactly as displayed, for the clipboard export.
    #[must_use]
    pub fn copy_text(&self) -> Option<&str> {
        self.briefing.as_ref().map(|b| b.content.as_str())
    }

    /// True when there are no articles to summarize.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Loads the briefing page for `date`.
///
/// Never fails: a missing briefing yields an empty page without notices, a
/// transport failure yields an empty article list, zeroed stats and exactly one
/// load-failure notice. A briefing fetched before the failure is kept so its
/// content stays visible.
#[instrument(skip(store))]
pub async fn load_briefing<S>(store: &S, date: NaiveDate, fallback: &str) -> BriefingPage
where
    S: BriefingStore + ?Sized,
{
    let mut page = BriefingPage::empty(date);

    match fetch_into(store, &mut page, fallback).await {
        Ok(()) => {
            debug!(
                "Loaded briefing for {date} with {} articles in {} groups.",
                page.stats.total,
                page.groups.len()
            );
        }
        Err(FetchError::NotFound { what }) => {
            debug!("No {what}; rendering empty state.");
        }
        Err(err @ FetchError::Transport { .. }) => {
            error!("Failed to load briefing for {date}: {err}");
            page.notices.push(Notice::load_failed());
        }
    }

    page
}

async fn fetch_into<S>(store: &S, page: &mut BriefingPage, fallback: &str) -> Result<(), FetchError>
where
    S: BriefingStore + ?Sized,
{
    let briefing = store.briefing_by_date(page.date).await?;
    let briefing_id = briefing.id;
    page.briefing = Some(briefing);

    let categories = store.categories_for_briefing(briefing_id).await?;
    if categories.is_empty() {
        return Ok(());
    }

    let category_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    let articles = store.articles_for_categories(&category_ids).await?;

    let views = join_categories(articles, &categories, fallback);
    page.stats = DerivedStats::from_articles(&views);
    page.groups = group_by_category(&views, fallback);
    page.articles = views;
    Ok(())
}

/// Attaches category names to articles; unknown ids get `fallback`.
fn join_categories(
    articles: Vec<article::Model>,
    categories: &[category::Model],
    fallback: &str,
) -> Vec<ArticleView> {
    let names: HashMap<i64, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    articles
        .into_iter()
        .map(|model| {
            let name = names
                .get(&model.category_id)
                .map_or_else(|| fallback.to_string(), |name| (*name).to_string());
            ArticleView::from_model(model, name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::notice::NoticeVariant;
    use crate::core::store::{DatabaseStore, FixtureStore};
    use crate::errors::Result as AppResult;
    use crate::test_utils::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    const FALLBACK: &str = "기타";

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    /// Store double that records calls and fails at a chosen step.
    #[derive(Default)]
    struct ScriptedStore {
        briefing: Option<briefing::Model>,
        fail_articles: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedStore {
        fn with_briefing(fail_articles: bool) -> Self {
            Self {
                briefing: Some(briefing::Model {
                    id: 1,
                    date: date(5),
                    content: "금일 주요 보도입니다.\n둘째 줄".to_string(),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }),
                fail_articles,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BriefingStore for ScriptedStore {
        async fn briefing_by_date(&self, date: NaiveDate) -> Result<briefing::Model, FetchError> {
            self.calls.lock().unwrap().push("briefing");
            self.briefing
                .clone()
                .filter(|b| b.date == date)
                .ok_or_else(|| FetchError::NotFound {
                    what: format!("briefing for {date}"),
                })
        }

        async fn categories_for_briefing(
            &self,
            briefing_id: i64,
        ) -> Result<Vec<category::Model>, FetchError> {
            self.calls.lock().unwrap().push("categories");
            Ok(vec![category::Model {
                id: 10,
                briefing_id,
                name: "일반 기사".to_string(),
            }])
        }

        async fn articles_for_categories(
            &self,
            _category_ids: &[i64],
        ) -> Result<Vec<article::Model>, FetchError> {
            self.calls.lock().unwrap().push("articles");
            if self.fail_articles {
                return Err(FetchError::Transport {
                    message: "connection reset".to_string(),
                });
            }
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_missing_date_renders_empty_without_article_fetch() {
        let store = ScriptedStore::default();

        let page = load_briefing(&store, date(6), FALLBACK).await;

        assert!(page.briefing.is_none());
        assert!(page.is_empty());
        assert!(page.notices.is_empty());
        assert_eq!(store.calls(), vec!["briefing"]);
    }

    #[tokio::test]
    async fn test_article_transport_failure_degrades_with_one_notice() {
        let store = ScriptedStore::with_briefing(true);

        let page = load_briefing(&store, date(5), FALLBACK).await;

        assert!(page.briefing.is_some());
        assert!(page.articles.is_empty());
        assert!(page.groups.is_empty());
        assert_eq!(page.stats, DerivedStats::default());
        assert_eq!(page.notices.len(), 1);
        assert_eq!(page.notices[0], Notice::load_failed());
        assert_eq!(page.notices[0].variant, NoticeVariant::Destructive);
        assert_eq!(store.calls(), vec!["briefing", "categories", "articles"]);
    }

    #[tokio::test]
    async fn test_copy_text_matches_displayed_content() {
        let store = ScriptedStore::with_briefing(false);

        let page = load_briefing(&store, date(5), FALLBACK).await;

        assert_eq!(page.copy_text(), Some("금일 주요 보도입니다.\n둘째 줄"));
        assert!(page.notices.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_database() -> AppResult<()> {
        let (db, briefing) = setup_with_briefing(date(5)).await?;
        let finance = create_test_category(&db, briefing.id, "재무 및 경영 관련 기사").await?;
        let general = create_test_category(&db, briefing.id, "일반 기사").await?;
        create_test_article(&db, finance.id, "KT 정보보안 1조 투자", "뉴시스").await?;
        create_test_article(&db, general.id, "KT 브랜드 캠페인", "다음뉴스").await?;
        create_test_article(&db, finance.id, "KT 2분기 실적", "뉴시스").await?;

        let store = DatabaseStore::new(db);
        let page = load_briefing(&store, date(5), FALLBACK).await;

        assert_eq!(page.stats.total, 3);
        assert_eq!(page.stats.sources, 2);
        assert_eq!(page.groups.len(), 2);
        assert_eq!(page.groups[0].name, "재무 및 경영 관련 기사");
        assert_eq!(page.groups[0].articles.len(), 2);
        assert_eq!(page.groups[1].name, "일반 기사");
        assert!(page.notices.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_briefing_without_categories_is_empty() -> AppResult<()> {
        let (db, _) = setup_with_briefing(date(5)).await?;
        let store = DatabaseStore::new(db);

        let page = load_briefing(&store, date(5), FALLBACK).await;

        assert!(page.briefing.is_some());
        assert!(page.is_empty());
        assert!(page.notices.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_database_raises_one_notice() -> AppResult<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let store = DatabaseStore::new(db);

        let page = load_briefing(&store, date(5), FALLBACK).await;

        assert!(page.briefing.is_none());
        assert!(page.is_empty());
        assert_eq!(page.notices, vec![Notice::load_failed()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_from_fixtures() {
        let store = FixtureStore::new();

        let page = load_briefing(&store, date(9), FALLBACK).await;

        assert_eq!(page.stats.total, 6);
        assert_eq!(page.stats.positive, 4);
        assert_eq!(page.stats.caution, 1);
        assert_eq!(page.groups.len(), 3);
        let partitioned: usize = page.groups.iter().map(|g| g.articles.len()).sum();
        assert_eq!(partitioned, page.articles.len());
    }

    #[test]
    fn test_join_unknown_category_uses_fallback() {
        let model = article::Model {
            id: 7,
            category_id: 99,
            title: "제목".to_string(),
            url: "https://news.example/7".to_string(),
            source: "뉴시스".to_string(),
            journalist_name: None,
            created_at: Utc::now(),
        };

        let views = join_categories(vec![model], &[], FALLBACK);
        assert_eq!(views[0].category, FALLBACK);
        assert_eq!(views[0].id, "7");
    }
}
