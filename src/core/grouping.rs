//! Category grouping for the briefing coverage list.

use super::briefing::ArticleView;
use indexmap::IndexMap;
use serde::Serialize;

/// Articles sharing one category name, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category name exactly as stored (or the fallback label)
    pub name: String,
    /// Articles in this category, in the order they were fetched
    pub articles: Vec<ArticleView>,
}

/// Groups articles by category name.
///
/// Categories keep first-seen order and articles keep their input order within
/// a category. Names are compared verbatim (case- and whitespace-sensitive);
/// an empty name falls back to `fallback`.
#[must_use]
pub fn group_by_category(articles: &[ArticleView], fallback: &str) -> Vec<CategoryGroup> {
    let mut groups: IndexMap<&str, Vec<ArticleView>> = IndexMap::new();

    for article in articles {
        let name = if article.category.is_empty() {
            fallback
        } else {
            article.category.as_str()
        };
        groups.entry(name).or_default().push(article.clone());
    }

    groups
        .into_iter()
        .map(|(name, articles)| CategoryGroup {
            name: name.to_string(),
            articles,
        })
        .collect()
}
