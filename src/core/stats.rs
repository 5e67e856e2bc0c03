//! Briefing summary statistics.
//!
//! The positive/caution figures are a fixed share of the article total, not a
//! sentiment measurement. They are computed in `f64` and floored so the numbers
//! match the existing dashboard exactly.

use super::briefing::ArticleView;
use serde::Serialize;
use std::collections::HashSet;

/// Share of the total shown as positive coverage.
pub const POSITIVE_SHARE: f64 = 0.7;

/// Share of the total shown as needing caution.
pub const CAUTION_SHARE: f64 = 0.2;

/// Counts derived from the current article list; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivedStats {
    /// Number of articles
    pub total: usize,
    /// `floor(total * 0.7)`
    pub positive: usize,
    /// `floor(total * 0.2)`
    pub caution: usize,
    /// Number of distinct media outlets
    pub sources: usize,
}

impl DerivedStats {
    /// Builds the stats for a known total and distinct-source count.
    #[must_use]
    pub fn from_total(total: usize, sources: usize) -> Self {
        Self {
            total,
            positive: floor_share(total, POSITIVE_SHARE),
            caution: floor_share(total, CAUTION_SHARE),
            sources,
        }
    }

    /// Builds the stats for an article list. Sources are compared verbatim.
    #[must_use]
    pub fn from_articles(articles: &[ArticleView]) -> Self {
        let sources = articles
            .iter()
            .map(|article| article.source.as_str())
            .collect::<HashSet<_>>()
            .len();
        Self::from_total(articles.len(), sources)
    }

    /// True when there is nothing to summarize.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn floor_share(total: usize, share: f64) -> usize {
    // Cast safety: article totals are far below 2^52 and the product is non-negative.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let value = (total as f64 * share).floor() as usize;
    value
}
