//! Shared briefing snapshots.
//!
//! A shared link shows a read-only summary looked up by date in an in-memory
//! table; no store is consulted. The table is either the hand-prepared
//! snapshot set or derived from the fixture briefings.

use super::{dates::parse_date, stats::DerivedStats};
use crate::fixtures::{BriefingFixture, snapshots::SnapshotFixture};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// One outlet's coverage within a snapshot category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSource {
    pub name: String,
    pub title: String,
    pub count: usize,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotCategory {
    pub name: String,
    pub count: usize,
    pub sources: Vec<SnapshotSource>,
}

/// A read-only briefing summary as published on a shared link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedBriefing {
    pub date: NaiveDate,
    /// Report time as printed
    pub report_at: String,
    pub content: String,
    pub categories: Vec<SnapshotCategory>,
    pub stats: DerivedStats,
}

impl SharedBriefing {
    /// Sum of the per-category coverage counts.
    #[must_use]
    pub fn coverage_total(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }
}

/// Date-keyed snapshot lookup.
#[derive(Debug, Clone, Default)]
pub struct SnapshotTable {
    entries: BTreeMap<NaiveDate, SharedBriefing>,
}

impl SnapshotTable {
    /// The hand-prepared snapshot set with its published figures.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_snapshots(crate::fixtures::SNAPSHOTS)
    }

    fn from_snapshots(snapshots: &[SnapshotFixture]) -> Self {
        let entries = snapshots
            .iter()
            .filter_map(|fixture| {
                let date = parse_fixture_date(fixture.date)?;
                let (total, positive, caution, sources) = fixture.stats;
                let categories = fixture
                    .categories
                    .iter()
                    .map(|category| SnapshotCategory {
                        name: category.name.to_string(),
                        count: category.count,
                        sources: category
                            .sources
                            .iter()
                            .map(|source| SnapshotSource {
                                name: source.name.to_string(),
                                title: source.title.to_string(),
                                count: source.count,
                                url: source.url.to_string(),
                            })
                            .collect(),
                    })
                    .collect();

                Some((
                    date,
                    SharedBriefing {
                        date,
                        report_at: fixture.report_at.to_string(),
                        content: fixture.content.to_string(),
                        categories,
                        stats: DerivedStats {
                            total,
                            positive,
                            caution,
                            sources,
                        },
                    },
                ))
            })
            .collect();

        Self { entries }
    }

    /// Derives snapshots from dated briefings. Stats use the reported coverage
    /// total and the number of distinct outlets among the listed articles.
    #[must_use]
    pub fn from_briefings(briefings: &[BriefingFixture]) -> Self {
        let entries = briefings
            .iter()
            .filter_map(|fixture| {
                let date = parse_fixture_date(fixture.date)?;
                let categories: Vec<SnapshotCategory> = fixture
                    .categories
                    .iter()
                    .map(|category| SnapshotCategory {
                        name: category.name.to_string(),
                        count: category.count,
                        sources: category
                            .articles
                            .iter()
                            .map(|article| SnapshotSource {
                                name: article.source.to_string(),
                                title: article.title.to_string(),
                                count: article.count,
                                url: article.url.to_string(),
                            })
                            .collect(),
                    })
                    .collect();

                let outlets = categories
                    .iter()
                    .flat_map(|c| c.sources.iter().map(|s| s.name.as_str()))
                    .collect::<std::collections::HashSet<_>>()
                    .len();

                Some((
                    date,
                    SharedBriefing {
                        date,
                        report_at: fixture.report_at.to_string(),
                        content: fixture.content.to_string(),
                        stats: DerivedStats::from_total(fixture.total_articles, outlets),
                        categories,
                    },
                ))
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&SharedBriefing> {
        self.entries.get(&date)
    }

    /// Dates with a snapshot, oldest first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_fixture_date(value: &str) -> Option<NaiveDate> {
    match parse_date(value) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!("Skipping snapshot: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::fixtures::BRIEFINGS;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    #[test]
    fn test_builtin_table() {
        let table = SnapshotTable::builtin();
        assert_eq!(table.len(), 3);
        assert_eq!(table.dates().collect::<Vec<_>>(), vec![date(5), date(8), date(9)]);

        let snapshot = table.get(date(5)).unwrap();
        assert_eq!(snapshot.stats.total, 40);
        assert_eq!(snapshot.stats.positive, 28);
        assert_eq!(snapshot.stats.caution, 8);
        assert_eq!(snapshot.stats.sources, 12);
        assert_eq!(snapshot.coverage_total(), 40);
    }

    #[test]
    fn test_unknown_date_is_absent() {
        let table = SnapshotTable::builtin();
        assert!(table.get(date(6)).is_none());
        assert!(SnapshotTable::default().is_empty());
    }

    #[test]
    fn test_from_briefings_uses_heuristic() {
        let table = SnapshotTable::from_briefings(BRIEFINGS);
        assert_eq!(table.len(), BRIEFINGS.len());

        let snapshot = table.get(date(5)).unwrap();
        assert_eq!(snapshot.stats.total, 45);
        assert_eq!(snapshot.stats.positive, 31);
        assert_eq!(snapshot.stats.caution, 9);
        assert_eq!(snapshot.coverage_total(), 45);
        assert!(snapshot.stats.sources > 0);
        assert!(snapshot.content.starts_with("금일 KT 관련 주요 보도입니다."));
    }
}
