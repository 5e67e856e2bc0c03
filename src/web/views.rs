//! Askama views. Each page template gets a flat struct of preformatted rows so
//! the templates only print strings and loop.

use crate::{
    config::AppConfig,
    core::{
        briefing::BriefingPage,
        crisis::{AlertSummary, CrisisAlert},
        dates::{format_korean_date, format_korean_datetime, format_relative},
        notice::{Notice, QuickAction},
        snapshot::{SharedBriefing, SnapshotCategory},
        stats::DerivedStats,
        workflow::{StatusCounts, WorkflowStatus, filter_runs},
    },
};
use askama::Template;
use chrono::{DateTime, NaiveDate, Utc};

use super::ConsoleData;

/// A quick-action button.
#[derive(Debug, Clone)]
pub struct ActionLink {
    pub slug: &'static str,
    pub label: &'static str,
}

fn action_links() -> Vec<ActionLink> {
    QuickAction::ALL
        .into_iter()
        .map(|action| ActionLink {
            slug: action.slug(),
            label: action.label(),
        })
        .collect()
}

/// Notices for an `?action=` parameter. Unknown slugs still announce
/// themselves, with the generic wording.
#[must_use]
pub fn action_notices(action: Option<&str>) -> Vec<Notice> {
    action
        .filter(|slug| !slug.is_empty())
        .map(|slug| vec![Notice::coming_soon(QuickAction::from_slug(slug))])
        .unwrap_or_default()
}

// === Crisis console ===

#[derive(Debug, Clone)]
pub struct AlertRow {
    pub level_label: &'static str,
    pub level_tone: &'static str,
    pub status_label: &'static str,
    pub title: String,
    pub url: String,
    pub source: String,
    pub journalist_name: String,
    pub journalist_phone: String,
    pub dial_uri: String,
    pub reason: String,
    pub key_sentence: String,
    pub action_plan: String,
    pub elapsed: String,
}

impl AlertRow {
    fn new(alert: &CrisisAlert, now: DateTime<Utc>) -> Self {
        Self {
            level_label: alert.level.label(),
            level_tone: alert.level.tone(),
            status_label: alert.status.label(),
            title: alert.title.clone(),
            url: alert.url.clone(),
            source: alert.source.clone(),
            journalist_name: alert.journalist_name.clone(),
            journalist_phone: alert.journalist_phone.clone(),
            dial_uri: alert.dial_uri(),
            reason: alert.reason.clone(),
            key_sentence: alert.key_sentence.clone(),
            action_plan: alert.action_plan.clone(),
            elapsed: format_relative(alert.created_at, now),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivityRow {
    pub workflow: String,
    pub status_label: &'static str,
    pub status_tone: &'static str,
    pub duration: String,
    pub elapsed: String,
}

#[derive(Debug, Clone)]
pub struct MetricRow {
    pub metric: String,
    pub value: String,
    pub status_label: &'static str,
    pub status_tone: &'static str,
    pub elapsed: String,
}

/// `/` - crisis alerts, recent activity and system status.
#[derive(Template)]
#[template(path = "crisis.html")]
pub struct CrisisView {
    pub nav: &'static str,
    pub notices: Vec<Notice>,
    pub summary: AlertSummary,
    pub alerts: Vec<AlertRow>,
    pub activity: Vec<ActivityRow>,
    pub system: Vec<MetricRow>,
    pub actions: Vec<ActionLink>,
}

impl CrisisView {
    #[must_use]
    pub fn build(console: &ConsoleData, notices: Vec<Notice>, now: DateTime<Utc>) -> Self {
        Self {
            nav: "crisis",
            notices,
            summary: AlertSummary::from_alerts(&console.alerts),
            alerts: console
                .alerts
                .iter()
                .map(|alert| AlertRow::new(alert, now))
                .collect(),
            activity: console
                .activity
                .iter()
                .map(|entry| ActivityRow {
                    workflow: entry.workflow.clone(),
                    status_label: entry.status.label(),
                    status_tone: entry.status.tone(),
                    duration: entry.duration.clone(),
                    elapsed: format_relative(entry.finished_at, now),
                })
                .collect(),
            system: console
                .system
                .iter()
                .map(|status| MetricRow {
                    metric: status.metric.clone(),
                    value: status.display_value(),
                    status_label: status.status.label(),
                    status_tone: status.status.tone(),
                    elapsed: format_relative(status.last_updated, now),
                })
                .collect(),
            actions: action_links(),
        }
    }
}

// === Briefing viewer ===

#[derive(Debug, Clone)]
pub struct DateLink {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct ArticleRow {
    pub title: String,
    pub url: String,
    pub source: String,
    /// Empty when the byline is unknown
    pub journalist_name: String,
}

#[derive(Debug, Clone)]
pub struct GroupRow {
    pub name: String,
    pub articles: Vec<ArticleRow>,
}

/// `/briefing` - the daily briefing viewer.
#[derive(Template)]
#[template(path = "briefing.html")]
pub struct BriefingView {
    pub nav: &'static str,
    pub notices: Vec<Notice>,
    /// `YYYY-MM-DD`, or the raw request value when it did not parse
    pub date_value: String,
    pub date_label: String,
    pub recent: Vec<DateLink>,
    pub has_briefing: bool,
    pub content: String,
    pub stats: DerivedStats,
    pub groups: Vec<GroupRow>,
    pub share_url: String,
    pub content_url: String,
    pub copy_succeeded: Notice,
    pub copy_failed: Notice,
    pub actions: Vec<ActionLink>,
}

impl BriefingView {
    /// View for a loaded page. `notices` are appended after the page's own.
    #[must_use]
    pub fn build(page: BriefingPage, config: &AppConfig, notices: Vec<Notice>) -> Self {
        let date_value = page.date.format("%Y-%m-%d").to_string();
        let content = page.copy_text().unwrap_or_default().to_string();

        let mut all_notices = page.notices;
        all_notices.extend(notices);

        Self {
            nav: "briefing",
            notices: all_notices,
            date_label: format_korean_date(page.date),
            recent: recent_links(config, Some(page.date)),
            has_briefing: page.briefing.is_some(),
            content,
            stats: page.stats,
            groups: page
                .groups
                .into_iter()
                .map(|group| GroupRow {
                    name: group.name,
                    articles: group
                        .articles
                        .into_iter()
                        .map(|article| ArticleRow {
                            title: article.title,
                            url: article.url,
                            source: article.source,
                            journalist_name: article.journalist_name.unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
            share_url: format!("/briefing/share/{date_value}"),
            content_url: format!("/api/briefings/{date_value}/content"),
            date_value,
            copy_succeeded: Notice::copy_succeeded(),
            copy_failed: Notice::copy_failed(),
            actions: action_links(),
        }
    }

    /// Empty-state view for a `date` parameter that is not a date.
    #[must_use]
    pub fn invalid_date(raw: &str, config: &AppConfig, notices: Vec<Notice>) -> Self {
        let mut view = Self::build(
            BriefingPage::empty(config.briefing.default_date),
            config,
            notices,
        );
        view.date_value = raw.to_string();
        view.date_label = raw.to_string();
        view.recent = recent_links(config, None);
        view
    }

    /// True when the summary cards should show figures.
    #[must_use]
    pub const fn has_stats(&self) -> bool {
        !self.stats.is_empty()
    }
}

fn recent_links(config: &AppConfig, selected: Option<NaiveDate>) -> Vec<DateLink> {
    config
        .briefing
        .recent_dates
        .iter()
        .map(|date| DateLink {
            value: date.format("%Y-%m-%d").to_string(),
            label: format_korean_date(*date),
            selected: Some(*date) == selected,
        })
        .collect()
}

// === Shared snapshot ===

/// `/briefing/share/{date}` - read-only snapshot.
#[derive(Template)]
#[template(path = "share.html")]
pub struct ShareView {
    pub date_label: String,
    pub report_at: String,
    pub content: String,
    pub stats: DerivedStats,
    pub coverage_total: usize,
    pub categories: Vec<SnapshotCategory>,
    pub content_url: String,
    pub copy_succeeded: Notice,
    pub copy_failed: Notice,
}

impl ShareView {
    #[must_use]
    pub fn build(snapshot: &SharedBriefing) -> Self {
        Self {
            date_label: format_korean_date(snapshot.date),
            report_at: snapshot.report_at.clone(),
            content: snapshot.content.clone(),
            stats: snapshot.stats,
            coverage_total: snapshot.coverage_total(),
            categories: snapshot.categories.clone(),
            content_url: format!("/api/share/{}/content", snapshot.date.format("%Y-%m-%d")),
            copy_succeeded: Notice::copy_succeeded(),
            copy_failed: Notice::copy_failed(),
        }
    }
}

/// 404 page for a snapshot date with no entry.
#[derive(Template)]
#[template(path = "share_missing.html")]
pub struct ShareMissingView {
    pub requested: String,
}

// === Workflow progress ===

#[derive(Debug, Clone)]
pub struct FilterTab {
    /// Query value; empty for "all"
    pub slug: &'static str,
    pub label: &'static str,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct RunRow {
    pub id: u32,
    pub name: String,
    pub started_at: String,
    pub duration: String,
    pub status_label: &'static str,
    pub status_tone: &'static str,
    /// Empty when the run did not fail
    pub error: String,
    pub progress: u8,
    pub next_run: String,
}

#[derive(Debug, Clone)]
pub struct LogRow {
    pub time: String,
    pub level_label: &'static str,
    pub level_tone: &'static str,
    pub message: String,
    pub workflow: String,
}

/// `/progress` - workflow runs and the run log.
#[derive(Template)]
#[template(path = "progress.html")]
pub struct ProgressView {
    pub nav: &'static str,
    pub notices: Vec<Notice>,
    pub tabs: Vec<FilterTab>,
    pub runs: Vec<RunRow>,
    pub logs: Vec<LogRow>,
    pub actions: Vec<ActionLink>,
}

impl ProgressView {
    #[must_use]
    pub fn build(
        console: &ConsoleData,
        status: Option<WorkflowStatus>,
        notices: Vec<Notice>,
    ) -> Self {
        let counts = StatusCounts::from_runs(&console.runs);

        let mut tabs = vec![FilterTab {
            slug: "",
            label: "전체",
            count: console.runs.len(),
            selected: status.is_none(),
        }];
        tabs.extend(WorkflowStatus::FILTERABLE.into_iter().map(|s| FilterTab {
            slug: s.as_str(),
            label: s.label(),
            count: counts.get(s),
            selected: status == Some(s),
        }));

        Self {
            nav: "progress",
            notices,
            tabs,
            runs: filter_runs(&console.runs, status)
                .into_iter()
                .map(|run| RunRow {
                    id: run.id,
                    name: run.name.clone(),
                    started_at: format_korean_datetime(run.started_at),
                    duration: run.duration.clone(),
                    status_label: run.status.label(),
                    status_tone: run.status.tone(),
                    error: run.error.clone().unwrap_or_default(),
                    progress: run.progress,
                    next_run: run.next_run.clone(),
                })
                .collect(),
            logs: console
                .logs
                .iter()
                .map(|entry| LogRow {
                    time: entry.time.format("%H:%M:%S").to_string(),
                    level_label: entry.level.label(),
                    level_tone: entry.level.tone(),
                    message: entry.message.clone(),
                    workflow: entry.workflow.clone(),
                })
                .collect(),
            actions: action_links(),
        }
    }
}
