//! Crisis alert console: risk-flagged articles and their suggested responses.
//!
//! Alerts are static records; this module only classifies and summarizes them.

use super::workflow::WorkflowStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a crisis alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Needs an immediate response
    Danger,
    /// Needs attention
    Warning,
    /// For awareness
    Info,
    /// Any level this dashboard does not know
    #[serde(other)]
    Unknown,
}

impl AlertLevel {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Danger => "긴급",
            Self::Warning => "주의",
            Self::Info => "정보",
            Self::Unknown => "알 수 없음",
        }
    }

    /// Colour family used for the badge.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Danger => "red",
            Self::Warning => "orange",
            Self::Info => "blue",
            Self::Unknown => "gray",
        }
    }
}

/// Handling state of a crisis alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Response in progress
    Active,
    /// Being watched
    Monitoring,
    /// Closed
    Resolved,
}

impl AlertStatus {
    /// Status text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "대응 중",
            Self::Monitoring => "모니터링",
            Self::Resolved => "처리 완료",
        }
    }
}

/// A risk-flagged news item with a suggested response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisAlert {
    pub id: u32,
    pub level: AlertLevel,
    pub title: String,
    pub url: String,
    /// Media outlet that published the article
    pub source: String,
    pub journalist_name: String,
    pub journalist_phone: String,
    /// Why the article is a risk
    pub reason: String,
    /// The sentence that triggered the alert
    pub key_sentence: String,
    /// Recommended response
    pub action_plan: String,
    pub created_at: DateTime<Utc>,
    pub status: AlertStatus,
}

impl CrisisAlert {
    /// `tel:` URI for calling the journalist. The number is used as-is.
    #[must_use]
    pub fn dial_uri(&self) -> String {
        format!("tel:{}", self.journalist_phone)
    }
}

/// Alert counts shown in the console header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    pub danger: usize,
    pub warning: usize,
    pub info: usize,
    /// Alerts not yet resolved
    pub open: usize,
    pub resolved: usize,
}

impl AlertSummary {
    /// Counts alerts by level and by resolution.
    #[must_use]
    pub fn from_alerts(alerts: &[CrisisAlert]) -> Self {
        alerts.iter().fold(Self::default(), |mut summary, alert| {
            match alert.level {
                AlertLevel::Danger => summary.danger += 1,
                AlertLevel::Warning => summary.warning += 1,
                AlertLevel::Info => summary.info += 1,
                AlertLevel::Unknown => {}
            }
            if alert.status == AlertStatus::Resolved {
                summary.resolved += 1;
            } else {
                summary.open += 1;
            }
            summary
        })
    }
}

/// A recent monitoring job execution shown in the console sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub workflow: String,
    pub finished_at: DateTime<Utc>,
    pub status: WorkflowStatus,
    /// Human-readable run time (e.g., "2분 15초", "실시간")
    pub duration: String,
}

/// Health of a system metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Normal,
    Warning,
    Critical,
}

impl MetricStatus {
    /// Status text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "정상",
            Self::Warning => "주의",
            Self::Critical => "위험",
        }
    }

    /// Colour family used for the indicator.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Normal => "green",
            Self::Warning => "orange",
            Self::Critical => "red",
        }
    }
}

/// A monitored system metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    pub id: u32,
    pub metric: String,
    pub value: f64,
    /// Unit suffix for display (e.g., "%", "초")
    pub unit: String,
    pub status: MetricStatus,
    pub last_updated: DateTime<Utc>,
}

impl SystemStatus {
    /// Value with one decimal and its unit, e.g. `98.5%`.
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{:.1}{}", self.value, self.unit)
    }
}
