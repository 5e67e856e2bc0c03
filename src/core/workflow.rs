//! Monitoring workflow status: job runs, status counts and the run log.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Execution state of a monitoring job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Running,
    Success,
    Failed,
    Pending,
    /// Any status this dashboard does not know
    #[serde(other)]
    Unknown,
}

impl WorkflowStatus {
    /// Statuses offered by the progress filter, in display order.
    pub const FILTERABLE: [Self; 4] = [Self::Running, Self::Success, Self::Failed, Self::Pending];

    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "실행중",
            Self::Success => "완료",
            Self::Failed => "실패",
            Self::Pending => "대기",
            Self::Unknown => "알 수 없음",
        }
    }

    /// Colour family used for the badge and progress bar.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Running => "blue",
            Self::Success => "green",
            Self::Failed => "red",
            Self::Pending | Self::Unknown => "gray",
        }
    }

    /// Query-string form (`running`, `success`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Pending => "pending",
            Self::Unknown => "unknown",
        }
    }

    /// Parses the query-string form; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE
            .into_iter()
            .find(|status| status.as_str() == value)
    }
}

/// One execution of a monitoring job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowRun {
    pub id: u32,
    pub name: String,
    pub started_at: NaiveDateTime,
    /// Human-readable run time (e.g., "30초", "실시간")
    pub duration: String,
    pub status: WorkflowStatus,
    pub error: Option<String>,
    /// Completion percentage, 0-100
    pub progress: u8,
    /// When the job runs next (e.g., "10분 후", "재시도 대기")
    pub next_run: String,
}

/// Number of runs in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub running: usize,
    pub success: usize,
    pub failed: usize,
    pub pending: usize,
}

impl StatusCounts {
    /// Counts runs by status. Unknown statuses are not counted.
    #[must_use]
    pub fn from_runs(runs: &[WorkflowRun]) -> Self {
        runs.iter().fold(Self::default(), |mut counts, run| {
            match run.status {
                WorkflowStatus::Running => counts.running += 1,
                WorkflowStatus::Success => counts.success += 1,
                WorkflowStatus::Failed => counts.failed += 1,
                WorkflowStatus::Pending => counts.pending += 1,
                WorkflowStatus::Unknown => {}
            }
            counts
        })
    }

    /// Count for one status.
    #[must_use]
    pub const fn get(&self, status: WorkflowStatus) -> usize {
        match status {
            WorkflowStatus::Running => self.running,
            WorkflowStatus::Success => self.success,
            WorkflowStatus::Failed => self.failed,
            WorkflowStatus::Pending => self.pending,
            WorkflowStatus::Unknown => 0,
        }
    }
}

/// Keeps the runs in `status`, or all runs when no filter is given.
#[must_use]
pub fn filter_runs(runs: &[WorkflowRun], status: Option<WorkflowStatus>) -> Vec<&WorkflowRun> {
    runs.iter()
        .filter(|run| status.is_none_or(|wanted| run.status == wanted))
        .collect()
}

/// Severity of a workflow log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Upper-case label as printed in the log panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Colour family used for the label.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Success => "green",
            Self::Warning => "orange",
            Self::Error => "red",
        }
    }
}

/// One line of the workflow log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub time: NaiveTime,
    pub level: LogLevel,
    pub message: String,
    pub workflow: String,
}
