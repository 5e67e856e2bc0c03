//! Web layer - axum router, handlers and askama views.
//!
//! Three page flows share nothing at runtime: the briefing viewer reads through
//! the [`BriefingStore`], the shared snapshot page reads the in-memory
//! [`SnapshotTable`], and the crisis/workflow console renders static lists.

pub mod routes;
pub mod views;

use crate::{
    config::{AppConfig, SnapshotSource},
    core::{
        crisis::{ActivityEntry, CrisisAlert, SystemStatus},
        snapshot::SnapshotTable,
        store::{BriefingStore, FetchError},
        workflow::{LogEntry, WorkflowRun},
    },
    errors::Error,
    fixtures,
};
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

/// Static lists behind the crisis and workflow console.
#[derive(Debug, Clone)]
pub struct ConsoleData {
    pub alerts: Vec<CrisisAlert>,
    pub activity: Vec<ActivityEntry>,
    pub system: Vec<SystemStatus>,
    pub runs: Vec<WorkflowRun>,
    pub logs: Vec<LogEntry>,
}

impl ConsoleData {
    /// The built-in console lists.
    #[must_use]
    pub fn from_fixtures() -> Self {
        Self {
            alerts: fixtures::console::crisis_alerts(),
            activity: fixtures::console::recent_activity(),
            system: fixtures::console::system_status(),
            runs: fixtures::console::workflow_runs(),
            logs: fixtures::console::workflow_logs(),
        }
    }
}

/// State shared by every handler. All of it is read-only.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BriefingStore>,
    pub snapshots: Arc<SnapshotTable>,
    pub config: Arc<AppConfig>,
    pub console: Arc<ConsoleData>,
}

impl AppState {
    /// Builds the state around `store`, picking the snapshot table named by
    /// `share.source`.
    pub fn new(store: Arc<dyn BriefingStore>, config: AppConfig) -> Self {
        let snapshots = match config.share.source {
            SnapshotSource::Builtin => SnapshotTable::builtin(),
            SnapshotSource::Briefings => SnapshotTable::from_briefings(fixtures::BRIEFINGS),
        };

        Self {
            store,
            snapshots: Arc::new(snapshots),
            config: Arc::new(config),
            console: Arc::new(ConsoleData::from_fixtures()),
        }
    }
}

/// Create the dashboard router
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/briefings/:date", get(routes::api_briefing))
        .route("/briefings/:date/content", get(routes::api_briefing_content))
        .route("/share/:date", get(routes::api_share))
        .route("/share/:date/content", get(routes::api_share_content))
        .route("/alerts", get(routes::api_alerts))
        .route("/workflows", get(routes::api_workflows))
        .layer(CorsLayer::permissive());

    Router::new()
        // Pages
        .route("/", get(routes::crisis_page))
        .route("/briefing", get(routes::briefing_page))
        .route("/briefing/share/:date", get(routes::share_page))
        .route("/progress", get(routes::progress_page))
        // JSON API
        .nest("/api", api)
        // Health check
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidDate { .. } => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            Self::Fetch(FetchError::NotFound { what }) => {
                (StatusCode::NOT_FOUND, format!("No {what}")).into_response()
            }
            other => {
                error!("Request failed: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
