//! Dashboard HTTP routes
//!
//! Page handlers render askama views; API handlers return JSON (or plain text
//! for the clipboard export).

use super::{
    AppState,
    views::{BriefingView, CrisisView, ProgressView, ShareMissingView, ShareView, action_notices},
};
use crate::{
    core::{
        briefing::{BriefingPage, load_briefing},
        crisis::{AlertSummary, CrisisAlert},
        dates::parse_date,
        snapshot::SharedBriefing,
        workflow::{StatusCounts, WorkflowRun, WorkflowStatus, filter_runs},
    },
    errors::Result,
};
use askama::Template;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// `?action=` on any dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
}

/// GET / - crisis console
pub async fn crisis_page(
    State(state): State<AppState>,
    Query(query): Query<ActionQuery>,
) -> Result<Html<String>> {
    let notices = action_notices(query.action.as_deref());
    let view = CrisisView::build(&state.console, notices, Utc::now());
    Ok(Html(view.render()?))
}

#[derive(Debug, Default, Deserialize)]
pub struct BriefingQuery {
    pub date: Option<String>,
    pub action: Option<String>,
}

/// GET /briefing?date=YYYY-MM-DD
pub async fn briefing_page(
    State(state): State<AppState>,
    Query(query): Query<BriefingQuery>,
) -> Result<Html<String>> {
    let notices = action_notices(query.action.as_deref());
    let fallback = &state.config.briefing.fallback_category;

    let view = match query.date.as_deref().filter(|raw| !raw.is_empty()) {
        None => {
            let page =
                load_briefing(state.store.as_ref(), state.config.briefing.default_date, fallback)
                    .await;
            BriefingView::build(page, &state.config, notices)
        }
        Some(raw) => match parse_date(raw) {
            Ok(date) => {
                let page = load_briefing(state.store.as_ref(), date, fallback).await;
                BriefingView::build(page, &state.config, notices)
            }
            Err(err) => {
                debug!("{err}; rendering empty state.");
                BriefingView::invalid_date(raw, &state.config, notices)
            }
        },
    };

    Ok(Html(view.render()?))
}

/// GET /briefing/share/:date
pub async fn share_page(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let snapshot = parse_date(&raw)
        .ok()
        .and_then(|date| state.snapshots.get(date));

    let Some(snapshot) = snapshot else {
        debug!("No shared briefing for {raw:?}");
        let view = ShareMissingView { requested: raw };
        return Ok((StatusCode::NOT_FOUND, Html(view.render()?)).into_response());
    };

    Ok(Html(ShareView::build(snapshot).render()?).into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    pub status: Option<String>,
    pub action: Option<String>,
}

/// GET /progress?status=running|success|failed|pending
pub async fn progress_page(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Html<String>> {
    let status = query.status.as_deref().and_then(WorkflowStatus::parse);
    let notices = action_notices(query.action.as_deref());
    let view = ProgressView::build(&state.console, status, notices);
    Ok(Html(view.render()?))
}

// === API Endpoints ===

/// GET /api/briefings/:date
pub async fn api_briefing(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<BriefingPage>> {
    let date = parse_date(&raw)?;
    let page = load_briefing(
        state.store.as_ref(),
        date,
        &state.config.briefing.fallback_category,
    )
    .await;
    Ok(Json(page))
}

/// GET /api/briefings/:date/content - the briefing text exactly as displayed
///
/// A missing briefing answers 404; a store failure answers 500.
pub async fn api_briefing_content(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let date = parse_date(&raw)?;
    let briefing = state.store.briefing_by_date(date).await?;
    Ok(plain_text(briefing.content))
}

fn plain_text(content: String) -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], content).into_response()
}

/// GET /api/share/:date
pub async fn api_share(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let date = parse_date(&raw)?;
    let response = match state.snapshots.get(date) {
        Some(snapshot) => Json::<SharedBriefing>(snapshot.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// GET /api/share/:date/content - the snapshot text exactly as displayed
pub async fn api_share_content(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let date = parse_date(&raw)?;
    let response = match state.snapshots.get(date) {
        Some(snapshot) => plain_text(snapshot.content.clone()),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// Alert list with its header counts.
#[derive(Serialize)]
pub struct AlertsResponse {
    pub summary: AlertSummary,
    pub alerts: Vec<CrisisAlert>,
}

/// GET /api/alerts
pub async fn api_alerts(State(state): State<AppState>) -> Json<AlertsResponse> {
    Json(AlertsResponse {
        summary: AlertSummary::from_alerts(&state.console.alerts),
        alerts: state.console.alerts.clone(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkflowQuery {
    pub status: Option<String>,
}

/// Workflow runs, optionally filtered, with counts over all runs.
#[derive(Serialize)]
pub struct WorkflowsResponse {
    pub counts: StatusCounts,
    pub runs: Vec<WorkflowRun>,
}

/// GET /api/workflows?status=
pub async fn api_workflows(
    State(state): State<AppState>,
    Query(query): Query<WorkflowQuery>,
) -> Json<WorkflowsResponse> {
    let status = query.status.as_deref().and_then(WorkflowStatus::parse);
    Json(WorkflowsResponse {
        counts: StatusCounts::from_runs(&state.console.runs),
        runs: filter_runs(&state.console.runs, status)
            .into_iter()
            .cloned()
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::super::create_router;
    use super::*;
    use crate::{
        config::{AppConfig, SnapshotSource},
        core::store::{BriefingStore, DatabaseStore, FixtureStore},
        test_utils::{create_test_article, create_test_category, setup_test_db, setup_with_briefing},
    };
    use axum::{Router, body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(store: Arc<dyn BriefingStore>, config: AppConfig) -> Router {
        create_router(AppState::new(store, config))
    }

    fn fixture_app() -> Router {
        app_with(Arc::new(FixtureStore::new()), AppConfig::default())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(fixture_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_crisis_page() {
        let (status, body) = get(fixture_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("긴급"));
        assert!(body.contains("보도자료 작성"));
    }

    #[tokio::test]
    async fn test_briefing_page_for_fixture_date() {
        let (status, body) = get(fixture_app(), "/briefing?date=2025-09-08").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("2025년 9월 8일"));
        assert!(body.contains("재무 및 경영 관련 기사"));
    }

    #[tokio::test]
    async fn test_briefing_page_missing_date_shows_empty_state() {
        let (status, body) = get(fixture_app(), "/briefing?date=2025-09-06").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("해당 날짜의 브리핑이 없습니다"));
        assert!(!body.contains("데이터 로드 실패"));
    }

    #[tokio::test]
    async fn test_briefing_page_invalid_date_shows_empty_state() {
        let (status, body) = get(fixture_app(), "/briefing?date=yesterday").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("해당 날짜의 브리핑이 없습니다"));
    }

    #[tokio::test]
    async fn test_briefing_page_store_failure_shows_one_notice() {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        let app = app_with(Arc::new(DatabaseStore::new(db)), AppConfig::default());

        let (status, body) = get(app, "/briefing?date=2025-09-05").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("데이터 로드 실패").count(), 1);
    }

    #[tokio::test]
    async fn test_briefing_page_action_notice() {
        let (_, body) = get(fixture_app(), "/briefing?action=competitor-analysis").await;
        assert!(body.contains("경쟁사 분석 기능은 현재 개발 중입니다."));
    }

    #[tokio::test]
    async fn test_content_export_is_exact() {
        let (status, body) = get(fixture_app(), "/api/briefings/2025-09-05/content").await;
        assert_eq!(status, StatusCode::OK);

        let expected = crate::fixtures::briefings::briefing_for("2025-09-05")
            .unwrap()
            .content;
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_content_export_missing_date() {
        let (status, _) = get(fixture_app(), "/api/briefings/2025-09-06/content").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_content_export_store_failure_is_server_error() {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        let app = app_with(Arc::new(DatabaseStore::new(db)), AppConfig::default());

        let (status, _) = get(app, "/api/briefings/2025-09-05/content").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_share_content_export_is_exact() {
        let (status, body) = get(fixture_app(), "/api/share/2025-09-09/content").await;
        assert_eq!(status, StatusCode::OK);

        let table = crate::core::snapshot::SnapshotTable::builtin();
        let date = parse_date("2025-09-09").unwrap();
        assert_eq!(body, table.get(date).unwrap().content);

        let (status, _) = get(fixture_app(), "/api/share/2025-09-06/content").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_share_page_has_copy_action() {
        let (_, body) = get(fixture_app(), "/briefing/share/2025-09-09").await;
        assert!(body.contains("copy-button"));
        assert!(body.contains("복사 완료"));
    }

    #[tokio::test]
    async fn test_database_briefing_page_has_no_fixture_extras() {
        let (db, briefing) = setup_with_briefing(parse_date("2025-09-05").unwrap())
            .await
            .unwrap();
        let category = create_test_category(&db, briefing.id, "일반 기사").await.unwrap();
        create_test_article(&db, category.id, "KT 브랜드 캠페인", "다음뉴스")
            .await
            .unwrap();
        let app = app_with(Arc::new(DatabaseStore::new(db)), AppConfig::default());

        let (status, body) = get(app, "/briefing?date=2025-09-05").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("KT 브랜드 캠페인"));
        assert!(!body.contains("주요 키워드"));
        assert!(!body.contains("인사이트"));
        assert!(!body.contains("보안투자"));
    }

    #[tokio::test]
    async fn test_store_failure_page_has_no_fixture_extras() {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        let app = app_with(Arc::new(DatabaseStore::new(db)), AppConfig::default());

        let (_, body) = get(app, "/briefing?date=2025-09-05").await;
        assert!(body.contains("데이터 로드 실패"));
        assert!(!body.contains("주요 키워드"));
    }

    #[tokio::test]
    async fn test_briefing_without_articles_says_no_coverage() {
        let (db, _) = setup_with_briefing(parse_date("2025-09-05").unwrap())
            .await
            .unwrap();
        let app = app_with(Arc::new(DatabaseStore::new(db)), AppConfig::default());

        let (status, body) = get(app, "/briefing?date=2025-09-05").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("briefing-content"));
        assert!(body.contains("수집된 기사가 없습니다."));
        assert!(!body.contains("해당 날짜의 브리핑이 없습니다"));
    }

    #[tokio::test]
    async fn test_api_briefing_invalid_date_is_bad_request() {
        let (status, _) = get(fixture_app(), "/api/briefings/2025-13-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_briefing_from_database() {
        let db = setup_test_db().await.unwrap();
        let app = app_with(Arc::new(DatabaseStore::new(db)), AppConfig::default());

        let (status, body) = get(app, "/api/briefings/2025-09-05").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["briefing"].is_null());
        assert_eq!(json["stats"]["total"], 0);
        assert_eq!(json["notices"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_share_page() {
        let (status, body) = get(fixture_app(), "/briefing/share/2025-09-05").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("2025년 9월 5일"));
    }

    #[tokio::test]
    async fn test_share_page_unknown_date_is_not_found() {
        for uri in ["/briefing/share/2025-09-06", "/briefing/share/garbage"] {
            let (status, body) = get(fixture_app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.contains("브리핑을 찾을 수 없습니다"));
        }
    }

    #[tokio::test]
    async fn test_api_share_from_briefings() {
        let config = AppConfig {
            share: crate::config::settings::ShareConfig {
                source: SnapshotSource::Briefings,
            },
            ..AppConfig::default()
        };
        let app = app_with(Arc::new(FixtureStore::new()), config);

        let (status, body) = get(app, "/api/share/2025-09-05").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["stats"]["total"], 45);
        assert_eq!(json["stats"]["positive"], 31);
        assert_eq!(json["stats"]["caution"], 9);
    }

    #[tokio::test]
    async fn test_api_alerts() {
        let (status, body) = get(fixture_app(), "/api/alerts").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["alerts"].as_array().unwrap().len(), 3);
        assert_eq!(json["summary"]["danger"], 1);
        assert_eq!(json["alerts"][0]["level"], "danger");
    }

    #[tokio::test]
    async fn test_api_workflows_filter() {
        let (status, body) = get(fixture_app(), "/api/workflows?status=running").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["runs"].as_array().unwrap().len(), 2);
        assert_eq!(json["counts"]["success"], 3);
    }

    #[tokio::test]
    async fn test_progress_page() {
        let (status, body) = get(fixture_app(), "/progress?status=failed").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("언론사 RSS 수집"));
        assert!(!body.contains("다음 뉴스 수집"));
    }
}
