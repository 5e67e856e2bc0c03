//! Static crisis-console and workflow data.

use crate::core::crisis::{
    ActivityEntry, AlertLevel, AlertStatus, CrisisAlert, MetricStatus, SystemStatus,
};
use crate::core::workflow::{LogEntry, LogLevel, WorkflowRun, WorkflowStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

fn clock(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap_or_default()
}

#[must_use]
pub fn crisis_alerts() -> Vec<CrisisAlert> {
    vec![
        CrisisAlert {
            id: 1,
            level: AlertLevel::Danger,
            title: "“KT 전 지사에 사제폭탄 설치” 협박글…경찰 추적".to_string(),
            url: "https://v.daum.net/v/20250826131837036".to_string(),
            source: "다음뉴스".to_string(),
            journalist_name: "문경근".to_string(),
            journalist_phone: "010-1234-5678".to_string(),
            reason: "공공 안전 위협과 기업 이미지 훼손 위험. 사실 여부와 무관하게 대중 불안 및 고객 이탈 우려."
                .to_string(),
            key_sentence: "인터넷 커뮤니티에 “KT 지사 건물에 폭탄을 설치하겠다”는 글이 올라와 경찰이 작성자 추적에 착수했다."
                .to_string(),
            action_plan: "경찰과 공조한 사실관계 공지, 안전 점검 상황을 실시간으로 공유하며, 고객센터 비상 응대 및 영업장 보안을 강화해야 합니다."
                .to_string(),
            created_at: utc(2025, 8, 26, 4, 30),
            status: AlertStatus::Active,
        },
        CrisisAlert {
            id: 2,
            level: AlertLevel::Warning,
            title: "“방통위 결정 무시” 논란…SKT·KT 소비자 뒷전 비판".to_string(),
            url: "https://v.daum.net/v/20250904173115436".to_string(),
            source: "다음뉴스".to_string(),
            journalist_name: "김지호".to_string(),
            journalist_phone: "010-2345-6789".to_string(),
            reason: "규제기관과의 갈등 노출로 평판·정책 리스크 확대 우려.".to_string(),
            key_sentence: "일각에선 통신사의 소비자 보호 의무를 소홀히 했다는 지적이 제기됐다."
                .to_string(),
            action_plan: "방통위 협의체를 즉시 제안하고, 이행 일정과 소비자 보호 조치를 공개하며, 개선 현황을 정기적으로 보고해야 합니다."
                .to_string(),
            created_at: utc(2025, 9, 4, 8, 15),
            status: AlertStatus::Monitoring,
        },
        CrisisAlert {
            id: 3,
            level: AlertLevel::Info,
            title: "KT 인터넷 대규모 장애, 라우팅 오류로 확인(2021.10.25)".to_string(),
            url: "https://v.daum.net/v/20211029170049419".to_string(),
            source: "다음뉴스".to_string(),
            journalist_name: "안지혜".to_string(),
            journalist_phone: "010-3456-7890".to_string(),
            reason: "과거 이슈이나 반복 우려 상존. 장애 대응 표준 절차 점검 필요.".to_string(),
            key_sentence: "KT는 디도스 공격이 아닌 내부 라우팅 오류였다고 정정했다.".to_string(),
            action_plan: "변경관리 및 롤백 절차를 재점검하고, 재발방지 대책을 대외에 공개하며, 모의훈련을 정례화해야 합니다."
                .to_string(),
            created_at: utc(2021, 10, 29, 8, 45),
            status: AlertStatus::Resolved,
        },
    ]
}

#[must_use]
pub fn recent_activity() -> Vec<ActivityEntry> {
    let entry = |workflow: &str, at, status, duration: &str| ActivityEntry {
        workflow: workflow.to_string(),
        finished_at: at,
        status,
        duration: duration.to_string(),
    };

    vec![
        entry("네이버 뉴스 모니터링", utc(2025, 9, 9, 14, 58), WorkflowStatus::Success, "실시간"),
        entry("위험 기사 감지", utc(2025, 9, 9, 14, 55), WorkflowStatus::Success, "30초"),
        entry("다음 뉴스 수집", utc(2025, 9, 9, 14, 48), WorkflowStatus::Success, "2분 15초"),
        entry("키워드 분석", utc(2025, 9, 9, 14, 42), WorkflowStatus::Success, "1분 8초"),
        entry("RSS 피드 수집", utc(2025, 9, 9, 14, 28), WorkflowStatus::Failed, "45초"),
    ]
}

#[must_use]
pub fn system_status() -> Vec<SystemStatus> {
    let updated = utc(2025, 9, 9, 15, 0);
    let status = |id, metric: &str, value, unit: &str, status| SystemStatus {
        id,
        metric: metric.to_string(),
        value,
        unit: unit.to_string(),
        status,
        last_updated: updated,
    };

    vec![
        status(1, "뉴스 수집률", 98.5, "%", MetricStatus::Normal),
        status(2, "AI 분석 정확도", 94.2, "%", MetricStatus::Normal),
        status(3, "알림 응답 시간", 2.3, "초", MetricStatus::Warning),
        status(4, "시스템 가동률", 99.9, "%", MetricStatus::Normal),
    ]
}

#[must_use]
pub fn workflow_runs() -> Vec<WorkflowRun> {
    let run = |id, name: &str, started_at, duration: &str, status, error: Option<&str>, progress, next_run: &str| {
        WorkflowRun {
            id,
            name: name.to_string(),
            started_at,
            duration: duration.to_string(),
            status,
            error: error.map(str::to_string),
            progress,
            next_run: next_run.to_string(),
        }
    };

    vec![
        run(6734, "네이버 뉴스 모니터링", local(2025, 6, 22, 10, 48), "실시간", WorkflowStatus::Running, None, 99, "연속 실행"),
        run(6733, "다음 뉴스 수집", local(2025, 6, 22, 10, 12), "30초", WorkflowStatus::Success, None, 100, "10분 후"),
        run(6732, "조간 브리핑 생성", local(2025, 6, 22, 9, 0), "2분 15초", WorkflowStatus::Success, None, 100, "내일 09:00"),
        run(6731, "위험도 분석", local(2025, 6, 22, 9, 30), "1분 8초", WorkflowStatus::Running, None, 65, "진행 중"),
        run(6730, "키워드 매칭", local(2025, 6, 22, 9, 15), "45초", WorkflowStatus::Success, None, 100, "5분 후"),
        run(
            6729,
            "언론사 RSS 수집",
            local(2025, 6, 22, 8, 58),
            "45초",
            WorkflowStatus::Failed,
            Some("HTTP 오류 404: RSS 피드 접근 불가"),
            0,
            "재시도 대기",
        ),
    ]
}

#[must_use]
pub fn workflow_logs() -> Vec<LogEntry> {
    let log = |time, level, message: &str, workflow: &str| LogEntry {
        time,
        level,
        message: message.to_string(),
        workflow: workflow.to_string(),
    };

    vec![
        log(clock(10, 48, 32), LogLevel::Info, "네이버 뉴스 API 연결 성공", "네이버 뉴스 모니터링"),
        log(clock(10, 47, 15), LogLevel::Success, "키워드 매칭 완료 (127건 처리)", "키워드 매칭"),
        log(clock(10, 45, 22), LogLevel::Warning, "응답 시간 지연 감지 (3.2초)", "위험도 분석"),
        log(clock(10, 43, 8), LogLevel::Error, "RSS 피드 접근 실패", "언론사 RSS 수집"),
        log(clock(10, 41, 55), LogLevel::Info, "조간 브리핑 PDF 생성 완료", "조간 브리핑 생성"),
    ]
}
