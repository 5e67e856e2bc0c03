//! User-facing notices (toasts) with fixed, localized messages.

use serde::Serialize;

/// How long a notice stays on screen.
pub const NOTICE_DURATION_MS: u32 = 3000;

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    /// Informational
    Default,
    /// Failure
    Destructive,
}

/// A single toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Short headline
    pub title: String,
    /// One-sentence body
    pub description: String,
    /// Visual weight
    pub variant: NoticeVariant,
    /// Display duration in milliseconds
    pub duration_ms: u32,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant,
            duration_ms: NOTICE_DURATION_MS,
        }
    }

    /// Briefing data could not be loaded from the store.
    #[must_use]
    pub fn load_failed() -> Self {
        Self::new(
            "데이터 로드 실패",
            "브리핑 데이터를 불러오는 중 오류가 발생했습니다.",
            NoticeVariant::Destructive,
        )
    }

    /// Briefing content was copied to the clipboard.
    #[must_use]
    pub fn copy_succeeded() -> Self {
        Self::new(
            "복사 완료",
            "경영진 브리핑이 클립보드에 복사되었습니다.",
            NoticeVariant::Default,
        )
    }

    /// Copying to the clipboard failed.
    #[must_use]
    pub fn copy_failed() -> Self {
        Self::new(
            "복사 실패",
            "클립보드 복사 중 오류가 발생했습니다.",
            NoticeVariant::Destructive,
        )
    }

    /// A quick action that is not available yet.
    #[must_use]
    pub fn coming_soon(action: Option<QuickAction>) -> Self {
        let description = action.map_or_else(
            || "해당 기능은 현재 개발 중입니다.".to_string(),
            |action| format!("{} 기능은 현재 개발 중입니다.", action.label()),
        );
        Self::new("준비중입니다", description, NoticeVariant::Default)
    }

    /// True for failure notices.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Dashboard buttons that only announce themselves as "coming soon".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// 보도자료 작성
    PressRelease,
    /// 경쟁사 분석
    CompetitorAnalysis,
    /// 소셜미디어 확인
    SocialMedia,
    /// 긴급 대응팀 호출
    EmergencyTeam,
}

impl QuickAction {
    /// Every quick action, in display order.
    pub const ALL: [Self; 4] = [
        Self::PressRelease,
        Self::CompetitorAnalysis,
        Self::SocialMedia,
        Self::EmergencyTeam,
    ];

    /// URL-safe identifier used in `?action=`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PressRelease => "press-release",
            Self::CompetitorAnalysis => "competitor-analysis",
            Self::SocialMedia => "social-media",
            Self::EmergencyTeam => "emergency-team",
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PressRelease => "보도자료 작성",
            Self::CompetitorAnalysis => "경쟁사 분석",
            Self::SocialMedia => "소셜미디어 확인",
            Self::EmergencyTeam => "긴급 대응팀 호출",
        }
    }

    /// Looks an action up by its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_is_destructive() {
        let notice = Notice::load_failed();
        assert!(notice.is_destructive());
        assert_eq!(notice.title, "데이터 로드 실패");
        assert_eq!(notice.duration_ms, 3000);
    }

    #[test]
    fn test_copy_notices() {
        assert!(!Notice::copy_succeeded().is_destructive());
        assert!(Notice::copy_failed().is_destructive());
    }

    #[test]
    fn test_coming_soon_names_the_action() {
        let notice = Notice::coming_soon(Some(QuickAction::CompetitorAnalysis));
        assert_eq!(notice.title, "준비중입니다");
        assert_eq!(notice.description, "경쟁사 분석 기능은 현재 개발 중입니다.");

        let generic = Notice::coming_soon(None);
        assert_eq!(generic.description, "해당 기능은 현재 개발 중입니다.");
    }

    #[test]
    fn test_quick_action_slug_lookup() {
        for action in QuickAction::ALL {
            assert_eq!(QuickAction::from_slug(action.slug()), Some(action));
        }
        assert_eq!(QuickAction::from_slug("launch-rockets"), None);
    }
}
