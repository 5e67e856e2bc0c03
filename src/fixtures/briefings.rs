//! Morning briefings served when no database is configured.

/// A dated briefing with its categorized coverage.
#[derive(Debug, Clone, Copy)]
pub struct BriefingFixture {
    /// `YYYY-MM-DD`
    pub date: &'static str,
    /// Report time as printed on the briefing
    pub report_at: &'static str,
    pub content: &'static str,
    /// Coverage volume reported for the day
    pub total_articles: usize,
    pub categories: &'static [CategoryFixture],
}

/// A coverage category within a briefing fixture.
#[derive(Debug, Clone, Copy)]
pub struct CategoryFixture {
    pub name: &'static str,
    /// Coverage volume reported for the category
    pub count: usize,
    pub articles: &'static [ArticleFixture],
}

/// A representative article within a category.
#[derive(Debug, Clone, Copy)]
pub struct ArticleFixture {
    pub title: &'static str,
    pub source: &'static str,
    pub url: &'static str,
    /// Number of outlets carrying the story
    pub count: usize,
}

/// Byline used for fixture articles.
pub const FIXTURE_JOURNALIST: &str = "기자명";

pub static BRIEFINGS: &[BriefingFixture] = &[
    BriefingFixture {
        date: "2025-09-05",
        report_at: "2025년 9월 5일 오전 8시",
        content: "금일 KT 관련 주요 보도입니다.
보안·AI 분야 투자와 서비스 상용화가 집중 보도되었습니다.
특히 보이스피싱 탐지 2.0 상용화와 보안 투자 확대가 부각되었습니다.

업계 동향으로는 AI 기반 미디어·플랫폼 확산과 6G·위성 협력 이슈가 지속 보도되고 있습니다.",
        total_articles: 45,
        categories: &[
            CategoryFixture {
                name: "재무 및 경영 관련 기사",
                count: 25,
                articles: &[
                    ArticleFixture {
                        title: "“잃는 것보다 선제 투자가 낫다”…KT 정보보안 1조 투자",
                        source: "뉴시스",
                        url: "https://www.newsis.com/view/NISX20250715_0003252267",
                        count: 12,
                    },
                    ArticleFixture {
                        title: "KT, AI 보이스피싱 탐지 2.0 상용화",
                        source: "다음뉴스",
                        url: "https://v.daum.net/v/20250729143405675",
                        count: 13,
                    },
                ],
            },
            CategoryFixture {
                name: "일반 기사",
                count: 12,
                articles: &[
                    ArticleFixture {
                        title: "KT, 브랜드 캠페인 영상 공개",
                        source: "다음뉴스",
                        url: "https://v.daum.net/v/20240901090255927",
                        count: 6,
                    },
                    ArticleFixture {
                        title: "경주시·KT, 영업장 6곳 “기후동맹 쉼터” 운영",
                        source: "다음뉴스",
                        url: "https://v.daum.net/v/20240807225538660",
                        count: 6,
                    },
                ],
            },
            CategoryFixture {
                name: "업계 동향",
                count: 8,
                articles: &[
                    ArticleFixture {
                        title: "KT, AI 특화 기술로 미디어 혁신 추진",
                        source: "세계일보",
                        url: "https://www.segye.com/newsView/20240429514791",
                        count: 4,
                    },
                    ArticleFixture {
                        title: "KT·KT SAT·KAI, 6G·저궤도 위성 협력",
                        source: "뉴스1",
                        url: "https://www.news1.kr/photos/6963099",
                        count: 4,
                    },
                ],
            },
        ],
    },
    BriefingFixture {
        date: "2025-09-08",
        report_at: "2025년 9월 8일 오전 8시",
        content: "금일 KT 관련 주요 보도입니다.
미디어·콘텐츠 사업 전략과 AI 투자·플랫폼 확장이 비중 있게 다뤄졌습니다.
OTT 경쟁 심화 속 대응 전략과 AI 기반 미디어 서비스 확대가 눈에 띕니다.",
        total_articles: 38,
        categories: &[
            CategoryFixture {
                name: "재무 및 경영 관련 기사",
                count: 22,
                articles: &[
                    ArticleFixture {
                        title: "“글로벌 OTT 공세에 위기…콘텐츠·AI로 반격”",
                        source: "뉴데일리경제",
                        url: "https://biz.newdaily.co.kr/site/data/html/2025/04/16/2025041600196.html",
                        count: 11,
                    },
                    ArticleFixture {
                        title: "KT, AI 특화 기술로 미디어·콘텐츠 혁신",
                        source: "세계일보",
                        url: "https://www.segye.com/newsView/20240429514791",
                        count: 11,
                    },
                ],
            },
            CategoryFixture {
                name: "일반 기사",
                count: 10,
                articles: &[
                    ArticleFixture {
                        title: "KT, 로봇·AICC 등 디지털 전환 협력",
                        source: "디지털데일리",
                        url: "https://www.ddaily.co.kr/page/view/2024031309570536423",
                        count: 5,
                    },
                    ArticleFixture {
                        title: "KT, 브랜드 캠페인 철학 담은 영상 공개",
                        source: "다음뉴스",
                        url: "https://v.daum.net/v/20240901090255927",
                        count: 5,
                    },
                ],
            },
            CategoryFixture {
                name: "업계 동향",
                count: 6,
                articles: &[
                    ArticleFixture {
                        title: "KT, AI 숏폼·지니TV AI 에이전트 전략",
                        source: "서울경제 시그널",
                        url: "https://signalm.sedaily.com/NewsView/2GRK1U233H/GK01",
                        count: 3,
                    },
                    ArticleFixture {
                        title: "KT, AI 보이스피싱 탐지 2.0",
                        source: "다음뉴스",
                        url: "https://v.daum.net/v/20250729143405675",
                        count: 3,
                    },
                ],
            },
        ],
    },
    BriefingFixture {
        date: "2025-09-09",
        report_at: "2025년 9월 9일 오전 8시",
        content: "금일 KT 관련 주요 보도입니다.
AI·플랫폼 중심 사업 전환과 6G·위성·디지털 전환 이슈가 이어지고 있습니다.
이슈의 연속성 차원에서 전일 보도와 동일 트렌드가 지속되었습니다.",
        total_articles: 42,
        categories: &[
            CategoryFixture {
                name: "재무 및 경영 관련 기사",
                count: 24,
                articles: &[
                    ArticleFixture {
                        title: "KT알파, 미래 성장전략 N.EX.T 발표",
                        source: "디지털데일리",
                        url: "https://www1.ddaily.co.kr/page/view/2023061612010790068",
                        count: 12,
                    },
                    ArticleFixture {
                        title: "KT, AI 특화 기술로 미디어 혁신",
                        source: "세계일보",
                        url: "https://www.segye.com/newsView/20240429514791",
                        count: 12,
                    },
                ],
            },
            CategoryFixture {
                name: "일반 기사",
                count: 11,
                articles: &[
                    ArticleFixture {
                        title: "KT, 지니TV AI트래블뷰 캐나다편 공개",
                        source: "네이트뉴스",
                        url: "https://news.nate.com/view/20240923n19825",
                        count: 6,
                    },
                    ArticleFixture {
                        title: "KT, AI 고객센터·로봇 협력",
                        source: "디지털데일리",
                        url: "https://www.ddaily.co.kr/page/view/2024031309570536423",
                        count: 5,
                    },
                ],
            },
            CategoryFixture {
                name: "업계 동향",
                count: 7,
                articles: &[
                    ArticleFixture {
                        title: "국내 통신사, 6G·저궤도 위성 협력 확대",
                        source: "뉴스1",
                        url: "https://www.news1.kr/photos/6963099",
                        count: 4,
                    },
                    ArticleFixture {
                        title: "KT, AI 숏폼·AI 에이전트 전략",
                        source: "서울경제 시그널",
                        url: "https://signalm.sedaily.com/NewsView/2GRK1U233H/GK01",
                        count: 3,
                    },
                ],
            },
        ],
    },
];

/// Finds the fixture briefing for a `YYYY-MM-DD` date.
#[must_use]
pub fn briefing_for(date: &str) -> Option<&'static BriefingFixture> {
    BRIEFINGS.iter().find(|briefing| briefing.date == date)
}
