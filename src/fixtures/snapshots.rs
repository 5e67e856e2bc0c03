//! Hand-prepared snapshot table behind the shared briefing links.

/// A shareable briefing snapshot with its published figures.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotFixture {
    /// `YYYY-MM-DD`
    pub date: &'static str,
    pub report_at: &'static str,
    pub content: &'static str,
    pub categories: &'static [SnapshotCategoryFixture],
    /// total, positive, caution, sources as published
    pub stats: (usize, usize, usize, usize),
}

#[derive(Debug, Clone, Copy)]
pub struct SnapshotCategoryFixture {
    pub name: &'static str,
    pub count: usize,
    pub sources: &'static [SnapshotSourceFixture],
}

#[derive(Debug, Clone, Copy)]
pub struct SnapshotSourceFixture {
    pub name: &'static str,
    pub title: &'static str,
    pub count: usize,
    pub url: &'static str,
}

pub static SNAPSHOTS: &[SnapshotFixture] = &[
    SnapshotFixture {
        date: "2025-09-05",
        report_at: "2025년 9월 5일",
        content: "금일 당사 관련 주요 언론보도 현황입니다.

개인정보 보호 강화 방안에 대해 게재되었습니다.
더불어 5G 네트워크 품질 개선 노력이라고 언급되었습니다.

주요 업계 동향입니다.
윤석열 대통령의 지시에 따라
정부는 개인정보보호법 개정에 나설 예정입니다.
기존 과징금은 매출액의 3%로 강화되고, 개인정보 영향평가가 의무화될 예정입니다.
(https://www.chosun.com/economy/tech_it/2024/09/05/privacy-law-reform/)",
        categories: &[
            SnapshotCategoryFixture {
                name: "재무 및 경영 관련 기사",
                count: 25,
                sources: &[
                    SnapshotSourceFixture {
                        name: "조선일보",
                        title: "KT, 개인정보 보호 투자 확대",
                        count: 12,
                        url: "https://www.chosun.com/economy/tech_it/2024/09/05/kt-privacy-investment/",
                    },
                    SnapshotSourceFixture {
                        name: "한국경제",
                        title: "통신업계 규제 강화 대응",
                        count: 13,
                        url: "https://www.hankyung.com/economy/article/2024090512341",
                    },
                ],
            },
            SnapshotCategoryFixture {
                name: "일반 기사",
                count: 15,
                sources: &[
                    SnapshotSourceFixture {
                        name: "중앙일보",
                        title: "5G 네트워크 품질 개선 현황",
                        count: 8,
                        url: "https://www.joongang.co.kr/article/25199876",
                    },
                    SnapshotSourceFixture {
                        name: "동아일보",
                        title: "통신 3사 서비스 경쟁",
                        count: 7,
                        url: "https://www.donga.com/news/Economy/article/all/20240905/127456789/1",
                    },
                ],
            },
        ],
        stats: (40, 28, 8, 12),
    },
    SnapshotFixture {
        date: "2025-09-08",
        report_at: "2025년 9월 8일",
        content: "금일 당사 관련 주요 언론보도 현황입니다.

AI 서비스 확장 계획에 대해 집중 보도되었습니다.
더불어 디지털 헬스케어 사업 진출이라고 언급되었습니다.

주요 업계 동향입니다.
과학기술정보통신부 장관의 발표에 따라
정부는 AI 산업 육성법 제정에 나설 예정입니다.
기존 규제 샌드박스는 확대되고, AI 윤리 가이드라인이 의무화될 예정입니다.
(https://www.etnews.com/20240908000123)",
        categories: &[
            SnapshotCategoryFixture {
                name: "재무 및 경영 관련 기사",
                count: 35,
                sources: &[
                    SnapshotSourceFixture {
                        name: "전자신문",
                        title: "KT, AI 플랫폼 투자 본격화",
                        count: 18,
                        url: "https://www.etnews.com/20240908000456",
                    },
                    SnapshotSourceFixture {
                        name: "디지털타임스",
                        title: "통신사 AI 경쟁 가속화",
                        count: 17,
                        url: "https://www.dt.co.kr/contents.html?article_no=2024090802109931731001",
                    },
                ],
            },
            SnapshotCategoryFixture {
                name: "기술 및 혁신",
                count: 22,
                sources: &[
                    SnapshotSourceFixture {
                        name: "아이뉴스24",
                        title: "KT, 헬스케어 AI 솔루션 공개",
                        count: 12,
                        url: "https://www.inews24.com/view/1234567",
                    },
                    SnapshotSourceFixture {
                        name: "ZDNet Korea",
                        title: "통신업계 디지털 전환 가속",
                        count: 10,
                        url: "https://zdnet.co.kr/view/?no=20240908123456",
                    },
                ],
            },
        ],
        stats: (57, 45, 6, 16),
    },
    SnapshotFixture {
        date: "2025-09-09",
        report_at: "2025년 9월 9일",
        content: "금일 당사 관련 주요 언론보도 현황입니다.

ESG 경영 성과에 대해 긍정적으로 보도되었습니다.
더불어 탄소중립 달성 로드맵이라고 언급되었습니다.

주요 업계 동향입니다.
환경부 장관의 발표에 따라
정부는 탄소중립 기본법 시행령 개정에 나설 예정입니다.
기존 탄소배출권은 확대되고, 녹색금융 지원이 강화될 예정입니다.
(https://www.mk.co.kr/news/economy/10845123)",
        categories: &[
            SnapshotCategoryFixture {
                name: "ESG 및 지속가능경영",
                count: 28,
                sources: &[
                    SnapshotSourceFixture {
                        name: "매일경제",
                        title: "KT, ESG 경영 우수 평가",
                        count: 15,
                        url: "https://www.mk.co.kr/news/economy/10845456",
                    },
                    SnapshotSourceFixture {
                        name: "서울경제",
                        title: "통신업계 친환경 투자 확대",
                        count: 13,
                        url: "https://www.sedaily.com/NewsView/29ABCD123",
                    },
                ],
            },
            SnapshotCategoryFixture {
                name: "사회공헌 활동",
                count: 18,
                sources: &[
                    SnapshotSourceFixture {
                        name: "연합뉴스",
                        title: "KT, 디지털 격차 해소 사업",
                        count: 10,
                        url: "https://www.yna.co.kr/view/AKR20240909123000017",
                    },
                    SnapshotSourceFixture {
                        name: "뉴시스",
                        title: "통신 3사 사회적 책임 강화",
                        count: 8,
                        url: "https://newsis.com/view/?id=NISX20240909_0002456789",
                    },
                ],
            },
        ],
        stats: (46, 38, 4, 14),
    },
];
