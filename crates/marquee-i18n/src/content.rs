//! Typed per-language portfolio content behind the tab sections.
//!
//! This is the "independent per-tab content lookup": the tab state
//! machine picks a section, the presentation layer picks the table for
//! the current language from here.

use crate::Language;

#[derive(Clone, Copy, Debug)]
pub struct TimelineItem {
    pub period: &'static str,
    pub role: &'static str,
    pub org: Option<&'static str>,
    pub link: Option<&'static str>,
    pub highlight: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillSet {
    pub creative: &'static [&'static str],
    pub communication: &'static [&'static str],
    pub technical: &'static [&'static str],
    pub tools: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct EducationItem {
    pub institution: &'static str,
    pub period: &'static str,
    pub degree: Option<&'static str>,
    pub certificate_title: Option<&'static str>,
    pub highlight: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct PortfolioContent {
    pub timeline: &'static [TimelineItem],
    pub skills: SkillSet,
    pub achievements: &'static [&'static str],
    pub education: &'static [EducationItem],
}

pub fn portfolio_content(lang: Language) -> &'static PortfolioContent {
    match lang {
        Language::Uz => &UZ_CONTENT,
        Language::Ru => &RU_CONTENT,
        Language::En => &EN_CONTENT,
    }
}

static EN_CONTENT: PortfolioContent = PortfolioContent {
    timeline: &[
        TimelineItem {
            period: "Mar 2025 – Present",
            role: "Script Writer",
            org: Some("Dr. Mirkamol Nosirjonov"),
            link: Some("https://www.instagram.com/dr.mirkamol_nosirjon0v"),
            highlight: true,
        },
        TimelineItem {
            period: "Sep 2024 – Present",
            role: "Script Writer & Content Manager",
            org: Some("PiimaOlympiad & MittiMatematik"),
            link: Some("https://t.me/piimaolympiad_edu"),
            highlight: true,
        },
        TimelineItem {
            period: "Dec 2024 – Feb 2025",
            role: "Script Writer",
            org: Some("Amir Temurovich | Procontent"),
            link: Some("https://www.instagram.com/amirtemurov.ch"),
            highlight: false,
        },
        TimelineItem {
            period: "May 2024 – Aug 2024",
            role: "Copywriter / Sales Manager",
            org: Some("PiimaOlympiad"),
            link: None,
            highlight: false,
        },
        TimelineItem {
            period: "May 2023 – Sep 2024",
            role: "English Tutor",
            org: Some("PiimaOlympiad"),
            link: None,
            highlight: false,
        },
        TimelineItem {
            period: "Sep 2019 – May 2024",
            role: "Leader of the Youth Union",
            org: None,
            link: None,
            highlight: false,
        },
    ],
    skills: SkillSet {
        creative: &["Creative Writing", "Marketing / Sales", "Team Working"],
        communication: &[
            "Communication Skills",
            "Problem-Solving",
            "Administrative Management",
        ],
        technical: &["Canva", "CapCut", "MS Word", "MS Excel", "MS PowerPoint"],
        tools: &["Google Docs", "Google Sheets", "Google Slides", "C++", "Swift"],
    },
    achievements: &[
        "Creative Writer & Scenarist – Awarded by Umida Kenjayeva",
        "Ulugbek vorislari – Semi-finalist",
        "AIMO – Bronze Medal",
        "SEAMO – Bronze Medal (2x)",
        "English – C1 Level",
    ],
    education: &[
        EducationItem {
            institution: "Presidential School of Khiva",
            period: "2020 – 2026",
            degree: Some("Secondary education, STEM track"),
            certificate_title: None,
            highlight: true,
        },
        EducationItem {
            institution: "PiimaOlympiad Academy",
            period: "2023",
            degree: None,
            certificate_title: Some("Content Marketing Certificate"),
            highlight: false,
        },
    ],
};

static RU_CONTENT: PortfolioContent = PortfolioContent {
    timeline: &[
        TimelineItem {
            period: "Март 2025 – Настоящее время",
            role: "Сценарист",
            org: Some("Др. Миркамол Носиржонов"),
            link: Some("https://www.instagram.com/dr.mirkamol_nosirjon0v"),
            highlight: true,
        },
        TimelineItem {
            period: "Сент 2024 – Настоящее время",
            role: "Сценарист и контент-менеджер",
            org: Some("PiimaOlympiad и MittiMatematik"),
            link: Some("https://t.me/piimaolympiad_edu"),
            highlight: true,
        },
        TimelineItem {
            period: "Дек 2024 – Фев 2025",
            role: "Сценарист",
            org: Some("Амир Темурович | Procontent"),
            link: Some("https://www.instagram.com/amirtemurov.ch"),
            highlight: false,
        },
        TimelineItem {
            period: "Май 2024 – Авг 2024",
            role: "Копирайтер / Менеджер по продажам",
            org: Some("PiimaOlympiad"),
            link: None,
            highlight: false,
        },
        TimelineItem {
            period: "Май 2023 – Сент 2024",
            role: "Репетитор английского",
            org: Some("PiimaOlympiad"),
            link: None,
            highlight: false,
        },
        TimelineItem {
            period: "Сент 2019 – Май 2024",
            role: "Лидер союза молодёжи",
            org: None,
            link: None,
            highlight: false,
        },
    ],
    skills: SkillSet {
        creative: &["Креативное письмо", "Маркетинг / Продажи", "Работа в команде"],
        communication: &[
            "Коммуникабельность",
            "Решение проблем",
            "Административное управление",
        ],
        technical: &["Canva", "CapCut", "MS Word", "MS Excel", "MS PowerPoint"],
        tools: &["Google Docs", "Google Sheets", "Google Slides", "C++", "Swift"],
    },
    achievements: &[
        "Креативный автор и сценарист – награда от Умиды Кенжаевой",
        "Ulugbek vorislari – полуфиналист",
        "AIMO – бронзовая медаль",
        "SEAMO – бронзовая медаль (2x)",
        "Английский – уровень C1",
    ],
    education: &[
        EducationItem {
            institution: "Президентская школа Хивы",
            period: "2020 – 2026",
            degree: Some("Среднее образование, STEM-направление"),
            certificate_title: None,
            highlight: true,
        },
        EducationItem {
            institution: "Академия PiimaOlympiad",
            period: "2023",
            degree: None,
            certificate_title: Some("Сертификат по контент-маркетингу"),
            highlight: false,
        },
    ],
};

static UZ_CONTENT: PortfolioContent = PortfolioContent {
    timeline: &[
        TimelineItem {
            period: "Mart 2025 – Hozirgacha",
            role: "Ssenariy muallifi",
            org: Some("Dr. Mirkamol Nosirjonov"),
            link: Some("https://www.instagram.com/dr.mirkamol_nosirjon0v"),
            highlight: true,
        },
        TimelineItem {
            period: "Sent 2024 – Hozirgacha",
            role: "Ssenariy muallifi va kontent menejeri",
            org: Some("PiimaOlympiad va MittiMatematik"),
            link: Some("https://t.me/piimaolympiad_edu"),
            highlight: true,
        },
        TimelineItem {
            period: "Dek 2024 – Fev 2025",
            role: "Ssenariy muallifi",
            org: Some("Amir Temurovich | Procontent"),
            link: Some("https://www.instagram.com/amirtemurov.ch"),
            highlight: false,
        },
        TimelineItem {
            period: "May 2024 – Avg 2024",
            role: "Kopirayter / Sotuv menejeri",
            org: Some("PiimaOlympiad"),
            link: None,
            highlight: false,
        },
        TimelineItem {
            period: "May 2023 – Sent 2024",
            role: "Ingliz tili repetitori",
            org: Some("PiimaOlympiad"),
            link: None,
            highlight: false,
        },
        TimelineItem {
            period: "Sent 2019 – May 2024",
            role: "Yoshlar ittifoqi yetakchisi",
            org: None,
            link: None,
            highlight: false,
        },
    ],
    skills: SkillSet {
        creative: &["Ijodiy yozish", "Marketing / Sotuv", "Jamoada ishlash"],
        communication: &[
            "Muloqot ko‘nikmalari",
            "Muammolarni hal qilish",
            "Ma'muriy boshqaruv",
        ],
        technical: &["Canva", "CapCut", "MS Word", "MS Excel", "MS PowerPoint"],
        tools: &["Google Docs", "Google Sheets", "Google Slides", "C++", "Swift"],
    },
    achievements: &[
        "Ijodiy yozuvchi va ssenarist – Umida Kenjayeva mukofoti",
        "Ulug‘bek vorislari – yarim finalchi",
        "AIMO – bronza medali",
        "SEAMO – bronza medali (2x)",
        "Ingliz tili – C1 daraja",
    ],
    education: &[
        EducationItem {
            institution: "Xiva Prezident maktabi",
            period: "2020 – 2026",
            degree: Some("O‘rta ta'lim, STEM yo‘nalishi"),
            certificate_title: None,
            highlight: true,
        },
        EducationItem {
            institution: "PiimaOlympiad akademiyasi",
            period: "2023",
            degree: None,
            certificate_title: Some("Kontent-marketing sertifikati"),
            highlight: false,
        },
    ],
};
