//! Domain records shown on the site: services, partners, clients, events and
//! articles.
//!
//! Records are read-only fixtures. Display text is stored inline per language
//! as [`Localized`] values rather than through content bundles, so a record
//! and its translations travel together in `content/data/*.json`.
//!
//! Classifiers (`category`, `sector`, `type`) and icons are closed enums. A
//! fixture naming an unknown icon or category fails to load instead of
//! silently falling back.

use crate::i18n::Language;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A value available in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Localized<T> {
    pub en: T,
    pub ar: T,
}

impl<T> Localized<T> {
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Icon shown next to a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Target,
    BookOpen,
    Settings,
    Cpu,
    Layers,
    Users,
    Award,
    Globe,
}

impl IconKind {
    pub fn css_class(self) -> &'static str {
        match self {
            IconKind::Target => "icon-target",
            IconKind::BookOpen => "icon-book-open",
            IconKind::Settings => "icon-settings",
            IconKind::Cpu => "icon-cpu",
            IconKind::Layers => "icon-layers",
            IconKind::Users => "icon-users",
            IconKind::Award => "icon-award",
            IconKind::Globe => "icon-globe",
        }
    }

    /// SVG path data on a 24×24 viewBox, stroked with `currentColor`.
    pub fn svg_path(self) -> &'static str {
        match self {
            IconKind::Target => {
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4"
            }
            IconKind::BookOpen => "M2 4h6a4 4 0 0 1 4 4v13a3 3 0 0 0-3-3H2zM22 4h-6a4 4 0 0 0-4 4v13a3 3 0 0 1 3-3h7z",
            IconKind::Settings => "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8M12 2v3M12 19v3M2 12h3M19 12h3M5 5l2 2M17 17l2 2M5 19l2-2M17 7l2-2",
            IconKind::Cpu => "M6 6h12v12H6zM9 9h6v6H9zM9 2v4M15 2v4M9 18v4M15 18v4M2 9h4M2 15h4M18 9h4M18 15h4",
            IconKind::Layers => "M12 2l10 5l-10 5l-10-5zM2 12l10 5l10-5M2 17l10 5l10-5",
            IconKind::Users => "M9 11a4 4 0 1 0 0-8a4 4 0 1 0 0 8M1 21v-2a4 4 0 0 1 4-4h8a4 4 0 0 1 4 4v2M17 3a4 4 0 0 1 0 8M23 21v-2a4 4 0 0 0-3-4",
            IconKind::Award => "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12M8.2 13L7 22l5-3l5 3l-1.2-9",
            IconKind::Globe => "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20M2 12h20M12 2a15 15 0 0 1 0 20M12 2a15 15 0 0 0 0 20",
        }
    }
}

// =============================================================================
// Classifiers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Consultation,
    Training,
    Simulation,
    Software,
}

impl ServiceCategory {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (ServiceCategory::Consultation, Language::En) => "Consultation",
            (ServiceCategory::Consultation, Language::Ar) => "الاستشارات",
            (ServiceCategory::Training, Language::En) => "Training",
            (ServiceCategory::Training, Language::Ar) => "التدريب",
            (ServiceCategory::Simulation, Language::En) => "Simulation",
            (ServiceCategory::Simulation, Language::Ar) => "المحاكاة",
            (ServiceCategory::Software, Language::En) => "Software",
            (ServiceCategory::Software, Language::Ar) => "البرمجيات",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnerCategory {
    Software,
    Hardware,
    Academic,
    Industry,
}

impl PartnerCategory {
    /// Display order of partner groups.
    pub const ALL: [PartnerCategory; 4] = [
        PartnerCategory::Software,
        PartnerCategory::Hardware,
        PartnerCategory::Academic,
        PartnerCategory::Industry,
    ];

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (PartnerCategory::Software, Language::En) => "Software Partners",
            (PartnerCategory::Software, Language::Ar) => "شركاء البرمجيات",
            (PartnerCategory::Hardware, Language::En) => "Hardware Partners",
            (PartnerCategory::Hardware, Language::Ar) => "شركاء الأجهزة",
            (PartnerCategory::Academic, Language::En) => "Academic Partners",
            (PartnerCategory::Academic, Language::Ar) => "الشركاء الأكاديميون",
            (PartnerCategory::Industry, Language::En) => "Industry Partners",
            (PartnerCategory::Industry, Language::Ar) => "شركاء الصناعة",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientSector {
    OilGas,
    Government,
    Academic,
    Industry,
}

impl ClientSector {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (ClientSector::OilGas, Language::En) => "Oil & Gas",
            (ClientSector::OilGas, Language::Ar) => "النفط والغاز",
            (ClientSector::Government, Language::En) => "Government",
            (ClientSector::Government, Language::Ar) => "القطاع الحكومي",
            (ClientSector::Academic, Language::En) => "Academic",
            (ClientSector::Academic, Language::Ar) => "الأكاديمي",
            (ClientSector::Industry, Language::En) => "Industry",
            (ClientSector::Industry, Language::Ar) => "الصناعة",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Workshop,
    Conference,
    Webinar,
    Exhibition,
    Course,
}

impl EventType {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (EventType::Workshop, Language::En) => "Workshop",
            (EventType::Workshop, Language::Ar) => "ورشة عمل",
            (EventType::Conference, Language::En) => "Conference",
            (EventType::Conference, Language::Ar) => "مؤتمر",
            (EventType::Webinar, Language::En) => "Webinar",
            (EventType::Webinar, Language::Ar) => "ندوة عبر الإنترنت",
            (EventType::Exhibition, Language::En) => "Exhibition",
            (EventType::Exhibition, Language::Ar) => "معرض",
            (EventType::Course, Language::En) => "Course",
            (EventType::Course, Language::Ar) => "دورة تدريبية",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleCategory {
    News,
    CaseStudy,
    Insight,
}

impl ArticleCategory {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (ArticleCategory::News, Language::En) => "News",
            (ArticleCategory::News, Language::Ar) => "أخبار",
            (ArticleCategory::CaseStudy, Language::En) => "Case Study",
            (ArticleCategory::CaseStudy, Language::Ar) => "دراسة حالة",
            (ArticleCategory::Insight, Language::En) => "Insight",
            (ArticleCategory::Insight, Language::Ar) => "رؤى",
        }
    }
}

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub id: String,
    pub category: ServiceCategory,
    pub icon: IconKind,
    pub title: Localized<String>,
    pub summary: Localized<String>,
    #[serde(default = "empty_list")]
    pub features: Localized<Vec<String>>,
}

/// Long-form content for a service detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDetail {
    /// Id of the [`Service`] this expands on.
    pub id: String,
    /// Markdown.
    pub overview: Localized<String>,
    #[serde(default = "empty_list")]
    pub highlights: Localized<Vec<String>>,
    #[serde(default = "empty_list")]
    pub deliverables: Localized<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub category: PartnerCategory,
    pub website: String,
    pub logo: String,
    pub description: Localized<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Client {
    pub id: u32,
    pub name: Localized<String>,
    pub sector: ClientSector,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub title: Localized<String>,
    pub date: NaiveDate,
    pub location: Localized<String>,
    pub description: Localized<String>,
    pub upcoming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Article {
    pub id: u32,
    pub category: ArticleCategory,
    pub title: Localized<String>,
    pub excerpt: Localized<String>,
    pub date: NaiveDate,
    pub author: Localized<String>,
}

fn empty_list() -> Localized<Vec<String>> {
    Localized {
        en: Vec::new(),
        ar: Vec::new(),
    }
}

/// Format a date for display: `12 March 2025` / `١٢ مارس ٢٠٢٥`.
pub fn format_date(date: NaiveDate, language: Language) -> String {
    use chrono::Datelike;
    const EN_MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    const AR_MONTHS: [&str; 12] = [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر",
        "أكتوبر", "نوفمبر", "ديسمبر",
    ];
    let month = date.month0() as usize;
    match language {
        Language::En => format!("{} {} {}", date.day(), EN_MONTHS[month], date.year()),
        Language::Ar => {
            let text = format!("{} {} {}", date.day(), AR_MONTHS[month], date.year());
            to_arabic_digits(&text)
        }
    }
}

/// Replace ASCII digits with Arabic-Indic digits.
pub fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn localized_get_picks_language() {
        let l = Localized {
            en: "Hello".to_string(),
            ar: "مرحبا".to_string(),
        };
        assert_eq!(l.get(Language::En), "Hello");
        assert_eq!(l.get(Language::Ar), "مرحبا");
    }

    #[test]
    fn service_parses_with_kebab_icon() {
        let service: Service = serde_json::from_value(json!({
            "id": "training",
            "category": "training",
            "icon": "book-open",
            "title": { "en": "Training", "ar": "التدريب" },
            "summary": { "en": "Courses", "ar": "دورات" }
        }))
        .unwrap();
        assert_eq!(service.icon, IconKind::BookOpen);
        assert!(service.features.en.is_empty());
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let result: Result<Service, _> = serde_json::from_value(json!({
            "id": "x",
            "category": "training",
            "icon": "rocket",
            "title": { "en": "X", "ar": "X" },
            "summary": { "en": "X", "ar": "X" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn event_type_field_is_named_type() {
        let event: Event = serde_json::from_value(json!({
            "id": 1,
            "type": "workshop",
            "title": { "en": "CFD Workshop", "ar": "ورشة" },
            "date": "2025-03-12",
            "location": { "en": "Kuwait City", "ar": "مدينة الكويت" },
            "description": { "en": "d", "ar": "d" },
            "upcoming": true
        }))
        .unwrap();
        assert_eq!(event.kind, EventType::Workshop);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
    }

    #[test]
    fn icon_classes_are_distinct() {
        let icons = [
            IconKind::Target,
            IconKind::BookOpen,
            IconKind::Settings,
            IconKind::Cpu,
            IconKind::Layers,
            IconKind::Users,
            IconKind::Award,
            IconKind::Globe,
        ];
        let classes: std::collections::HashSet<_> = icons.iter().map(|i| i.css_class()).collect();
        assert_eq!(classes.len(), icons.len());
    }

    #[test]
    fn format_date_per_language() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        assert_eq!(format_date(date, Language::En), "12 March 2025");
        assert_eq!(format_date(date, Language::Ar), "١٢ مارس ٢٠٢٥");
    }
}
