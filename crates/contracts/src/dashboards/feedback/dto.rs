use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Survey responses per department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationData {
    pub department: String,
    pub responses: u32,
    pub surveyed: u32,
    /// Percentage, 0..=100
    pub participation_rate: f64,
}

/// One slice of the overall participation split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallParticipationSlice {
    pub name: String,
    pub value: f64,
    /// CSS color used for the slice
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentParticipation {
    pub department: String,
    pub participation: f64,
    pub non_participation: f64,
}

/// Headline KPIs shown on the home panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    pub enps: f64,
    pub satisfaction: f64,
    pub engagement: f64,
    /// Change vs previous survey, in percent
    pub evolution: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionData {
    pub id: String,
    pub question: String,
    pub average: f64,
    /// Answer counts per scale point, lowest first
    pub distribution: Vec<u32>,
    pub trend: Trend,
}

impl QuestionData {
    pub fn total_answers(&self) -> u32 {
        self.distribution.iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Excel")]
    Excel,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub id: String,
    pub title: String,
    pub format: ReportFormat,
    pub upload_date: NaiveDate,
    pub is_new: bool,
    pub category: String,
    pub sub_category: Option<String>,
}

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "Todos";

/// Category buttons of the report listing, in display order.
pub const REPORT_CATEGORIES: [&str; 6] = [
    ALL_CATEGORIES,
    "Análisis",
    "Documentos",
    "Informes",
    "Nóminas",
    "RRHH",
];

/// Sub-categories offered under `category`; empty when it has none.
pub fn report_sub_categories(category: &str) -> &'static [&'static str] {
    match category {
        "Análisis" => &["Alertas automáticas", "Análisis de KPI"],
        "Informes" => &["Comparativa anual", "Evolución temporal"],
        _ => &[],
    }
}

/// Search/category/sub-category filter applied to the report listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub search: String,
    /// `None` behaves like [`ALL_CATEGORIES`]
    pub category: Option<String>,
    pub sub_category: Option<String>,
}

impl ReportFilter {
    /// Selecting a category drops any sub-category chosen under the old one.
    pub fn select_category(&mut self, category: &str) {
        self.category = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_string())
        };
        self.sub_category = None;
    }

    pub fn matches(&self, report: &ReportData) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || report.title.to_lowercase().contains(&needle)
            || report.upload_date.to_string().contains(&needle)
            || report
                .sub_category
                .as_ref()
                .map(|s| s.to_lowercase().contains(&needle))
                .unwrap_or(false);

        let matches_category = self
            .category
            .as_ref()
            .map(|c| &report.category == c)
            .unwrap_or(true);

        let matches_sub_category = self
            .sub_category
            .as_ref()
            .map(|s| report.sub_category.as_ref() == Some(s))
            .unwrap_or(true);

        matches_search && matches_category && matches_sub_category
    }

    /// Matching reports, newest upload first.
    pub fn apply(&self, reports: &[ReportData]) -> Vec<ReportData> {
        let mut out: Vec<ReportData> = reports.iter().filter(|r| self.matches(r)).cloned().collect();
        out.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPractice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationOverview {
    pub participants: u32,
    pub total_employees: u32,
    pub participant_percentage: f64,
    pub employee_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionIndex {
    pub value: f64,
}

/// Figures for the administrative landing panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackofficeSummary {
    pub active_clients: u32,
    pub reports_last_week: u32,
    pub system_alerts: u32,
    pub recent_activity: Vec<String>,
}
