//! Crawler-facing documents for the public surface.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use contracts::system::navigation::{
    crawl_allow_list, DashboardView, CRAWL_DISALLOW, DASHBOARD_PATH, LOGIN_PATH,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct SiteState {
    pub base_url: Arc<str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

/// Change frequency and priority advertised for a public path.
pub fn crawl_hint(path: &str) -> (ChangeFreq, &'static str) {
    if path == DASHBOARD_PATH {
        return (ChangeFreq::Daily, "1.0");
    }
    if path == LOGIN_PATH {
        return (ChangeFreq::Monthly, "0.4");
    }
    match DashboardView::from_public_path(path) {
        Some(DashboardView::Home) => (ChangeFreq::Daily, "0.8"),
        Some(DashboardView::Participation | DashboardView::Analytics | DashboardView::Reports) => {
            (ChangeFreq::Weekly, "0.7")
        }
        Some(DashboardView::Comparisons | DashboardView::Questions) => (ChangeFreq::Weekly, "0.6"),
        Some(DashboardView::BestPractices) => (ChangeFreq::Monthly, "0.5"),
        None => (ChangeFreq::Monthly, "0.3"),
    }
}

pub fn render_robots(base_url: &str) -> String {
    let mut out = String::from("User-agent: *\n");
    for path in crawl_allow_list() {
        out.push_str(&format!("Allow: {}\n", path));
    }
    for path in CRAWL_DISALLOW {
        out.push_str(&format!("Disallow: {}\n", path));
    }
    out.push_str(&format!("\nSitemap: {}/sitemap.xml\n", base_url));
    out
}

pub fn render_sitemap(base_url: &str, lastmod: NaiveDate) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in crawl_allow_list() {
        let (freq, priority) = crawl_hint(&path);
        out.push_str(&format!(
            "  <url>\n    <loc>{}{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            base_url,
            path,
            lastmod.format("%Y-%m-%d"),
            freq.as_str(),
            priority
        ));
    }
    out.push_str("</urlset>\n");
    out
}

pub async fn robots(State(site): State<SiteState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&site.base_url),
    )
}

pub async fn sitemap(State(site): State<SiteState>) -> impl IntoResponse {
    let today = chrono::Utc::now().date_naive();
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&site.base_url, today),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://bpfeedbackdata.com";

    #[test]
    fn test_robots_allows_public_and_disallows_admin() {
        let robots = render_robots(BASE);
        assert!(robots.starts_with("User-agent: *\n"));
        for path in ["/", "/login", "/platform", "/platform/reports", "/platform/best-practices"] {
            assert!(robots.contains(&format!("Allow: {}\n", path)), "{path}");
        }
        assert!(robots.contains("Disallow: /backoffice\n"));
        assert!(robots.contains("Disallow: /api/\n"));
        assert!(!robots.contains("Allow: /backoffice"));
        assert!(robots.contains("Sitemap: https://bpfeedbackdata.com/sitemap.xml"));
    }

    #[test]
    fn test_crawl_hints() {
        assert_eq!(crawl_hint("/"), (ChangeFreq::Daily, "1.0"));
        assert_eq!(crawl_hint("/platform"), (ChangeFreq::Daily, "0.8"));
        assert_eq!(crawl_hint("/platform/analytics"), (ChangeFreq::Weekly, "0.7"));
        assert_eq!(crawl_hint("/platform/questions"), (ChangeFreq::Weekly, "0.6"));
        assert_eq!(crawl_hint("/platform/best-practices"), (ChangeFreq::Monthly, "0.5"));
        assert_eq!(crawl_hint("/login"), (ChangeFreq::Monthly, "0.4"));
    }

    #[test]
    fn test_sitemap_lists_every_public_path_once() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 13).unwrap();
        let xml = render_sitemap(BASE, date);
        for path in crawl_allow_list() {
            let loc = format!("<loc>{}{}</loc>", BASE, path);
            assert_eq!(xml.matches(&loc).count(), 1, "{loc}");
        }
        assert_eq!(xml.matches("<url>").count(), crawl_allow_list().len());
        assert!(xml.contains("<lastmod>2025-07-13</lastmod>"));
        assert!(!xml.contains("/backoffice"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
