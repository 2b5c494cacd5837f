//! View identifiers and the fixed top-level paths of the application.

use std::fmt::Debug;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/";
pub const BACKOFFICE_PATH: &str = "/backoffice";
pub const PUBLIC_ROOT: &str = "/platform";

/// Paths that must never be indexed. Informational only.
pub const CRAWL_DISALLOW: [&str; 2] = [BACKOFFICE_PATH, "/api/"];

/// A closed enumeration of panels selectable inside one layout.
pub trait ViewKey: Copy + Eq + Debug + Send + Sync + 'static {
    /// View shown when the layout mounts.
    const DEFAULT: Self;

    fn all() -> &'static [Self];
    fn key(&self) -> &'static str;
    fn title(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|view| view.key() == key)
    }
}

/// Panels of the authenticated dashboard (and of the public platform area).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardView {
    Home,
    Participation,
    Analytics,
    Comparisons,
    Questions,
    Reports,
    BestPractices,
}

impl ViewKey for DashboardView {
    const DEFAULT: Self = DashboardView::Home;

    fn all() -> &'static [Self] {
        &[
            DashboardView::Home,
            DashboardView::Participation,
            DashboardView::Analytics,
            DashboardView::Comparisons,
            DashboardView::Questions,
            DashboardView::Reports,
            DashboardView::BestPractices,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            DashboardView::Home => "dashboard",
            DashboardView::Participation => "participation",
            DashboardView::Analytics => "analytics",
            DashboardView::Comparisons => "comparisons",
            DashboardView::Questions => "questions",
            DashboardView::Reports => "reports",
            DashboardView::BestPractices => "best-practices",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            DashboardView::Home => "Inicio",
            DashboardView::Participation => "Participación",
            DashboardView::Analytics => "Dashboard",
            DashboardView::Comparisons => "Comparativas",
            DashboardView::Questions => "Preguntas",
            DashboardView::Reports => "Informes",
            DashboardView::BestPractices => "Buenas prácticas",
        }
    }
}

impl DashboardView {
    /// Path of this view inside the public platform area.
    pub fn public_path(&self) -> String {
        match self {
            DashboardView::Home => PUBLIC_ROOT.to_string(),
            other => format!("{}/{}", PUBLIC_ROOT, other.key()),
        }
    }

    /// Exact inverse of [`public_path`](Self::public_path), so the view
    /// shown always has its menu entry active under [`is_active_path`].
    pub fn from_public_path(path: &str) -> Option<Self> {
        if path == PUBLIC_ROOT {
            return Some(DashboardView::Home);
        }
        let key = path.strip_prefix(PUBLIC_ROOT)?.strip_prefix('/')?;
        match Self::from_key(key)? {
            // the home panel only lives at the root
            DashboardView::Home => None,
            view => Some(view),
        }
    }
}

/// Panels of the administrative area, gated to `Role::Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackofficeView {
    Dashboard,
    Clients,
    Reports,
    Metrics,
    Users,
}

impl ViewKey for BackofficeView {
    const DEFAULT: Self = BackofficeView::Dashboard;

    fn all() -> &'static [Self] {
        &[
            BackofficeView::Dashboard,
            BackofficeView::Clients,
            BackofficeView::Reports,
            BackofficeView::Metrics,
            BackofficeView::Users,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            BackofficeView::Dashboard => "dashboard",
            BackofficeView::Clients => "clients",
            BackofficeView::Reports => "reports",
            BackofficeView::Metrics => "metrics",
            BackofficeView::Users => "users",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            BackofficeView::Dashboard => "Dashboard",
            BackofficeView::Clients => "Clientes",
            BackofficeView::Reports => "Informes",
            BackofficeView::Metrics => "Métricas",
            BackofficeView::Users => "Usuarios",
        }
    }
}

/// Public paths offered to crawlers, in sitemap order.
pub fn crawl_allow_list() -> Vec<String> {
    let mut paths = vec![DASHBOARD_PATH.to_string()];
    paths.extend(DashboardView::all().iter().map(|view| view.public_path()));
    paths.push(LOGIN_PATH.to_string());
    paths
}

/// Exact-match active test used by path-based menus. No prefix matching:
/// `/platform` is not active while `/platform/reports` is shown.
pub fn is_active_path(current: &str, item: &str) -> bool {
    current == item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for view in DashboardView::all() {
            assert_eq!(DashboardView::from_key(view.key()), Some(*view));
        }
        for view in BackofficeView::all() {
            assert_eq!(BackofficeView::from_key(view.key()), Some(*view));
        }
        assert_eq!(DashboardView::from_key("clients"), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DashboardView::DEFAULT, DashboardView::Home);
        assert_eq!(BackofficeView::DEFAULT, BackofficeView::Dashboard);
    }

    #[test]
    fn test_public_paths() {
        assert_eq!(DashboardView::Home.public_path(), "/platform");
        assert_eq!(
            DashboardView::BestPractices.public_path(),
            "/platform/best-practices"
        );
        for view in DashboardView::all() {
            assert_eq!(DashboardView::from_public_path(&view.public_path()), Some(*view));
        }
    }

    #[test]
    fn test_from_public_path_rejects_foreign_paths() {
        assert_eq!(DashboardView::from_public_path("/platform/dashboard"), None);
        assert_eq!(DashboardView::from_public_path("/platform/unknown"), None);
        assert_eq!(DashboardView::from_public_path("/platformreports"), None);
        assert_eq!(DashboardView::from_public_path("/reports"), None);
        assert_eq!(DashboardView::from_public_path("/platform/reports/"), None);
        assert_eq!(DashboardView::from_public_path("/platform/"), None);
    }

    #[test]
    fn test_resolved_view_has_exactly_one_active_entry() {
        let candidates = [
            "/platform",
            "/platform/",
            "/platform/reports",
            "/platform/reports/",
            "/platform/best-practices",
            "/platform/questions//",
            "/platform/Reports",
            "/",
        ];
        let paths = DashboardView::all()
            .iter()
            .map(|v| v.public_path())
            .chain(candidates.iter().map(|p| p.to_string()));
        for current in paths {
            if let Some(view) = DashboardView::from_public_path(&current) {
                let active: Vec<DashboardView> = DashboardView::all()
                    .iter()
                    .copied()
                    .filter(|v| is_active_path(&current, &v.public_path()))
                    .collect();
                assert_eq!(active, vec![view], "{current}");
            }
        }
    }

    #[test]
    fn test_is_active_path_is_exact() {
        assert!(is_active_path("/platform", "/platform"));
        assert!(!is_active_path("/platform/reports", "/platform"));
        assert!(!is_active_path("/platform", "/platform/reports"));
    }

    #[test]
    fn test_crawl_lists() {
        let allow = crawl_allow_list();
        assert_eq!(allow.first().map(String::as_str), Some("/"));
        assert!(allow.contains(&"/platform/participation".to_string()));
        assert!(allow.contains(&"/login".to_string()));
        assert!(!allow.iter().any(|p| p.starts_with(BACKOFFICE_PATH)));
        assert!(CRAWL_DISALLOW.contains(&"/backoffice"));
    }
}
