//! Sidebar menus for the three areas.

use contracts::system::navigation::{is_active_path, DashboardView, ViewKey, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::navigation::ViewRouter;
use crate::shared::icons::icon;
use crate::system::auth::use_session;

/// Menu over a closed set of views; the active item follows the router.
#[component]
pub fn ViewMenu<V>(
    router: ViewRouter<V>,
    #[prop(into)] label: String,
    /// Icon name for each view
    icon_for: fn(V) -> &'static str,
) -> impl IntoView
where
    V: ViewKey,
{
    view! {
        <nav class="app-sidebar__group">
            <div class="app-sidebar__group-label">{label}</div>
            {V::all()
                .iter()
                .copied()
                .map(|view| view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || router.is_active(view)
                        on:click=move |_| router.navigate(view)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_for(view))}
                            <span>{view.title()}</span>
                        </div>
                    </div>
                })
                .collect_view()}
        </nav>
    }
}

pub fn dashboard_icon(view: DashboardView) -> &'static str {
    match view {
        DashboardView::Home => "home",
        DashboardView::Participation => "users",
        DashboardView::Analytics => "bar-chart",
        DashboardView::Comparisons => "git-compare",
        DashboardView::Questions => "help-circle",
        DashboardView::Reports => "file-text",
        DashboardView::BestPractices => "external-link",
    }
}

/// Path-based menu of the public area. Active state is an exact path match.
#[component]
pub fn PublicMenu() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__group">
            <div class="app-sidebar__group-label">"Plataforma"</div>
            {DashboardView::all()
                .iter()
                .copied()
                .map(|view| {
                    let path = view.public_path();
                    let active_path = path.clone();
                    view! {
                        <a
                            href=path
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                location.pathname.with(|current| is_active_path(current, &active_path))
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(dashboard_icon(view))}
                                <span>{view.title()}</span>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
        <div class="app-sidebar__footer">
            <a href=LOGIN_PATH class="button button--primary">
                {icon("log-in")}
                "Iniciar sesión"
            </a>
        </div>
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Current user and the logout action. Logging out asks first; the route
/// guard takes care of leaving the protected area.
#[component]
pub fn SessionFooter(#[prop(into)] confirm_text: String) -> impl IntoView {
    let session = use_session();
    let confirm_text = StoredValue::new(confirm_text);

    let on_logout = move |_| {
        if confirm_text.with_value(|text| confirm(text)) {
            session.logout();
        }
    };

    view! {
        <div class="app-sidebar__footer">
            {move || session.record().map(|record| view! {
                <div class="app-sidebar__user">
                    <span class="app-sidebar__user-name">{record.display_name().to_string()}</span>
                    <span class="app-sidebar__user-role">{record.role.as_str()}</span>
                </div>
            })}
            <button class="button button--ghost" on:click=on_logout>
                {icon("log-out")}
                "Cerrar sesión"
            </button>
        </div>
    }
}
