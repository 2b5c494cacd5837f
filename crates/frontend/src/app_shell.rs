//! Area layouts: the authenticated dashboard, the administrative
//! backoffice and the public platform.
//!
//! The first two select panels by state through a [`ViewRouter`]; the
//! public area is path-based so every panel has a crawlable URL.

use contracts::system::auth::Role;
use contracts::system::navigation::{
    BackofficeView, DashboardView, ViewKey, BACKOFFICE_PATH, DASHBOARD_PATH,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::layout::left::sidebar::dashboard_icon;
use crate::layout::left::{PublicMenu, SessionFooter, ViewMenu};
use crate::layout::navigation::ViewRouter;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::system::auth::{use_session, RequireAuth, RequireRole};
use crate::system::pages::not_found::NotFoundPage;
use crate::{backoffice, dashboards};

fn backoffice_icon(view: BackofficeView) -> &'static str {
    match view {
        BackofficeView::Dashboard => "layout-dashboard",
        BackofficeView::Clients => "building",
        BackofficeView::Reports => "file-text",
        BackofficeView::Metrics => "activity",
        BackofficeView::Users => "users",
    }
}

#[component]
fn Welcome() -> impl IntoView {
    let session = use_session();
    view! {
        <span class="top-header__user">
            {move || session
                .record()
                .map(|r| format!("Bienvenido, {} ({})", r.identifier, r.role))}
        </span>
    }
}

#[component]
fn DashboardLayout() -> impl IntoView {
    let session = use_session();
    let router = ViewRouter::<DashboardView>::new();
    let on_open = Callback::new(move |view: DashboardView| router.navigate(view));

    view! {
        <Shell
            title="Panel de Gestión"
            left=move || view! {
                <ViewMenu router=router label="Panel" icon_for=dashboard_icon />
                <Show when=move || session.has_permission(&[Role::Admin])>
                    <a href=BACKOFFICE_PATH class="app-sidebar__item">
                        <div class="app-sidebar__item-content">
                            {icon("shield")}
                            <span>"Backoffice"</span>
                        </div>
                    </a>
                </Show>
                <SessionFooter confirm_text="¿Estás seguro de que deseas cerrar sesión?" />
            }.into_any()
            header=|| view! { <Welcome /> }.into_any()
            center=move || view! {
                {move || dashboards::render_panel(router.current_view(), on_open)}
            }.into_any()
        />
    }
}

#[component]
fn BackofficeLayout() -> impl IntoView {
    let router = ViewRouter::<BackofficeView>::new();

    view! {
        <Shell
            title="Backoffice"
            left=move || view! {
                <ViewMenu router=router label="Administración" icon_for=backoffice_icon />
                <a href=DASHBOARD_PATH class="app-sidebar__item">
                    <div class="app-sidebar__item-content">
                        {icon("arrow-left")}
                        <span>"Volver al panel"</span>
                    </div>
                </a>
                <SessionFooter confirm_text="¿Estás seguro de que deseas cerrar sesión del backoffice?" />
            }.into_any()
            header=|| view! { <Welcome /> }.into_any()
            center=move || view! {
                {move || backoffice::render_panel(router.current_view())}
            }.into_any()
        />
    }
}

/// `/` : any authenticated role.
#[component]
pub fn DashboardArea() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardLayout />
        </RequireAuth>
    }
}

/// `/backoffice` : administrators only.
#[component]
pub fn BackofficeArea() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::Admin]>
            <BackofficeLayout />
        </RequireRole>
    }
}

/// `/platform` and `/platform/<key>` : no session required.
#[component]
pub fn PublicArea() -> impl IntoView {
    let location = use_location();
    let navigate = StoredValue::new_local(use_navigate());
    let current = Memo::new(move |_| {
        location
            .pathname
            .with(|path| DashboardView::from_public_path(path))
    });
    let on_open = Callback::new(move |view: DashboardView| {
        navigate.with_value(|navigate| navigate(&view.public_path(), Default::default()));
    });

    let known = Memo::new(move |_| current.get().is_some());

    move || {
        if known.get() {
            view! {
                <Shell
                    title="BPFeedbackData"
                    left=|| view! { <PublicMenu /> }.into_any()
                    header=|| view! { <span class="top-header__user">"Acceso público"</span> }.into_any()
                    center=move || view! {
                        {move || current.get().map(|view| dashboards::render_panel(view, on_open))}
                    }.into_any()
                />
            }
            .into_any()
        } else {
            view! { <NotFoundPage /> }.into_any()
        }
    }
}
