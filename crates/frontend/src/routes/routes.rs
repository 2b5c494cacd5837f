use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::app_shell::{BackofficeArea, DashboardArea, PublicArea};
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

/// Top-level areas. Panel selection inside `/` and `/backoffice` is state,
/// not path; the public area keeps one path per panel.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=DashboardArea />
                <Route path=path!("/backoffice") view=BackofficeArea />
                <Route path=path!("/platform") view=PublicArea />
                <Route path=path!("/platform/:view") view=PublicArea />
            </Routes>
        </Router>
    }
}
