use crate::layout::navigation::LayoutState;
use crate::routes::routes::AppRoutes;
use crate::system::auth::service::SessionService;
use crate::system::auth::{AuthProvider, SessionContext};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new(SessionService::browser());

    provide_context(LayoutState::new());

    view! {
        <AuthProvider session=session>
            <AppRoutes />
        </AuthProvider>
    }
}
