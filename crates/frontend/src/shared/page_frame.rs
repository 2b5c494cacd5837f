//! PageFrame: root wrapper for every panel.
//!
//! Sets `id` (`"{area}--{view}"`, e.g. `"dashboard--reports"`) on the root
//! element and renders the panel header above the content.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    page_id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page">
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}

/// Full-width placeholder for panels that are not built yet.
#[component]
pub fn ComingSoon(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="coming-soon">
            <p>{message}</p>
            <span class="badge badge--muted">"Próximamente"</span>
        </div>
    }
}

/// Error box shown when a panel's data could not be loaded.
#[component]
pub fn LoadError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert--error">{message}</div>
    }
}
