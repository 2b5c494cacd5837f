//! TopHeader: sidebar toggle, area title and a slot for the right-hand side.

use crate::layout::navigation::use_layout;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let layout = use_layout();
    let is_sidebar_visible = move || layout.sidebar_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_sidebar()
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>
            <div class="top-header__actions">{children()}</div>
        </header>
    }
}
