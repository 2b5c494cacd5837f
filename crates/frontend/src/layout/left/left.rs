use crate::layout::navigation::use_layout;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let layout = use_layout();
    let is_open = move || layout.sidebar_open.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !is_open()>
            <div class="app-sidebar__brand">"BPFeedbackData"</div>
            {children()}
        </aside>
    }
}
