pub mod left;
pub mod navigation;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell shared by every area.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, H, C>(
    #[prop(into)] title: String,
    left: L,
    /// Right-hand side of the top bar
    header: H,
    center: C,
) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    H: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader title=title>{header()}</TopHeader>
            <div class="app-body">
                <left::Left>{left()}</left::Left>
                <main data-zone="center" class="app-main">{center()}</main>
            </div>
        </div>
    }
}
