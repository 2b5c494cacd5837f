use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card: icon, label, one formatted figure and a short caption.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted; `None` shows a dash while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional, into)] caption: MaybeProp<String>,
    /// Extra modifier, e.g. `"stat-card--warning"`
    #[prop(optional)]
    modifier: &'static str,
) -> impl IntoView {
    let class = if modifier.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card {modifier}")
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "—".to_string())}
                </div>
                {move || caption.get().map(|c| view! { <div class="stat-card__subtitle">{c}</div> })}
            </div>
        </div>
    }
}
