use contracts::dashboards::feedback::BestPractice;
use leptos::prelude::*;

use crate::dashboards::feedback::api;
use crate::shared::icons::icon;
use crate::shared::load::{spawn_load, LoadState};
use crate::shared::page_frame::{LoadError, PageFrame};

#[component]
pub fn BestPracticesPanel() -> impl IntoView {
    let data = RwSignal::new(LoadState::<Vec<BestPractice>>::Loading);
    spawn_load(data, api::get_best_practices());

    view! {
        <PageFrame
            page_id="dashboard--best-practices".to_string()
            title="Buenas Prácticas"
            subtitle="Recursos externos y recomendaciones para mejorar la experiencia de tus empleados."
        >
            {move || match data.get() {
                LoadState::Loading => view! { <p class="muted">"Cargando recursos..."</p> }.into_any(),
                LoadState::Failed(e) => view! { <LoadError message=e /> }.into_any(),
                LoadState::Ready(items) if items.is_empty() => view! {
                    <p class="muted">"No hay recursos de buenas prácticas disponibles."</p>
                }
                .into_any(),
                LoadState::Ready(items) => view! {
                    <div class="card-grid">
                        {items
                            .into_iter()
                            .map(|practice| view! {
                                <div class="card">
                                    <h3 class="card__title">{practice.title}</h3>
                                    <p>{practice.description}</p>
                                    <a
                                        class="button button--link"
                                        href=practice.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "Leer más"
                                        {icon("external-link")}
                                    </a>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}
