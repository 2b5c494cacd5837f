use contracts::dashboards::feedback::BackofficeSummary;
use leptos::prelude::*;

use crate::dashboards::feedback::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::load::{spawn_load, LoadState};
use contracts::shared::number_format::format_thousands;
use crate::shared::page_frame::{LoadError, PageFrame};

#[component]
pub fn BackofficeSummaryPanel() -> impl IntoView {
    let data = RwSignal::new(LoadState::<BackofficeSummary>::Loading);
    spawn_load(data, api::get_backoffice_summary());

    let figure = move |pick: fn(&BackofficeSummary) -> u32| {
        Signal::derive(move || {
            data.with(|state| state.ready().map(|s| format_thousands(pick(s).into())))
        })
    };

    view! {
        <PageFrame
            page_id="backoffice--dashboard".to_string()
            title="Dashboard del Backoffice"
            subtitle="Vista general del sistema y actividad reciente."
        >
            <div class="stat-grid">
                <StatCard
                    label="Clientes Activos"
                    icon_name="users"
                    value=figure(|s| s.active_clients)
                    caption="Total de empresas gestionadas"
                />
                <StatCard
                    label="Informes Subidos (Últimos 7 días)"
                    icon_name="file-text"
                    value=figure(|s| s.reports_last_week)
                    caption="Nuevos documentos disponibles"
                />
                <StatCard
                    label="Alertas del Sistema"
                    icon_name="alert-circle"
                    value=figure(|s| s.system_alerts)
                    caption="Problemas de acceso o carga"
                    modifier="stat-card--error"
                />
            </div>

            <div class="card">
                <h3 class="card__title">"Actividad Reciente"</h3>
                {move || data.with(|state| match state {
                    LoadState::Loading => view! { <p class="muted">"Cargando actividad..."</p> }.into_any(),
                    LoadState::Failed(e) => view! { <LoadError message=e.clone() /> }.into_any(),
                    LoadState::Ready(summary) => view! {
                        <ul class="activity">
                            {summary
                                .recent_activity
                                .iter()
                                .map(|entry| view! { <li>{entry.clone()}</li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                })}
            </div>
        </PageFrame>
    }
}
