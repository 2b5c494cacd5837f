use contracts::dashboards::feedback::KpiData;
use contracts::system::navigation::{DashboardView, ViewKey};
use leptos::prelude::*;

use crate::dashboards::feedback::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::greeting_now;
use crate::shared::icons::icon;
use crate::shared::load::{spawn_load, LoadState};
use crate::shared::number_format::{format_change, format_decimal};
use crate::shared::page_frame::{LoadError, PageFrame};
use crate::system::auth::use_session;

struct QuickAccess {
    view: DashboardView,
    description: &'static str,
    icon: &'static str,
    badge: Option<&'static str>,
}

const QUICK_ACCESS: [QuickAccess; 6] = [
    QuickAccess {
        view: DashboardView::Participation,
        description: "Consulta el nivel de respuesta de las encuestas por departamento.",
        icon: "users",
        badge: Some("Nuevo"),
    },
    QuickAccess {
        view: DashboardView::Analytics,
        description: "Visualiza KPIs clave como eNPS, satisfacción global y engagement.",
        icon: "bar-chart",
        badge: None,
    },
    QuickAccess {
        view: DashboardView::Comparisons,
        description: "Compara resultados entre diferentes periodos o áreas.",
        icon: "git-compare",
        badge: None,
    },
    QuickAccess {
        view: DashboardView::Questions,
        description: "Revisa respuestas detalladas a cada ítem de la encuesta.",
        icon: "help-circle",
        badge: None,
    },
    QuickAccess {
        view: DashboardView::Reports,
        description: "Accede y descarga informes en formato PDF o Excel.",
        icon: "file-text",
        badge: Some("3 nuevos"),
    },
    QuickAccess {
        view: DashboardView::BestPractices,
        description: "Explora enlaces útiles y recomendaciones externas.",
        icon: "external-link",
        badge: None,
    },
];

/// Landing panel. `on_open` switches to the view picked from a
/// quick-access card; the caller decides whether that is a state change or
/// a path navigation.
#[component]
pub fn HomePanel(on_open: Callback<DashboardView>) -> impl IntoView {
    let session = use_session();
    let kpi = RwSignal::new(LoadState::<KpiData>::Loading);
    spawn_load(kpi, api::get_kpi_data());

    let headline = move || {
        let name = session
            .record()
            .map(|r| r.display_name().to_string())
            .unwrap_or_else(|| "usuario".to_string());
        format!("{}, {}!", greeting_now(), name)
    };
    let role_label = move || session.record().map(|r| r.role.label());

    let figure = move |pick: fn(&KpiData) -> String| {
        Signal::derive(move || kpi.with(|state| state.ready().map(pick)))
    };

    view! {
        <PageFrame page_id="dashboard--home".to_string() title="Inicio">
            <div class="welcome-banner">
                <div class="welcome-banner__icon">{icon("activity")}</div>
                <div>
                    <h2 class="welcome-banner__title">{headline}</h2>
                    <p>"Has accedido correctamente al panel de gestión de "<strong>"BPFeedbackData"</strong></p>
                    {move || role_label().map(|label| view! { <span class="badge">{label}</span> })}
                </div>
            </div>

            <h2 class="section-title">{icon("trending-up")}"Resumen de KPIs"</h2>
            {move || kpi.with(|state| match state {
                LoadState::Failed(e) => Some(view! { <LoadError message=e.clone() /> }),
                _ => None,
            })}
            <div class="stat-grid">
                <StatCard
                    label="eNPS"
                    icon_name="users"
                    value=figure(|k| format_decimal(k.enps, 0))
                    caption="Employee Net Promoter Score"
                />
                <StatCard
                    label="Satisfacción Global"
                    icon_name="heart"
                    value=figure(|k| format!("{}/10", format_decimal(k.satisfaction, 1)))
                    caption="Promedio general"
                />
                <StatCard
                    label="Engagement"
                    icon_name="trending-up"
                    value=figure(|k| format!("{}/10", format_decimal(k.engagement, 1)))
                    caption="Nivel de compromiso"
                />
                <StatCard
                    label="Evolución"
                    icon_name="trending-up"
                    value=figure(|k| format_change(k.evolution))
                    caption="vs. periodo anterior"
                    modifier="stat-card--success"
                />
            </div>

            <h2 class="section-title">{icon("bar-chart")}"Acceso rápido a secciones"</h2>
            <div class="quick-grid">
                {QUICK_ACCESS
                    .iter()
                    .map(|item| {
                        let view = item.view;
                        view! {
                            <div class="quick-card">
                                <div class="quick-card__header">
                                    <span class="quick-card__icon">{icon(item.icon)}</span>
                                    <span class="quick-card__title">{view.title()}</span>
                                    {item.badge.map(|b| view! { <span class="badge">{b}</span> })}
                                </div>
                                <p class="quick-card__text">{item.description}</p>
                                <button class="button button--outline" on:click=move |_| on_open.run(view)>
                                    "Acceder"
                                    {icon("arrow-right")}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_access_covers_every_non_home_view_once() {
        let targets: Vec<DashboardView> = QUICK_ACCESS.iter().map(|q| q.view).collect();
        let expected: Vec<DashboardView> = DashboardView::all()
            .iter()
            .copied()
            .filter(|v| *v != DashboardView::Home)
            .collect();
        assert_eq!(targets, expected);
    }
}
