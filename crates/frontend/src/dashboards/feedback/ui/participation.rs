use contracts::dashboards::feedback::{
    DepartmentParticipation, OverallParticipationSlice, ParticipationData,
};
use leptos::prelude::*;

use crate::dashboards::feedback::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::load::{spawn_load, LoadState};
use crate::shared::number_format::format_percent;
use contracts::shared::number_format::format_thousands;
use crate::shared::page_frame::{ComingSoon, LoadError, PageFrame};

#[derive(Debug, Clone, PartialEq)]
struct ParticipationBundle {
    rate: f64,
    total_responses: u32,
    slices: Vec<OverallParticipationSlice>,
    departments: Vec<DepartmentParticipation>,
    rows: Vec<ParticipationData>,
}

async fn load_bundle() -> Result<ParticipationBundle, api::FetchError> {
    Ok(ParticipationBundle {
        rate: api::get_overall_participation_rate().await?,
        total_responses: api::get_total_responses().await?,
        slices: api::get_overall_participation_chart().await?,
        departments: api::get_department_participation_chart().await?,
        rows: api::get_participation_data().await?,
    })
}

/// Horizontal stacked bar, participation on the left.
fn department_bar(row: &DepartmentParticipation) -> impl IntoView {
    view! {
        <div class="hbar">
            <div class="hbar__label">{row.department.clone()}</div>
            <div class="hbar__track">
                <div class="hbar__fill" style:width=format!("{}%", row.participation)></div>
                <div
                    class="hbar__fill hbar__fill--muted"
                    style:width=format!("{}%", row.non_participation)
                ></div>
            </div>
            <div class="hbar__value">{format_percent(row.participation, 0)}</div>
        </div>
    }
}

#[component]
pub fn ParticipationPanel() -> impl IntoView {
    let data = RwSignal::new(LoadState::<ParticipationBundle>::Loading);
    spawn_load(data, load_bundle());

    let content = move || match data.get() {
        LoadState::Loading => view! { <p class="muted">"Cargando datos de participación..."</p> }.into_any(),
        LoadState::Failed(e) => view! { <LoadError message=e /> }.into_any(),
        LoadState::Ready(bundle) => {
            let slices = bundle.slices.clone();
            view! {
                <div class="stat-grid">
                    <StatCard
                        label="Participación global"
                        icon_name="users"
                        value=Some(format_percent(bundle.rate, 0))
                        caption="Empleados que han respondido"
                    />
                    <StatCard
                        label="Respuestas totales"
                        icon_name="file-text"
                        value=Some(format_thousands(bundle.total_responses.into()))
                    />
                </div>

                <div class="card">
                    <h3 class="card__title">"Participación general"</h3>
                    <div class="split-bar">
                        {slices
                            .into_iter()
                            .map(|slice| view! {
                                <div
                                    class="split-bar__part"
                                    style:width=format!("{}%", slice.value)
                                    style:background=slice.color.clone()
                                    title=format!("{}: {}", slice.name, format_percent(slice.value, 0))
                                ></div>
                            })
                            .collect_view()}
                    </div>
                    <ul class="legend">
                        {bundle.slices
                            .iter()
                            .map(|slice| view! {
                                <li>
                                    <span class="legend__swatch" style:background=slice.color.clone()></span>
                                    {format!("{} {}", slice.name, format_percent(slice.value, 0))}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <h2 class="section-title">"Porcentaje de participación por departamento"</h2>
                <div class="card">
                    {bundle.departments.iter().map(department_bar).collect_view()}
                </div>

                <div class="card">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Departamento"</th>
                                <th class="num">"Respuestas"</th>
                                <th class="num">"Encuestados"</th>
                                <th class="num">"Participación"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {bundle.rows
                                .iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.department.clone()}</td>
                                        <td class="num">{format_thousands(row.responses.into())}</td>
                                        <td class="num">{format_thousands(row.surveyed.into())}</td>
                                        <td class="num">{format_percent(row.participation_rate, 1)}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <PageFrame page_id="dashboard--participation".to_string() title="Participación">
            {content}
            <ComingSoon message="Filtros por fechas y departamentos específicos." />
        </PageFrame>
    }
}
