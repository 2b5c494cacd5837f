use contracts::dashboards::feedback::{IndicatorResult, ParticipationOverview, SatisfactionIndex};
use leptos::prelude::*;

use crate::dashboards::feedback::api;
use crate::shared::load::{spawn_load, LoadState};
use crate::shared::number_format::format_percent;
use contracts::shared::number_format::format_thousands;
use crate::shared::page_frame::{LoadError, PageFrame};

#[derive(Debug, Clone, PartialEq)]
struct AnalyticsBundle {
    overview: ParticipationOverview,
    satisfaction: SatisfactionIndex,
    indicators: Vec<IndicatorResult>,
}

async fn load_bundle() -> Result<AnalyticsBundle, api::FetchError> {
    Ok(AnalyticsBundle {
        overview: api::get_participation_overview().await?,
        satisfaction: api::get_satisfaction_index().await?,
        indicators: api::get_indicator_results().await?,
    })
}

/// Colour band for an indicator percentage.
fn indicator_band(value: f64) -> &'static str {
    if value >= 75.0 {
        "hbar__fill--good"
    } else if value >= 60.0 {
        "hbar__fill--fair"
    } else {
        "hbar__fill--poor"
    }
}

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let data = RwSignal::new(LoadState::<AnalyticsBundle>::Loading);
    spawn_load(data, load_bundle());

    let content = move || match data.get() {
        LoadState::Loading => view! { <p class="muted">"Cargando indicadores..."</p> }.into_any(),
        LoadState::Failed(e) => view! { <LoadError message=e /> }.into_any(),
        LoadState::Ready(AnalyticsBundle {
            overview,
            satisfaction,
            indicators,
        }) => view! {
            <div class="card-grid">
                <div class="card">
                    <h3 class="card__title">"% Participación"</h3>
                    <div class="gauge">
                        <div class="gauge__value">{format_percent(overview.participant_percentage, 2)}</div>
                        <div class="gauge__caption">
                            {format!(
                                "{} participantes de {} empleados",
                                format_thousands(overview.participants.into()),
                                format_thousands(overview.total_employees.into()),
                            )}
                        </div>
                    </div>
                    <div class="split-bar">
                        <div class="split-bar__part" style:width=format!("{}%", overview.participant_percentage)></div>
                        <div
                            class="split-bar__part split-bar__part--muted"
                            style:width=format!("{}%", overview.employee_percentage)
                        ></div>
                    </div>
                </div>
                <div class="card">
                    <h3 class="card__title">"Índice de satisfacción general"</h3>
                    <div class="gauge">
                        <div class="gauge__value">{format_percent(satisfaction.value, 0)}</div>
                    </div>
                </div>
            </div>

            <div class="card">
                <h3 class="card__title">"Resultado de los indicadores"</h3>
                {indicators
                    .into_iter()
                    .map(|indicator| view! {
                        <div class="hbar">
                            <div class="hbar__label">{indicator.name}</div>
                            <div class="hbar__track">
                                <div
                                    class=format!("hbar__fill {}", indicator_band(indicator.value))
                                    style:width=format!("{}%", indicator.value)
                                ></div>
                            </div>
                            <div class="hbar__value">{format_percent(indicator.value, 0)}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <PageFrame
            page_id="dashboard--analytics".to_string()
            title="Dashboard"
            subtitle="Visión general de los KPIs principales"
        >
            {content}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_band() {
        assert_eq!(indicator_band(87.0), "hbar__fill--good");
        assert_eq!(indicator_band(75.0), "hbar__fill--good");
        assert_eq!(indicator_band(62.0), "hbar__fill--fair");
        assert_eq!(indicator_band(48.0), "hbar__fill--poor");
    }
}
