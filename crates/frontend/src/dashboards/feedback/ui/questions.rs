use contracts::dashboards::feedback::{QuestionData, Trend};
use leptos::prelude::*;

use crate::dashboards::feedback::api;
use crate::shared::icons::icon;
use crate::shared::load::{spawn_load, LoadState};
use crate::shared::number_format::{format_decimal, format_percent};
use crate::shared::page_frame::{LoadError, PageFrame};

fn trend_icon(trend: Trend) -> (&'static str, &'static str) {
    match trend {
        Trend::Up => ("trending-up", "trend trend--up"),
        Trend::Down => ("trending-down", "trend trend--down"),
        Trend::Stable => ("minus", "trend trend--flat"),
    }
}

/// Share of answers per scale point, in percent. All zeros for an
/// unanswered question.
fn distribution_shares(question: &QuestionData) -> Vec<f64> {
    let total = question.total_answers();
    question
        .distribution
        .iter()
        .map(|count| {
            if total == 0 {
                0.0
            } else {
                f64::from(*count) * 100.0 / f64::from(total)
            }
        })
        .collect()
}

fn question_card(question: QuestionData) -> impl IntoView {
    let (trend_name, trend_class) = trend_icon(question.trend);
    let shares = distribution_shares(&question);
    view! {
        <div class="card question">
            <div class="question__header">
                <h3 class="card__title">{question.question.clone()}</h3>
                <span class=trend_class>{icon(trend_name)}</span>
            </div>
            <div class="question__average">
                "Media: "<strong>{format_decimal(question.average, 1)}</strong>
                {format!(" ({} respuestas)", question.total_answers())}
            </div>
            <div class="distribution">
                {shares
                    .into_iter()
                    .enumerate()
                    .map(|(i, share)| view! {
                        <div class="distribution__col" title=format_percent(share, 1)>
                            <div class="distribution__bar" style:height=format!("{}%", share)></div>
                            <div class="distribution__label">{i + 1}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn QuestionsPanel() -> impl IntoView {
    let data = RwSignal::new(LoadState::<Vec<QuestionData>>::Loading);
    spawn_load(data, api::get_questions());

    view! {
        <PageFrame
            page_id="dashboard--questions".to_string()
            title="Preguntas"
            subtitle="Revisa respuestas detalladas a cada ítem de la encuesta."
        >
            {move || match data.get() {
                LoadState::Loading => view! { <p class="muted">"Cargando preguntas..."</p> }.into_any(),
                LoadState::Failed(e) => view! { <LoadError message=e /> }.into_any(),
                LoadState::Ready(questions) if questions.is_empty() => {
                    view! { <p class="muted">"No hay preguntas disponibles."</p> }.into_any()
                }
                LoadState::Ready(questions) => {
                    questions.into_iter().map(question_card).collect_view().into_any()
                }
            }}
        </PageFrame>
    }
}
