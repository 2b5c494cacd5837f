use leptos::prelude::*;

use crate::shared::page_frame::{ComingSoon, PageFrame};

#[component]
pub fn ComparisonsPanel() -> impl IntoView {
    view! {
        <PageFrame
            page_id="dashboard--comparisons".to_string()
            title="Comparativas"
            subtitle="Compara resultados entre diferentes periodos o áreas."
        >
            <ComingSoon message="Aquí podrás comparar los resultados de la encuesta entre periodos, departamentos y sedes." />
        </PageFrame>
    }
}
