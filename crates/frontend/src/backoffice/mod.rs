//! Administrative area, reachable by `Role::Admin` only.

pub mod summary;

use contracts::system::navigation::{BackofficeView, ViewKey};
use leptos::prelude::*;

use crate::shared::page_frame::{ComingSoon, PageFrame};
use summary::BackofficeSummaryPanel;

fn coming_soon_text(view: BackofficeView) -> &'static str {
    match view {
        BackofficeView::Dashboard => "",
        BackofficeView::Clients => "Alta, edición y activación de empresas cliente.",
        BackofficeView::Reports => "Subida y publicación de informes por cliente.",
        BackofficeView::Metrics => "Métricas de uso de la plataforma.",
        BackofficeView::Users => "Gestión de usuarios y roles.",
    }
}

pub fn render_panel(view: BackofficeView) -> AnyView {
    match view {
        BackofficeView::Dashboard => view! { <BackofficeSummaryPanel /> }.into_any(),
        other => view! {
            <PageFrame page_id=format!("backoffice--{}", other.key()) title=other.title()>
                <ComingSoon message=coming_soon_text(other) />
            </PageFrame>
        }
        .into_any(),
    }
}
