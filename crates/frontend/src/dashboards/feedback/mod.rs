pub mod api;
pub mod fixtures;
pub mod ui;

use contracts::system::navigation::DashboardView;
use leptos::prelude::*;

use ui::*;

/// Panel for `view`. Quick-access cards on the home panel report their
/// target through `on_open`.
pub fn render_panel(view: DashboardView, on_open: Callback<DashboardView>) -> AnyView {
    match view {
        DashboardView::Home => view! { <HomePanel on_open=on_open /> }.into_any(),
        DashboardView::Participation => view! { <ParticipationPanel /> }.into_any(),
        DashboardView::Analytics => view! { <AnalyticsPanel /> }.into_any(),
        DashboardView::Comparisons => view! { <ComparisonsPanel /> }.into_any(),
        DashboardView::Questions => view! { <QuestionsPanel /> }.into_any(),
        DashboardView::Reports => view! { <ReportsPanel /> }.into_any(),
        DashboardView::BestPractices => view! { <BestPracticesPanel /> }.into_any(),
    }
}
