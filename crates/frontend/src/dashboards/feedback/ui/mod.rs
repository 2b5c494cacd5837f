pub mod analytics;
pub mod best_practices;
pub mod comparisons;
pub mod home;
pub mod participation;
pub mod questions;
pub mod reports;

pub use analytics::AnalyticsPanel;
pub use best_practices::BestPracticesPanel;
pub use comparisons::ComparisonsPanel;
pub use home::HomePanel;
pub use participation::ParticipationPanel;
pub use questions::QuestionsPanel;
pub use reports::ReportsPanel;
