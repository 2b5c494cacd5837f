//! Data facade for the feedback panels.
//!
//! Every accessor is async so panels are written against the eventual HTTP
//! source; today each resolves immediately from [`fixtures`](super::fixtures).

use contracts::dashboards::feedback::*;
use thiserror::Error;

use super::fixtures;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
}

pub async fn get_participation_data() -> Result<Vec<ParticipationData>, FetchError> {
    Ok(fixtures::PARTICIPATION.clone())
}

pub async fn get_overall_participation_chart() -> Result<Vec<OverallParticipationSlice>, FetchError>
{
    Ok(fixtures::OVERALL_PARTICIPATION_CHART.clone())
}

pub async fn get_department_participation_chart(
) -> Result<Vec<DepartmentParticipation>, FetchError> {
    Ok(fixtures::DEPARTMENT_PARTICIPATION_CHART.clone())
}

pub async fn get_kpi_data() -> Result<KpiData, FetchError> {
    Ok(fixtures::KPI.clone())
}

pub async fn get_questions() -> Result<Vec<QuestionData>, FetchError> {
    Ok(fixtures::QUESTIONS.clone())
}

/// Unsorted; ordering is the report filter's job.
pub async fn get_reports() -> Result<Vec<ReportData>, FetchError> {
    Ok(fixtures::REPORTS.clone())
}

pub async fn get_best_practices() -> Result<Vec<BestPractice>, FetchError> {
    Ok(fixtures::BEST_PRACTICES.clone())
}

/// Percentage, 0..=100
pub async fn get_overall_participation_rate() -> Result<f64, FetchError> {
    Ok(fixtures::OVERALL_PARTICIPATION_RATE)
}

pub async fn get_total_responses() -> Result<u32, FetchError> {
    Ok(fixtures::TOTAL_RESPONSES)
}

pub async fn get_participation_overview() -> Result<ParticipationOverview, FetchError> {
    Ok(fixtures::PARTICIPATION_OVERVIEW.clone())
}

pub async fn get_indicator_results() -> Result<Vec<IndicatorResult>, FetchError> {
    Ok(fixtures::INDICATOR_RESULTS.clone())
}

pub async fn get_satisfaction_index() -> Result<SatisfactionIndex, FetchError> {
    Ok(fixtures::SATISFACTION_INDEX.clone())
}

pub async fn get_backoffice_summary() -> Result<BackofficeSummary, FetchError> {
    Ok(fixtures::BACKOFFICE_SUMMARY.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_overall_slices_sum_to_hundred() {
        let slices = block_on(get_overall_participation_chart()).unwrap();
        let total: f64 = slices.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
        assert_eq!(slices[0].value, block_on(get_overall_participation_rate()).unwrap());
    }

    #[test]
    fn test_department_bars_are_complementary() {
        for row in block_on(get_department_participation_chart()).unwrap() {
            assert_eq!(row.participation + row.non_participation, 100.0, "{}", row.department);
        }
    }

    #[test]
    fn test_participation_rows_are_consistent() {
        for row in block_on(get_participation_data()).unwrap() {
            assert!(row.responses <= row.surveyed, "{}", row.department);
            assert!((0.0..=100.0).contains(&row.participation_rate));
        }
    }

    #[test]
    fn test_reports_have_unique_ids() {
        let reports = block_on(get_reports()).unwrap();
        let mut ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), reports.len());
        assert_eq!(reports.len(), 7);
    }

    #[test]
    fn test_newest_report_sorts_first() {
        let reports = block_on(get_reports()).unwrap();
        let sorted = ReportFilter::default().apply(&reports);
        assert_eq!(sorted[0].id, "r7");
        assert_eq!(sorted.last().map(|r| r.id.as_str()), Some("r6"));
    }

    #[test]
    fn test_overview_percentages_cover_everyone() {
        let overview = block_on(get_participation_overview()).unwrap();
        assert!((overview.participant_percentage + overview.employee_percentage - 100.0).abs() < 1e-9);
        assert!(overview.participants <= overview.total_employees);
    }

    #[test]
    fn test_fetch_error_message() {
        assert_eq!(
            FetchError::Request("offline".into()).to_string(),
            "Request failed: offline"
        );
    }

    #[test]
    fn test_remaining_accessors_resolve() {
        assert_eq!(block_on(get_kpi_data()).unwrap().enps, 42.0);
        assert_eq!(block_on(get_questions()).unwrap().len(), 3);
        assert_eq!(block_on(get_best_practices()).unwrap().len(), 5);
        assert_eq!(block_on(get_total_responses()).unwrap(), 78);
        assert_eq!(block_on(get_indicator_results()).unwrap().len(), 20);
        assert_eq!(block_on(get_satisfaction_index()).unwrap().value, 73.0);
        assert_eq!(block_on(get_backoffice_summary()).unwrap().recent_activity.len(), 3);
    }
}
