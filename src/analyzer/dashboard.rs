use crate::analyzer::cohort_retention::cohort_retention;
use crate::analyzer::revenue_trend::revenue_trend;
use crate::analyzer::support_correlation::support_friction;
use crate::model::{DashboardReport, Datasets};
use tracing::info;

/// Trait defining the interface for the dashboard analyzer.
pub trait Analyzer {
    fn analyze(&self, datasets: &Datasets) -> DashboardReport;
}

/// Runs the three independent analyses over one set of tables.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for AnalyzerImpl {
    fn analyze(&self, datasets: &Datasets) -> DashboardReport {
        let revenue = revenue_trend(&datasets.transactions);
        let anomalies = revenue.iter().filter(|r| r.anomaly).count();
        info!("Revenue trend: {} months, {} anomalies", revenue.len(), anomalies);

        let cohorts = cohort_retention(&datasets.customers, &datasets.sessions);
        info!("Cohort retention: {} cohorts", cohorts.len());

        let friction = support_friction(&datasets.transactions, &datasets.tickets);
        info!(
            "Support friction: {} customers, {} status columns",
            friction.rows.len(),
            friction.statuses.len()
        );

        DashboardReport {
            revenue_trend: revenue,
            cohort_retention: cohorts,
            support_friction: friction,
        }
    }
}
