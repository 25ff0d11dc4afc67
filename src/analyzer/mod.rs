// Analyzer module: the three dashboard metrics plus shared statistics.

pub mod cohort_retention;
pub mod dashboard;
pub mod revenue_trend;
pub mod statistics;
pub mod support_correlation;

// Re-export the main Analyzer implementation for ease of use.
pub use dashboard::{Analyzer, AnalyzerImpl};
