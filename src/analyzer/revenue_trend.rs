use crate::analyzer::statistics::SeriesStats;
use crate::model::{MonthlyRevenue, PaymentStatus, Transaction};
use crate::utils::month_start;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Months whose |z| exceeds this are flagged.
pub const ANOMALY_Z_THRESHOLD: f64 = 2.0;

/// Monthly paid revenue in ascending month order, with z-score anomaly flags.
///
/// With fewer than two months, or when every month has the same total, the
/// deviation is undefined and all rows get `z_score = 0.0`, `anomaly = false`.
/// Non-finite amounts are skipped so they cannot poison the mean.
pub fn revenue_trend(transactions: &[Transaction]) -> Vec<MonthlyRevenue> {
    let mut monthly: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.payment_status == PaymentStatus::Paid && tx.total_amount.is_finite())
    {
        let entry = monthly.entry(month_start(&tx.created_at)).or_insert((0.0, 0));
        entry.0 += tx.total_amount;
        entry.1 += 1;
    }

    let totals: Vec<f64> = monthly.values().map(|(total, _)| *total).collect();
    let mean = SeriesStats::mean(&totals);
    let std_dev = SeriesStats::sample_std_dev(&totals).filter(|s| s.is_finite() && *s > 0.0);

    monthly
        .into_iter()
        .map(|(month, (total_amount, transaction_count))| {
            let z_score = match (mean, std_dev) {
                (Some(mean), Some(std_dev)) => (total_amount - mean) / std_dev,
                _ => 0.0,
            };
            MonthlyRevenue {
                month,
                total_amount,
                transaction_count,
                z_score,
                anomaly: z_score.abs() > ANOMALY_Z_THRESHOLD,
            }
        })
        .collect()
}
