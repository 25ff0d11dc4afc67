use crate::analyzer::statistics::SeriesStats;
use crate::model::{CustomerFriction, FrictionTable, PaymentStatus, SupportTicket, Transaction};
use crate::utils::compare_ids;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Per-customer ticket counts joined with per-status transaction counts.
///
/// The join is outer: customers seen only in tickets get zero payment counts,
/// customers seen only in transactions get `ticket_count = 0`.
pub fn support_friction(transactions: &[Transaction], tickets: &[SupportTicket]) -> FrictionTable {
    let mut ticket_counts: HashMap<&str, u64> = HashMap::new();
    for ticket in tickets {
        *ticket_counts.entry(ticket.customer_id.as_str()).or_insert(0) += 1;
    }

    let mut statuses: BTreeSet<String> = PaymentStatus::REQUIRED
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();
    let mut payment_counts: HashMap<&str, HashMap<&str, u64>> = HashMap::new();
    for tx in transactions {
        let status = tx.payment_status.as_str();
        statuses.insert(status.to_string());
        *payment_counts
            .entry(tx.customer_id.as_str())
            .or_default()
            .entry(status)
            .or_insert(0) += 1;
    }

    let mut customer_ids: Vec<&str> = ticket_counts
        .keys()
        .chain(payment_counts.keys())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    customer_ids.sort_by(|a, b| compare_ids(a, b));

    let rows: Vec<CustomerFriction> = customer_ids
        .into_iter()
        .map(|id| {
            let counts = payment_counts.get(id);
            CustomerFriction {
                customer_id: id.to_string(),
                ticket_count: ticket_counts.get(id).copied().unwrap_or(0),
                payment_counts: statuses
                    .iter()
                    .map(|status| {
                        let n = counts
                            .and_then(|c| c.get(status.as_str()))
                            .copied()
                            .unwrap_or(0);
                        (status.clone(), n)
                    })
                    .collect(),
            }
        })
        .collect();

    let ticket_series: Vec<f64> = rows.iter().map(|r| r.ticket_count as f64).collect();
    let ticket_correlation: BTreeMap<String, Option<f64>> = statuses
        .iter()
        .map(|status| {
            let status_series: Vec<f64> = rows
                .iter()
                .map(|r| r.payment_counts.get(status).copied().unwrap_or(0) as f64)
                .collect();
            (
                status.clone(),
                SeriesStats::compute_correlation(&ticket_series, &status_series),
            )
        })
        .collect();

    FrictionTable {
        statuses: statuses.into_iter().collect(),
        rows,
        ticket_correlation,
    }
}
