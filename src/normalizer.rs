use crate::model::{Datasets, PaymentStatus};

/// Canonicalizes join keys and status labels so that grouping is exact.
pub fn normalize_all(datasets: &mut Datasets) {
    for tx in datasets.transactions.iter_mut() {
        trim_in_place(&mut tx.customer_id);
        trim_in_place(&mut tx.transaction_id);
        tx.payment_status = normalize_status(&tx.payment_status);
    }
    for session in datasets.sessions.iter_mut() {
        trim_in_place(&mut session.customer_id);
    }
    for customer in datasets.customers.iter_mut() {
        trim_in_place(&mut customer.customer_id);
    }
    for ticket in datasets.tickets.iter_mut() {
        trim_in_place(&mut ticket.customer_id);
    }
}

/// "Charged Back", " charged-back" and "charged_back" all fold to `ChargedBack`.
fn normalize_status(status: &PaymentStatus) -> PaymentStatus {
    let label = status
        .as_str()
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_");
    PaymentStatus::from(label.as_str())
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}
