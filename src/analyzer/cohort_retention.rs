use crate::model::{CohortRetention, Customer, RETENTION_WINDOW, Session};
use crate::utils::{month_start, months_between, round_to};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Retention matrix of signup-month cohorts over month offsets 0..=5.
///
/// Cohort size counts every customer who signed up that month, with or
/// without sessions. Every cohort gets all six cells; inactive offsets are 0.
pub fn cohort_retention(customers: &[Customer], sessions: &[Session]) -> Vec<CohortRetention> {
    let mut cohort_of: HashMap<&str, NaiveDate> = HashMap::new();
    let mut members: BTreeMap<NaiveDate, HashSet<&str>> = BTreeMap::new();
    for customer in customers {
        let id = customer.customer_id.as_str();
        let cohort = *cohort_of
            .entry(id)
            .or_insert_with(|| month_start(&customer.signup_date));
        members.entry(cohort).or_default().insert(id);
    }

    let mut active: HashMap<(NaiveDate, usize), HashSet<&str>> = HashMap::new();
    for session in sessions {
        let Some((&id, &cohort)) = cohort_of.get_key_value(session.customer_id.as_str()) else {
            continue;
        };
        let offset = months_between(cohort, month_start(&session.session_start));
        if offset < 0 || offset >= RETENTION_WINDOW as i32 {
            continue;
        }
        active.entry((cohort, offset as usize)).or_default().insert(id);
    }

    members
        .into_iter()
        .map(|(cohort_month, ids)| {
            let cohort_size = ids.len();
            let mut counts = [0usize; RETENTION_WINDOW];
            let mut retention = [0.0f64; RETENTION_WINDOW];
            for offset in 0..RETENTION_WINDOW {
                counts[offset] = active.get(&(cohort_month, offset)).map_or(0, HashSet::len);
                // cohort_size >= 1: cohorts only exist for customers seen above
                retention[offset] = round_to(counts[offset] as f64 * 100.0 / cohort_size as f64, 1);
            }
            CohortRetention {
                cohort_month,
                cohort_size,
                active: counts,
                retention,
            }
        })
        .collect()
}
