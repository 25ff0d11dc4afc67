// Core structs: source tables, derived views, error types
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaymentStatus {
    Paid,
    Refunded,
    ChargedBack,
    Other(String),
}

impl PaymentStatus {
    /// Statuses that always get a column in the friction table.
    pub const REQUIRED: [PaymentStatus; 3] = [
        PaymentStatus::Paid,
        PaymentStatus::Refunded,
        PaymentStatus::ChargedBack,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::ChargedBack => "charged_back",
            PaymentStatus::Other(label) => label,
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(label: &str) -> Self {
        match label {
            "paid" => PaymentStatus::Paid,
            "refunded" => PaymentStatus::Refunded,
            "charged_back" => PaymentStatus::ChargedBack,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub transaction_id: String,
    pub customer_id: String,
    pub created_at: NaiveDateTime,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
}

// session_end is loaded with the table but no metric reads it
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Session {
    pub customer_id: String,
    pub session_start: NaiveDateTime,
    pub session_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: String,
    pub signup_date: NaiveDateTime,
}

// only customer_id feeds a metric; the timestamps are kept for completeness
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct SupportTicket {
    pub customer_id: String,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

/// Catalog entry. Loaded with the rest of the archive, not analyzed yet.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

/// The five tables extracted from one archive.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub transactions: Vec<Transaction>,
    pub sessions: Vec<Session>,
    pub customers: Vec<Customer>,
    pub tickets: Vec<SupportTicket>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: NaiveDate,
    pub total_amount: f64,
    pub transaction_count: usize,
    pub z_score: f64,
    pub anomaly: bool,
}

/// Number of month offsets tracked per cohort (0 through 5).
pub const RETENTION_WINDOW: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortRetention {
    pub cohort_month: NaiveDate,
    pub cohort_size: usize,
    /// Distinct customers with a session at each month offset.
    pub active: [usize; RETENTION_WINDOW],
    /// Percentage of the cohort active at each offset, one decimal place.
    pub retention: [f64; RETENTION_WINDOW],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerFriction {
    pub customer_id: String,
    pub ticket_count: u64,
    pub payment_counts: BTreeMap<String, u64>,
}

// accessors for the named columns chart renderers consume
#[allow(dead_code)]
impl CustomerFriction {
    pub fn count(&self, status: &PaymentStatus) -> u64 {
        self.payment_counts.get(status.as_str()).copied().unwrap_or(0)
    }

    pub fn paid(&self) -> u64 {
        self.count(&PaymentStatus::Paid)
    }

    pub fn refunded(&self) -> u64 {
        self.count(&PaymentStatus::Refunded)
    }

    pub fn charged_back(&self) -> u64 {
        self.count(&PaymentStatus::ChargedBack)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrictionTable {
    /// Every status column present in `payment_counts`, sorted.
    pub statuses: Vec<String>,
    pub rows: Vec<CustomerFriction>,
    /// Pearson correlation of ticket count against each status count.
    pub ticket_correlation: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub revenue_trend: Vec<MonthlyRevenue>,
    pub cohort_retention: Vec<CohortRetention>,
    pub support_friction: FrictionTable,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("archive download returned status {0}")]
    BadStatus(u16),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive is missing {0}")]
    MissingFile(String),
    #[error("failed to decode {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("{file}: non-finite amount {value} in column {column}")]
    InvalidAmount {
        file: String,
        column: String,
        value: f64,
    },
    #[error("{file}: invalid timestamp {value:?} in column {column}")]
    InvalidTimestamp {
        file: String,
        column: String,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
