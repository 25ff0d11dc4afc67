// Archive decoding: zip members -> typed tables
use crate::model::{
    Customer, Datasets, LoadError, PaymentStatus, Product, Session, SupportTicket, Transaction,
};
use crate::utils::parse_datetime;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io::{Cursor, Read, Seek};
use tracing::debug;
use zip::ZipArchive;

pub const TRANSACTIONS_FILE: &str = "cleaned_transactions.csv";
pub const SESSIONS_FILE: &str = "cleaned_sessions.csv";
pub const CUSTOMERS_FILE: &str = "cleaned_customers.csv";
pub const TICKETS_FILE: &str = "cleaned_support_tickets.csv";
pub const PRODUCTS_FILE: &str = "cleaned_products.csv";

pub trait Parser {
    fn parse(&self, archive: &[u8]) -> Result<Datasets, LoadError>;
}

pub struct ArchiveParser;

impl ArchiveParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ArchiveParser {
    fn parse(&self, archive: &[u8]) -> Result<Datasets, LoadError> {
        let mut zip = ZipArchive::new(Cursor::new(archive))?;

        let transactions = read_table::<RawTransaction, _>(&mut zip, TRANSACTIONS_FILE)?
            .into_iter()
            .map(RawTransaction::into_model)
            .collect::<Result<Vec<_>, _>>()?;
        let sessions = read_table::<RawSession, _>(&mut zip, SESSIONS_FILE)?
            .into_iter()
            .map(RawSession::into_model)
            .collect::<Result<Vec<_>, _>>()?;
        let customers = read_table::<RawCustomer, _>(&mut zip, CUSTOMERS_FILE)?
            .into_iter()
            .map(RawCustomer::into_model)
            .collect::<Result<Vec<_>, _>>()?;
        let tickets = read_table::<RawTicket, _>(&mut zip, TICKETS_FILE)?
            .into_iter()
            .map(RawTicket::into_model)
            .collect::<Result<Vec<_>, _>>()?;
        let products = read_table::<RawProduct, _>(&mut zip, PRODUCTS_FILE)?
            .into_iter()
            .map(RawProduct::into_model)
            .collect();

        Ok(Datasets {
            transactions,
            sessions,
            customers,
            tickets,
            products,
        })
    }
}

/// Locates `name` at the archive root or inside a single top-level folder.
fn find_member<R: Read + Seek>(zip: &ZipArchive<R>, name: &str) -> Result<String, LoadError> {
    let suffix = format!("/{}", name);
    zip.file_names()
        .find(|entry| *entry == name || entry.ends_with(&suffix))
        .map(str::to_string)
        .ok_or_else(|| LoadError::MissingFile(name.to_string()))
}

fn read_table<T, R>(zip: &mut ZipArchive<R>, name: &str) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read + Seek,
{
    let member = find_member(zip, name)?;
    let file = zip.by_name(&member)?;
    let mut reader = csv::Reader::from_reader(file);

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| LoadError::Csv {
            file: name.to_string(),
            source,
        })?;
    debug!("Decoded {} rows from {}", rows.len(), name);
    Ok(rows)
}

fn required_ts(file: &str, column: &str, value: &str) -> Result<NaiveDateTime, LoadError> {
    parse_datetime(value).ok_or_else(|| LoadError::InvalidTimestamp {
        file: file.to_string(),
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn optional_ts(
    file: &str,
    column: &str,
    value: Option<String>,
) -> Result<Option<NaiveDateTime>, LoadError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_ts(file, column, v).map(Some),
    }
}

#[derive(Debug, Deserialize)]
struct RawTransaction {
    transaction_id: String,
    customer_id: String,
    created_at: String,
    total_amount: f64,
    payment_status: String,
}

impl RawTransaction {
    fn into_model(self) -> Result<Transaction, LoadError> {
        // csv happily decodes "NaN" and "inf" into f64
        if !self.total_amount.is_finite() {
            return Err(LoadError::InvalidAmount {
                file: TRANSACTIONS_FILE.to_string(),
                column: "total_amount".to_string(),
                value: self.total_amount,
            });
        }
        Ok(Transaction {
            created_at: required_ts(TRANSACTIONS_FILE, "created_at", &self.created_at)?,
            transaction_id: self.transaction_id,
            customer_id: self.customer_id,
            total_amount: self.total_amount,
            payment_status: PaymentStatus::from(self.payment_status.as_str()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawSession {
    customer_id: String,
    session_start: String,
    #[serde(default)]
    session_end: Option<String>,
}

impl RawSession {
    fn into_model(self) -> Result<Session, LoadError> {
        Ok(Session {
            session_start: required_ts(SESSIONS_FILE, "session_start", &self.session_start)?,
            session_end: optional_ts(SESSIONS_FILE, "session_end", self.session_end)?,
            customer_id: self.customer_id,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawCustomer {
    customer_id: String,
    signup_date: String,
}

impl RawCustomer {
    fn into_model(self) -> Result<Customer, LoadError> {
        Ok(Customer {
            signup_date: required_ts(CUSTOMERS_FILE, "signup_date", &self.signup_date)?,
            customer_id: self.customer_id,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawTicket {
    customer_id: String,
    created_at: String,
    #[serde(default)]
    resolved_at: Option<String>,
}

impl RawTicket {
    fn into_model(self) -> Result<SupportTicket, LoadError> {
        Ok(SupportTicket {
            created_at: required_ts(TICKETS_FILE, "created_at", &self.created_at)?,
            resolved_at: optional_ts(TICKETS_FILE, "resolved_at", self.resolved_at)?,
            customer_id: self.customer_id,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    product_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    price: Option<f64>,
}

impl RawProduct {
    fn into_model(self) -> Product {
        Product {
            product_id: self.product_id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}
