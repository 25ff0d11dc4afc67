// Shared fixtures for unit tests.
use crate::model::{Customer, PaymentStatus, Session, SupportTicket, Transaction};
use crate::parser::archive_parser::{
    CUSTOMERS_FILE, PRODUCTS_FILE, SESSIONS_FILE, TICKETS_FILE, TRANSACTIONS_FILE,
};
use crate::utils::parse_datetime;
use chrono::NaiveDateTime;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

pub fn ts(value: &str) -> NaiveDateTime {
    parse_datetime(value).expect("fixture timestamp")
}

pub fn tx(id: &str, customer: &str, at: &str, amount: f64, status: &str) -> Transaction {
    Transaction {
        transaction_id: id.to_string(),
        customer_id: customer.to_string(),
        created_at: ts(at),
        total_amount: amount,
        payment_status: PaymentStatus::from(status),
    }
}

pub fn customer(id: &str, signup: &str) -> Customer {
    Customer {
        customer_id: id.to_string(),
        signup_date: ts(signup),
    }
}

pub fn session(customer: &str, start: &str) -> Session {
    Session {
        customer_id: customer.to_string(),
        session_start: ts(start),
        session_end: None,
    }
}

pub fn ticket(customer: &str, created: &str) -> SupportTicket {
    SupportTicket {
        customer_id: customer.to_string(),
        created_at: ts(created),
        resolved_at: None,
    }
}

/// Builds zip archives in memory.
pub struct ArchiveBuilder {
    prefix: String,
    files: Vec<(String, String)>,
}

impl ArchiveBuilder {
    pub fn sample() -> Self {
        let files = vec![
            (
                TRANSACTIONS_FILE,
                "transaction_id,customer_id,created_at,total_amount,payment_status\n\
                 t1,1,2023-01-15 10:00:00,100.0,paid\n\
                 t2,1,2023-02-10 12:00:00,100.0,paid\n\
                 t3,2,2023-02-20 08:30:00,10000.0,paid\n\
                 t4,2,2023-02-21 09:00:00,50.0,refunded\n",
            ),
            (
                SESSIONS_FILE,
                "session_id,customer_id,session_start,session_end\n\
                 s1,1,2023-01-15 10:00:00,2023-01-15 10:30:00\n\
                 s2,1,2023-03-02 11:00:00,2023-03-02 11:20:00\n\
                 s3,2,2023-02-05 09:00:00,\n",
            ),
            (
                CUSTOMERS_FILE,
                "customer_id,signup_date,country\n\
                 1,2023-01-10,DE\n\
                 2,2023-02-01 08:00:00,FR\n",
            ),
            (
                TICKETS_FILE,
                "ticket_id,customer_id,created_at,resolved_at\n\
                 k1,1,2023-01-20 10:00:00,2023-01-21 10:00:00\n\
                 k2,3,2023-02-03 09:00:00,\n",
            ),
            (
                PRODUCTS_FILE,
                "product_id,name,category,price\n\
                 p1,Widget,tools,9.99\n\
                 p2,Gadget,tools,\n",
            ),
        ];
        Self {
            prefix: String::new(),
            files: files
                .into_iter()
                .map(|(name, body)| (name.to_string(), body.to_string()))
                .collect(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with(mut self, name: &str, body: &str) -> Self {
        self.files.retain(|(n, _)| n != name);
        self.files.push((name.to_string(), body.to_string()));
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.files.retain(|(n, _)| n != name);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in &self.files {
            writer
                .start_file(format!("{}{}", self.prefix, name), options)
                .expect("start zip entry");
            writer.write_all(body.as_bytes()).expect("write zip entry");
        }
        writer.finish().expect("finish zip").into_inner()
    }
}

pub fn sample_archive() -> Vec<u8> {
    ArchiveBuilder::sample().build()
}
