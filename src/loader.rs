// Dataset loading with per-source memoization.
use crate::model::{Datasets, LoadError};
use crate::normalizer::normalize_all;
use crate::parser::Parser;
use crate::source::ArchiveSource;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;
use tracing::{debug, info};

static GLOBAL_CACHE: OnceLock<DatasetCache> = OnceLock::new();

/// Loaded datasets keyed by source id. Entries live until the process exits.
#[derive(Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<String, Arc<Datasets>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache.
    pub fn global() -> &'static DatasetCache {
        GLOBAL_CACHE.get_or_init(DatasetCache::new)
    }

    /// Fetches, parses and normalizes the archive on first use of `source.id()`;
    /// later calls share the same tables. Failures are not cached.
    pub async fn load<P: Parser>(
        &self,
        source: &dyn ArchiveSource,
        parser: &P,
    ) -> Result<Arc<Datasets>, LoadError> {
        let mut entries = self.entries.lock().await;
        if let Some(hit) = entries.get(source.id()) {
            debug!("Dataset cache hit for {}", source.id());
            return Ok(hit.clone());
        }

        let bytes = source.fetch().await?;
        let mut datasets = parser.parse(&bytes)?;
        normalize_all(&mut datasets);
        info!(
            "Loaded {} transactions, {} sessions, {} customers, {} tickets, {} products",
            datasets.transactions.len(),
            datasets.sessions.len(),
            datasets.customers.len(),
            datasets.tickets.len(),
            datasets.products.len()
        );

        let datasets = Arc::new(datasets);
        entries.insert(source.id().to_string(), datasets.clone());
        Ok(datasets)
    }
}
