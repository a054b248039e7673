//! Persistent conversion history backed by a local key-value store.

use anyhow::{Context, Result};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::history::{ConversionRecord, HISTORY_CAP};

const HISTORY_PARTITION: &str = "history";
const HISTORY_KEY: &str = "conversions";

/// Bounded, newest-first conversion history. Storage failures are never
/// fatal: a store that cannot open or write its keyspace keeps working in
/// memory for the rest of the session.
pub struct HistoryStore {
    keyspace: Option<Keyspace>,
    partition: Option<PartitionHandle>,
    records: Vec<ConversionRecord>,
}

impl HistoryStore {
    /// Opens the store at `path` and loads any persisted history.
    pub fn open(path: &Path) -> Self {
        let keyspace = match fjall::Config::new(path).open() {
            Ok(ks) => Some(ks),
            Err(e) => {
                warn!(error = %e, "Failed to open history store, history will not persist");
                None
            }
        };

        let partition = keyspace.as_ref().and_then(|ks| {
            match ks.open_partition(HISTORY_PARTITION, PartitionCreateOptions::default()) {
                Ok(partition) => Some(partition),
                Err(e) => {
                    warn!(error = %e, "Failed to open history partition");
                    None
                }
            }
        });

        let records = partition.as_ref().map(Self::load_records).unwrap_or_default();

        HistoryStore {
            keyspace,
            partition,
            records,
        }
    }

    fn load_records(partition: &PartitionHandle) -> Vec<ConversionRecord> {
        match partition.get(HISTORY_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(error = %e, "Persisted history is unreadable, starting fresh");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted history");
                Vec::new()
            }
        }
    }

    /// Newest first.
    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    /// Prepends a record, dropping the oldest entry beyond the cap, then
    /// persists the full log.
    pub fn append(&mut self, record: ConversionRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAP);
        if let Err(e) = self.persist() {
            warn!(error = %e, "Failed to persist history");
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(e) = self.persist() {
            warn!(error = %e, "Failed to persist history");
        }
    }

    /// Writes the full log under a single key. Callers treat failures as
    /// non-fatal; the in-memory log stays authoritative either way.
    pub fn persist(&self) -> Result<()> {
        let partition = self
            .partition
            .as_ref()
            .context("History store is memory-only")?;
        let json = serde_json::to_vec(&self.records)?;
        partition.insert(HISTORY_KEY, json)?;
        if let Some(ks) = &self.keyspace {
            ks.persist(PersistMode::SyncAll)?;
        }
        debug!("Persisted {} history records", self.records.len());
        Ok(())
    }
}
