//! Rate resolution with a fallback chain: remote fetch, then a local
//! snapshot from the last successful fetch, then built-in rates.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::rates::{RateProvider, RateTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOrigin {
    Remote,
    Snapshot,
    Builtin,
}

#[derive(Debug)]
pub struct LoadedRates {
    pub table: RateTable,
    pub origin: RateOrigin,
    /// User-visible warning when the live fetch failed. Shown once and
    /// never escalated to an error.
    pub warning: Option<String>,
}

pub struct RateSource<'a> {
    provider: &'a dyn RateProvider,
    snapshot_path: PathBuf,
    base: String,
}

impl<'a> RateSource<'a> {
    pub fn new(provider: &'a dyn RateProvider, snapshot_path: &Path, base: &str) -> Self {
        RateSource {
            provider,
            snapshot_path: snapshot_path.to_path_buf(),
            base: base.to_string(),
        }
    }

    /// Resolves a usable rate table. Never fails: the worst case is the
    /// built-in table with degraded freshness.
    pub async fn load(&self) -> LoadedRates {
        match self.provider.fetch_latest(&self.base).await {
            Ok(doc) => {
                let table = RateTable::from_document(&doc);
                if let Err(e) = self.write_snapshot(&table) {
                    warn!(error = %e, "Failed to write rates snapshot");
                }
                return LoadedRates {
                    table,
                    origin: RateOrigin::Remote,
                    warning: None,
                };
            }
            Err(e) => warn!(error = %e, "Live rate fetch failed"),
        }

        match self.read_snapshot() {
            Ok(table) => LoadedRates {
                table,
                origin: RateOrigin::Snapshot,
                warning: Some(
                    "Could not fetch live exchange rates. Using the last saved rates.".to_string(),
                ),
            },
            Err(e) => {
                debug!(error = %e, "No usable rates snapshot");
                LoadedRates {
                    table: RateTable::builtin_fallback(),
                    origin: RateOrigin::Builtin,
                    warning: Some(
                        "Could not fetch live exchange rates. Using built-in fallback rates."
                            .to_string(),
                    ),
                }
            }
        }
    }

    fn write_snapshot(&self, table: &RateTable) -> Result<()> {
        if let Some(parent) = self.snapshot_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&self.snapshot_path, json).with_context(|| {
            format!("Failed to write snapshot: {}", self.snapshot_path.display())
        })?;
        debug!("Saved rates snapshot to {}", self.snapshot_path.display());
        Ok(())
    }

    fn read_snapshot(&self) -> Result<RateTable> {
        let json = fs::read_to_string(&self.snapshot_path).with_context(|| {
            format!("Failed to read snapshot: {}", self.snapshot_path.display())
        })?;
        let table: RateTable = serde_json::from_str(&json).with_context(|| {
            format!("Failed to parse snapshot: {}", self.snapshot_path.display())
        })?;
        if table.currencies.is_empty() {
            return Err(anyhow!("Snapshot contains no currencies"));
        }
        if !table.currencies.contains_key(&table.base) {
            return Err(anyhow!(
                "Snapshot is missing its base currency: {}",
                table.base
            ));
        }
        Ok(table)
    }
}
