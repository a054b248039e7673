pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::ui::{self, StyleType};
use crate::core::config::AppConfig;
use crate::core::history::ConversionRecord;
use crate::core::rates::{RateTable, validate_request};
use crate::providers::exchange_rate_api::ExchangeRateApiProvider;
use crate::providers::source::RateSource;
use crate::store::HistoryStore;

pub enum AppCommand {
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    Rates,
    History,
    ClearHistory,
}

/// Owns the loaded rate table and the history store for one run.
pub struct Session {
    pub rates: RateTable,
    pub history: HistoryStore,
}

impl Session {
    pub fn new(rates: RateTable, history: HistoryStore) -> Self {
        Session { rates, history }
    }

    /// Validates and performs a conversion, appending the record to the
    /// history. Rejected input leaves the history untouched.
    pub fn convert(&mut self, amount: f64, from: &str, to: &str) -> Result<ConversionRecord> {
        validate_request(&self.rates, amount, from, to)?;
        let conversion = self.rates.convert(amount, from, to)?;
        let record = ConversionRecord::new(amount, from, to, conversion.result, conversion.rate);
        self.history.append(record.clone());
        Ok(record)
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let data_path = config.default_data_path()?;
    let mut history = HistoryStore::open(&data_path.join("history"));

    match command {
        AppCommand::History => {
            cli::history::display(history.records());
            Ok(())
        }
        AppCommand::ClearHistory => {
            history.clear();
            println!("Conversion history cleared.");
            Ok(())
        }
        AppCommand::Rates => {
            let session = Session::new(load_rates(&config, &data_path).await, history);
            cli::rates::display(&session.rates);
            Ok(())
        }
        AppCommand::Convert { amount, from, to } => {
            let mut session = Session::new(load_rates(&config, &data_path).await, history);
            let record = session.convert(amount, &from, &to)?;
            cli::convert::display(&record, &session.rates);
            Ok(())
        }
    }
}

/// Fetches the rate table through the fallback chain, with a spinner while
/// the request is in flight and a one-shot warning banner on degraded data.
async fn load_rates(config: &AppConfig, data_path: &std::path::Path) -> RateTable {
    let provider = ExchangeRateApiProvider::new(&config.provider.base_url);
    let snapshot_path = data_path.join("rates.json");
    let source = RateSource::new(&provider, &snapshot_path, &config.base_currency);

    let spinner = ui::new_spinner("Fetching latest exchange rates...");
    let loaded = source.load().await;
    spinner.finish_and_clear();

    debug!("Loaded rates via {:?}", loaded.origin);
    if let Some(warning) = &loaded.warning {
        eprintln!("{}", ui::style_text(warning, StyleType::Warning));
    }
    loaded.table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::RateDocument;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn test_session(dir: &std::path::Path) -> Session {
        let doc = RateDocument {
            base: "USD".to_string(),
            date: Some("2026-08-20".to_string()),
            rates: HashMap::from([
                ("USD".to_string(), 1.0),
                ("EUR".to_string(), 0.92),
                ("ARS".to_string(), 850.0),
            ]),
        };
        Session::new(RateTable::from_document(&doc), HistoryStore::open(dir))
    }

    #[test]
    fn test_convert_appends_to_history() {
        let dir = tempdir().unwrap();
        let mut session = test_session(dir.path());

        let record = session.convert(100.0, "USD", "EUR").unwrap();
        assert!((record.result - 92.0).abs() < 1e-9);
        assert_eq!(session.history.records().len(), 1);
        assert_eq!(session.history.records()[0], record);
    }

    #[test]
    fn test_invalid_amount_leaves_history_untouched() {
        let dir = tempdir().unwrap();
        let mut session = test_session(dir.path());

        assert!(session.convert(0.0, "USD", "EUR").is_err());
        assert!(session.convert(-5.0, "USD", "EUR").is_err());
        assert!(session.history.records().is_empty());
    }

    #[test]
    fn test_same_currency_leaves_history_untouched() {
        let dir = tempdir().unwrap();
        let mut session = test_session(dir.path());

        assert!(session.convert(100.0, "EUR", "EUR").is_err());
        assert!(session.history.records().is_empty());
    }

    #[test]
    fn test_unknown_currency_leaves_history_untouched() {
        let dir = tempdir().unwrap();
        let mut session = test_session(dir.path());

        assert!(session.convert(100.0, "USD", "XYZ").is_err());
        assert!(session.history.records().is_empty());
    }
}
