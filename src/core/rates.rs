//! Rate table and conversion math.

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::core::catalog;

/// Latest-rates document as served by the exchange rate API.
#[derive(Debug, Clone, Deserialize)]
pub struct RateDocument {
    pub base: String,
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_latest(&self, base: &str) -> Result<RateDocument>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyEntry {
    pub name: String,
    pub symbol: String,
    pub rate: f64,
}

/// All rates are relative to a single base currency. A table is built once
/// per load and replaced wholesale on the next fetch, never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    pub last_update: String,
    pub currencies: BTreeMap<String, CurrencyEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub result: f64,
    pub rate: f64,
}

impl RateTable {
    /// Builds a table from a remote document, keeping only catalog currencies
    /// with positive rates. The base currency is always present at rate 1.0.
    pub fn from_document(doc: &RateDocument) -> Self {
        let mut currencies = BTreeMap::new();
        for (code, name, symbol) in catalog::KNOWN_CURRENCIES {
            if let Some(rate) = doc.rates.get(*code)
                && *rate > 0.0
            {
                currencies.insert(
                    code.to_string(),
                    CurrencyEntry {
                        name: name.to_string(),
                        symbol: symbol.to_string(),
                        rate: *rate,
                    },
                );
            }
        }

        let (name, symbol) = catalog::lookup(&doc.base).unwrap_or((doc.base.as_str(), ""));
        currencies.insert(
            doc.base.clone(),
            CurrencyEntry {
                name: name.to_string(),
                symbol: symbol.to_string(),
                rate: 1.0,
            },
        );

        RateTable {
            base: doc.base.clone(),
            last_update: doc
                .date
                .clone()
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
            currencies,
        }
    }

    /// Last-resort table used when both the remote fetch and the local
    /// snapshot are unavailable.
    pub fn builtin_fallback() -> Self {
        let mut currencies = BTreeMap::new();
        for (code, rate) in [("USD", 1.0), ("EUR", 0.92), ("ARS", 850.0)] {
            let (name, symbol) = catalog::lookup(code).expect("builtin codes are in the catalog");
            currencies.insert(
                code.to_string(),
                CurrencyEntry {
                    name: name.to_string(),
                    symbol: symbol.to_string(),
                    rate,
                },
            );
        }
        RateTable {
            base: "USD".to_string(),
            last_update: Utc::now().format("%Y-%m-%d").to_string(),
            currencies,
        }
    }

    pub fn entry(&self, code: &str) -> Result<&CurrencyEntry> {
        self.currencies
            .get(code)
            .ok_or_else(|| anyhow!("Unknown currency code: {code}"))
    }

    pub fn symbol(&self, code: &str) -> Option<&str> {
        self.currencies.get(code).map(|e| e.symbol.as_str())
    }

    /// Multiplicative factor converting one unit of `from` into `to`.
    /// Both rates are relative to the same base, so the base cancels.
    pub fn cross_rate(&self, from: &str, to: &str) -> Result<f64> {
        let from_rate = self.entry(from)?.rate;
        let to_rate = self.entry(to)?.rate;
        Ok(to_rate / from_rate)
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion> {
        let rate = self.cross_rate(from, to)?;
        Ok(Conversion {
            result: amount * rate,
            rate,
        })
    }
}

/// Validates a conversion request before it reaches the engine. Violations
/// are user input errors and must not mutate any state.
pub fn validate_request(table: &RateTable, amount: f64, from: &str, to: &str) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        bail!("Please enter a valid amount greater than 0");
    }
    if from == to {
        bail!("Please select two different currencies");
    }
    table.entry(from)?;
    table.entry(to)?;
    Ok(())
}
