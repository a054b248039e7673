//! Conversion history records.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Maximum number of conversions kept in the history.
pub const HISTORY_CAP: usize = 10;

/// A single completed conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Creation time in epoch milliseconds, doubles as a unique id.
    pub id: i64,
    /// Human-readable creation time.
    pub timestamp: String,
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
    /// Effective cross rate used for this conversion.
    pub rate: f64,
}

impl ConversionRecord {
    pub fn new(amount: f64, from: &str, to: &str, result: f64, rate: f64) -> Self {
        let now = Local::now();
        ConversionRecord {
            id: now.timestamp_millis(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            amount,
            from: from.to_string(),
            to: to.to_string(),
            result,
            rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = ConversionRecord::new(100.0, "USD", "EUR", 92.0, 0.92);
        assert_eq!(record.amount, 100.0);
        assert_eq!(record.from, "USD");
        assert_eq!(record.to, "EUR");
        assert_eq!(record.result, 92.0);
        assert_eq!(record.rate, 0.92);
        assert!(record.id > 0);
        assert!(!record.timestamp.is_empty());
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = ConversionRecord::new(10.0, "EUR", "ARS", 9239.13, 923.91);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ConversionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
