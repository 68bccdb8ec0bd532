// Transaction domain models
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: usize,
    pub subject: String,
    pub debit: String,
    pub credit: String,
    pub amount: i32,
    pub date_created: DateTime<Utc>,
    pub date_settlement: NaiveDate,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionNew {
    pub subject: String,
    pub debit: String,
    pub credit: String,
    pub amount: i32,
    pub date_settlement: NaiveDate,
}

impl Default for TransactionNew {
    fn default() -> Self {
        Self {
            subject: String::new(),
            debit: String::new(),
            credit: String::new(),
            amount: 0,
            date_settlement: Local::now().date_naive(),
        }
    }
}

/// Optional list filter. Values are forwarded to the API as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub from: Option<String>,
    pub till: Option<String>,
    pub account: Option<String>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Non-empty filter fields in the order the API documents them.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("from", self.from.as_deref()),
            ("till", self.till.as_deref()),
            ("account", self.account.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pairs_skip_blank_values() {
        let filter = TransactionFilter {
            from: Some("2026-01-01".into()),
            till: Some(String::new()),
            account: Some("38".into()),
        };
        assert_eq!(filter.pairs(), vec![("from", "2026-01-01"), ("account", "38")]);
        assert!(!filter.is_empty());
        assert!(TransactionFilter::default().is_empty());
    }

    #[test]
    fn test_new_transaction_defaults_to_today() {
        let model = TransactionNew::default();
        assert_eq!(model.date_settlement, Local::now().date_naive());
        assert_eq!(model.amount, 0);
    }
}
