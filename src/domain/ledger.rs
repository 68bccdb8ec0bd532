// Ledger domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerItem {
    pub account_id: String,
    pub name: String,
    pub is_working: bool,
    pub is_inverse: bool,
    pub is_active: bool,
    pub debit_total: i64,
    pub credit_total: i64,
    pub total: i64,
}

/// Monthly account movements for the current year, January first.
/// Months without any transaction come back as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerStat(pub [Option<i64>; 12]);

impl LedgerStat {
    pub fn monthly_values(&self) -> Vec<i64> {
        self.0.iter().map(|v| v.unwrap_or(0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_decodes_nulls_as_zero() {
        let stat: LedgerStat =
            serde_json::from_str("[100,null,-40,null,null,null,null,null,null,null,null,7]")
                .unwrap();
        let values = stat.monthly_values();
        assert_eq!(values.len(), 12);
        assert_eq!(values[0], 100);
        assert_eq!(values[1], 0);
        assert_eq!(values[2], -40);
        assert_eq!(values[11], 7);
    }

    #[test]
    fn test_stat_rejects_short_series() {
        assert!(serde_json::from_str::<LedgerStat>("[1,2,3]").is_err());
    }
}
