// Fixed asset domain model and depreciation aggregation
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub account: String,
    pub account_clearing: String,
    pub value: u32,
    pub date_activated: NaiveDate,
    pub depreciation_key: f32,
    pub residual_value: u32,
    pub date_created: DateTime<Utc>,
    pub created_by: String,
    pub is_active: bool,
    pub depreciation_last_day_value: u32,
    pub depreciation_last_day: NaiveDate,
    pub depreciation_daily_value: u32,
    pub depreciation_monthly: Vec<DepreciationMonth>,
}

/// One row of an asset's depreciation schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepreciationMonth {
    pub date: NaiveDate,
    pub monthly: u32,
    pub cumulated: u32,
}

// The API serializes schedule rows as `[date, monthly, cumulated]` tuples,
// older payloads used objects with a misspelled `cummulated` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum DepreciationMonthWire {
    Tuple(NaiveDate, u32, u32),
    Object {
        date: NaiveDate,
        monthly: u32,
        #[serde(alias = "cummulated")]
        cumulated: u32,
    },
}

impl<'de> Deserialize<'de> for DepreciationMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let month = match DepreciationMonthWire::deserialize(deserializer)? {
            DepreciationMonthWire::Tuple(date, monthly, cumulated) => DepreciationMonth {
                date,
                monthly,
                cumulated,
            },
            DepreciationMonthWire::Object {
                date,
                monthly,
                cumulated,
            } => DepreciationMonth {
                date,
                monthly,
                cumulated,
            },
        };
        Ok(month)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetNew {
    pub name: String,
    pub description: String,
    pub account: String,
    pub account_clearing: String,
    pub value: u32,
    pub date_activated: NaiveDate,
    pub depreciation_key: f32,
    pub residual_value: u32,
}

impl Default for AssetNew {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            account: String::new(),
            account_clearing: String::new(),
            value: 0,
            date_activated: Local::now().date_naive(),
            depreciation_key: 0.0,
            residual_value: 0,
        }
    }
}

/// Depreciation sums for the calendar year and month of a reference day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepreciationTotals {
    pub year: u64,
    pub month: u64,
}

impl Asset {
    pub fn depreciation_in_year(&self, year: i32) -> u64 {
        self.depreciation_monthly
            .iter()
            .filter(|m| m.date.year() == year)
            .map(|m| u64::from(m.monthly))
            .sum()
    }

    pub fn depreciation_in_month(&self, year: i32, month: u32) -> u64 {
        self.depreciation_monthly
            .iter()
            .filter(|m| m.date.year() == year && m.date.month() == month)
            .map(|m| u64::from(m.monthly))
            .sum()
    }

    pub fn depreciation_totals(&self, today: NaiveDate) -> DepreciationTotals {
        DepreciationTotals {
            year: self.depreciation_in_year(today.year()),
            month: self.depreciation_in_month(today.year(), today.month()),
        }
    }
}

/// Sum the depreciation of every asset for the year and the month of `today`.
pub fn depreciation_totals(assets: &[Asset], today: NaiveDate) -> DepreciationTotals {
    assets
        .iter()
        .map(|a| a.depreciation_totals(today))
        .fold(DepreciationTotals::default(), |acc, t| DepreciationTotals {
            year: acc.year + t.year,
            month: acc.month + t.month,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn asset_with_schedule(rows: &[(NaiveDate, u32)]) -> Asset {
        let mut cumulated = 0;
        let depreciation_monthly = rows
            .iter()
            .map(|&(date, monthly)| {
                cumulated += monthly;
                DepreciationMonth {
                    date,
                    monthly,
                    cumulated,
                }
            })
            .collect();
        Asset {
            depreciation_monthly,
            ..Asset::default()
        }
    }

    #[test]
    fn test_totals_only_count_current_period() {
        let asset = asset_with_schedule(&[
            (date(2025, 11, 30), 100),
            (date(2025, 12, 31), 100),
            (date(2026, 1, 31), 200),
            (date(2026, 2, 28), 300),
            (date(2026, 3, 31), 400),
            (date(2027, 1, 31), 999),
        ]);

        let totals = asset.depreciation_totals(date(2026, 2, 14));
        assert_eq!(totals.year, 900);
        assert_eq!(totals.month, 300);
    }

    #[test]
    fn test_totals_across_assets() {
        let assets = vec![
            asset_with_schedule(&[(date(2026, 5, 31), 1_000), (date(2026, 6, 30), 1_000)]),
            asset_with_schedule(&[(date(2026, 6, 30), 250)]),
            Asset::default(),
        ];

        let totals = depreciation_totals(&assets, date(2026, 6, 1));
        assert_eq!(
            totals,
            DepreciationTotals {
                year: 2_250,
                month: 1_250
            }
        );
    }

    #[test]
    fn test_totals_leave_schedule_untouched() {
        let assets = vec![asset_with_schedule(&[
            (date(2026, 1, 31), 10),
            (date(2026, 2, 28), 20),
        ])];
        let before: Vec<DepreciationMonth> = assets[0].depreciation_monthly.clone();

        depreciation_totals(&assets, date(2026, 2, 1));
        depreciation_totals(&assets, date(2026, 2, 1));

        assert_eq!(assets[0].depreciation_monthly, before);
    }

    #[test]
    fn test_totals_do_not_overflow_u32() {
        let asset = asset_with_schedule(&[
            (date(2026, 1, 31), u32::MAX),
            (date(2026, 1, 31), u32::MAX),
        ]);
        assert_eq!(asset.depreciation_in_year(2026), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_schedule_accepts_tuple_and_object_rows() {
        let json = r#"{
            "id": 3,
            "name": "Laptop",
            "depreciation_monthly": [
                ["2026-01-31", 100, 100],
                {"date": "2026-02-28", "monthly": 120, "cummulated": 220}
            ]
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, 3);
        assert!(asset.description.is_empty());
        assert_eq!(
            asset.depreciation_monthly,
            vec![
                DepreciationMonth {
                    date: date(2026, 1, 31),
                    monthly: 100,
                    cumulated: 100
                },
                DepreciationMonth {
                    date: date(2026, 2, 28),
                    monthly: 120,
                    cumulated: 220
                },
            ]
        );
    }
}
