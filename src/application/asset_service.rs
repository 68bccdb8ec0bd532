// Asset service - Use cases for fixed assets
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::asset::{depreciation_totals, Asset, AssetNew, DepreciationTotals};
use chrono::NaiveDate;
use std::sync::Arc;

/// Asset list together with the depreciation of the current period.
#[derive(Debug, Clone)]
pub struct AssetOverview {
    pub assets: Vec<Asset>,
    pub totals: DepreciationTotals,
    pub today: NaiveDate,
}

#[derive(Clone)]
pub struct AssetService {
    api: Arc<dyn BookkeepingApi>,
}

impl AssetService {
    pub fn new(api: Arc<dyn BookkeepingApi>) -> Self {
        Self { api }
    }

    pub async fn overview(
        &self,
        repository_id: &str,
        today: NaiveDate,
    ) -> anyhow::Result<AssetOverview> {
        let assets = self.api.list_assets(repository_id).await?;
        let totals = depreciation_totals(&assets, today);
        Ok(AssetOverview {
            assets,
            totals,
            today,
        })
    }

    pub async fn get_asset(&self, repository_id: &str, asset_id: usize) -> anyhow::Result<Asset> {
        self.api.get_asset(repository_id, asset_id).await
    }

    pub async fn create_asset(&self, repository_id: &str, form: &AssetNew) -> anyhow::Result<Asset> {
        let asset = self.api.create_asset(repository_id, form).await?;
        tracing::info!("Created asset {} in repository {}", asset.id, repository_id);
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake_api::{FakeApi, FakeData};
    use crate::domain::asset::DepreciationMonth;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_overview_sums_current_period() {
        let mut data = FakeData::default();
        data.assets = vec![Asset {
            id: 1,
            name: "Laptop".into(),
            depreciation_monthly: vec![
                DepreciationMonth {
                    date: date(2026, 9, 30),
                    monthly: 10_000,
                    cumulated: 10_000,
                },
                DepreciationMonth {
                    date: date(2026, 10, 31),
                    monthly: 10_000,
                    cumulated: 20_000,
                },
            ],
            ..Default::default()
        }];
        let service = AssetService::new(Arc::new(FakeApi::with(data)));

        let overview = service.overview("r1", date(2026, 10, 16)).await.unwrap();

        assert_eq!(overview.assets.len(), 1);
        assert_eq!(overview.totals.year, 20_000);
        assert_eq!(overview.totals.month, 10_000);
    }
}
