// Dashboard service - Use case for building repository dashboards
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::chart::{cumulative_sum, ChartKind, LineChart};
use crate::domain::dashboard::Dashboard;
use crate::infrastructure::config::{ChartConfig, DashboardConfig};
use chrono::{Datelike, NaiveDate};
use futures::future::join_all;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn BookkeepingApi>,
    dashboard_config: DashboardConfig,
}

impl DashboardService {
    pub fn new(api: Arc<dyn BookkeepingApi>, dashboard_config: DashboardConfig) -> Self {
        Self {
            api,
            dashboard_config,
        }
    }

    pub async fn get_dashboard(
        &self,
        repository_id: &str,
        today: NaiveDate,
    ) -> anyhow::Result<Dashboard> {
        let (repository, charts) = futures::join!(
            self.api.get_repository(repository_id),
            self.fetch_charts(repository_id)
        );

        Ok(Dashboard::new(repository?, today.year(), charts))
    }

    /// Fetch every configured chart concurrently. A chart whose statistics
    /// fail to load is logged and left out; the others are still returned
    /// in configuration order.
    async fn fetch_charts(&self, repository_id: &str) -> Vec<LineChart> {
        let fetches = self
            .dashboard_config
            .charts
            .iter()
            .map(|chart_config| self.fetch_chart(repository_id, chart_config));

        join_all(fetches).await.into_iter().flatten().collect()
    }

    async fn fetch_chart(&self, repository_id: &str, chart_config: &ChartConfig) -> Option<LineChart> {
        match self
            .api
            .get_ledger_stat(repository_id, &chart_config.account)
            .await
        {
            Ok(stat) => {
                let monthly = stat.monthly_values();
                let data = if chart_config.cumulative {
                    cumulative_sum(&monthly)
                } else {
                    monthly
                };

                tracing::debug!(
                    "Loaded chart {} for repository {} (account {})",
                    chart_config.id,
                    repository_id,
                    chart_config.account
                );

                Some(
                    LineChart::new(
                        chart_config.id.clone(),
                        chart_config.title.clone(),
                        ChartKind::from_name(&chart_config.kind),
                        data,
                    )
                    .with_colors(
                        chart_config.border_color.clone(),
                        chart_config.background_color.clone(),
                    ),
                )
            }
            Err(e) => {
                tracing::warn!(
                    "Error fetching chart {} for repository {}: {:#}",
                    chart_config.id,
                    repository_id,
                    e
                );
                None
            }
        }
    }
}
