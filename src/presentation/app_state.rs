// Application state for HTTP handlers
use crate::application::account_service::AccountService;
use crate::application::asset_service::AssetService;
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::application::dashboard_service::DashboardService;
use crate::application::document_service::DocumentService;
use crate::application::project_service::ProjectService;
use crate::application::repository_service::RepositoryService;
use crate::application::transaction_service::TransactionService;
use crate::application::user_service::UserService;
use crate::infrastructure::config::DashboardConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository_service: RepositoryService,
    pub user_service: UserService,
    pub account_service: AccountService,
    pub transaction_service: TransactionService,
    pub asset_service: AssetService,
    pub project_service: ProjectService,
    pub document_service: DocumentService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    /// Wire every service to the same API client.
    pub fn new(api: Arc<dyn BookkeepingApi>, dashboard_config: DashboardConfig) -> Self {
        Self {
            repository_service: RepositoryService::new(api.clone()),
            user_service: UserService::new(api.clone()),
            account_service: AccountService::new(api.clone()),
            transaction_service: TransactionService::new(api.clone()),
            asset_service: AssetService::new(api.clone()),
            project_service: ProjectService::new(api.clone()),
            document_service: DocumentService::new(api.clone()),
            dashboard_service: DashboardService::new(api, dashboard_config),
        }
    }
}
