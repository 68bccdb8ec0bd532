// Route table for the console
use crate::presentation::app_state::AppState;
use crate::presentation::error::not_found;
use crate::presentation::handlers::{
    account, asset, folder, health_check, index, project, repository, transaction, user,
};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/repository", get(repository::list_repositories))
        .route(
            "/repository/new",
            get(repository::new_repository_form).post(repository::create_repository),
        )
        .route("/repository/:repository_id", get(repository::show_dashboard))
        .route(
            "/repository/:repository_id/edit",
            get(repository::edit_repository_form).post(repository::update_repository),
        )
        .route("/repository/:repository_id/account", get(account::list_accounts))
        .route(
            "/repository/:repository_id/account/new",
            get(account::new_account_form).post(account::create_account),
        )
        .route(
            "/repository/:repository_id/account/:account_id",
            get(account::show_account).post(account::update_account),
        )
        .route(
            "/repository/:repository_id/transaction",
            get(transaction::list_transactions),
        )
        .route(
            "/repository/:repository_id/transaction/new",
            get(transaction::new_transaction_form).post(transaction::create_transaction),
        )
        .route("/repository/:repository_id/ledger", get(transaction::show_ledger))
        .route("/repository/:repository_id/asset", get(asset::list_assets))
        .route(
            "/repository/:repository_id/asset/new",
            get(asset::new_asset_form).post(asset::create_asset),
        )
        .route("/repository/:repository_id/asset/:asset_id", get(asset::show_asset))
        .route("/repository/:repository_id/project", get(project::list_projects))
        .route(
            "/repository/:repository_id/project/new",
            get(project::new_project_form).post(project::create_project),
        )
        .route(
            "/repository/:repository_id/project/:project_id",
            get(project::show_project).post(project::update_project),
        )
        .route(
            "/repository/:repository_id/project/:project_id/:action",
            post(project::project_action),
        )
        .route("/user", get(user::list_users))
        .route("/user/new", get(user::new_user_form).post(user::create_user))
        .route("/user/:user_id", get(user::show_user))
        .route("/folder", get(folder::list_folders))
        .route("/folder/new", get(folder::new_folder_form).post(folder::create_folder))
        .route("/folder/:folder_id", get(folder::show_folder))
        .route("/folder/:folder_id/rename", post(folder::rename_folder))
        .route("/folder/:folder_id/redescription", post(folder::redescribe_folder))
        .route("/folder/:folder_id/remove", post(folder::remove_folder))
        .route("/folder/:folder_id/restore", post(folder::restore_folder))
        .route(
            "/folder/:folder_id/new",
            get(folder::new_document_form).post(folder::create_document),
        )
        .route("/document/:document_id", get(folder::show_document))
        .route("/document/:document_id/due_date", post(folder::set_document_due_date))
        .route("/document/:document_id/remove", post(folder::remove_document))
        .route("/document/:document_id/restore", post(folder::restore_document))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
