use super::{rejected, see_other, seg, PageResult};
use crate::presentation::app_state::AppState;
use crate::presentation::forms::{AccountForm, FormErrors};
use crate::presentation::views::account as view;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;
use std::sync::Arc;

pub async fn list_accounts(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let accounts = state.account_service.list_accounts(&repository_id).await?;
    Ok(view::account_list(&repository_id, &accounts).into_response())
}

pub async fn new_account_form(Path(repository_id): Path<String>) -> PageResult {
    Ok(view::account_new(&repository_id, &AccountForm::default(), &FormErrors::default()).into_response())
}

pub async fn create_account(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<AccountForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => return Ok(rejected(view::account_new(&repository_id, &form, &errors))),
    };
    state
        .account_service
        .create_account(&repository_id, &model)
        .await?;
    see_other(format!("/repository/{}/account", seg(&repository_id)))
}

pub async fn show_account(
    Path((repository_id, account_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let account = state
        .account_service
        .get_account(&repository_id, &account_id)
        .await?;
    let form = AccountForm::from(&account);
    Ok(view::account_edit(&repository_id, &account, &form, &FormErrors::default()).into_response())
}

pub async fn update_account(
    Path((repository_id, account_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<AccountForm>,
) -> PageResult {
    let model = match form.to_update() {
        Ok(model) => model,
        Err(errors) => {
            let account = state
                .account_service
                .get_account(&repository_id, &account_id)
                .await?;
            return Ok(rejected(view::account_edit(&repository_id, &account, &form, &errors)));
        }
    };
    state
        .account_service
        .update_account(&repository_id, &account_id, &model)
        .await?;
    see_other(format!("/repository/{}/account", seg(&repository_id)))
}
