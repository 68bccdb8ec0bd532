use super::{rejected, see_other, seg, today, PageResult};
use crate::domain::transaction::{TransactionFilter, TransactionNew};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ConsoleError;
use crate::presentation::forms::{parse_date, FormErrors, TransactionForm};
use crate::presentation::views::transaction as view;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct LedgerQuery {
    pub till: Option<String>,
}

pub async fn list_transactions(
    Path(repository_id): Path<String>,
    Query(filter): Query<TransactionFilter>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let transactions = state
        .transaction_service
        .list_transactions(&repository_id, &filter)
        .await?;
    Ok(view::transaction_list(&repository_id, &transactions, &filter).into_response())
}

pub async fn new_transaction_form(Path(repository_id): Path<String>) -> PageResult {
    let form = TransactionForm::from(TransactionNew::default());
    Ok(view::transaction_new(&repository_id, &form, &FormErrors::default()).into_response())
}

pub async fn create_transaction(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<TransactionForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => return Ok(rejected(view::transaction_new(&repository_id, &form, &errors))),
    };
    state
        .transaction_service
        .create_transaction(&repository_id, &model)
        .await?;
    see_other(format!("/repository/{}/transaction", seg(&repository_id)))
}

pub async fn show_ledger(
    Path(repository_id): Path<String>,
    Query(query): Query<LedgerQuery>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let till = match query.till.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(raw) => parse_date(raw)
            .ok_or_else(|| ConsoleError::BadRequest(format!("'{}' is not a valid date", raw)))?,
        None => today(),
    };
    let items = state.transaction_service.ledger(&repository_id, till).await?;
    Ok(view::ledger(&repository_id, till, &items).into_response())
}
