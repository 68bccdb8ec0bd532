// Transaction service - Use cases for postings and the ledger
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::ledger::LedgerItem;
use crate::domain::transaction::{Transaction, TransactionFilter, TransactionNew};
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Clone)]
pub struct TransactionService {
    api: Arc<dyn BookkeepingApi>,
}

impl TransactionService {
    pub fn new(api: Arc<dyn BookkeepingApi>) -> Self {
        Self { api }
    }

    pub async fn list_transactions(
        &self,
        repository_id: &str,
        filter: &TransactionFilter,
    ) -> anyhow::Result<Vec<Transaction>> {
        self.api.list_transactions(repository_id, filter).await
    }

    pub async fn create_transaction(
        &self,
        repository_id: &str,
        form: &TransactionNew,
    ) -> anyhow::Result<Transaction> {
        let transaction = self.api.create_transaction(repository_id, form).await?;
        tracing::info!(
            "Created transaction {} in repository {} ({}/{} {})",
            transaction.id,
            repository_id,
            transaction.debit,
            transaction.credit,
            transaction.amount
        );
        Ok(transaction)
    }

    /// Ledger as of `till`, ordered by account number.
    pub async fn ledger(
        &self,
        repository_id: &str,
        till: NaiveDate,
    ) -> anyhow::Result<Vec<LedgerItem>> {
        let mut ledger = self.api.get_ledger(repository_id, till).await?;
        ledger.sort_by(|a, b| a.account_id.cmp(&b.account_id));
        Ok(ledger)
    }
}
