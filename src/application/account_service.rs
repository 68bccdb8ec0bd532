// Account service - Use cases for the chart of accounts
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::account::{Account, AccountNew, AccountUpdate};
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountService {
    api: Arc<dyn BookkeepingApi>,
}

impl AccountService {
    pub fn new(api: Arc<dyn BookkeepingApi>) -> Self {
        Self { api }
    }

    /// Accounts ordered by their number, the way a chart of accounts reads.
    pub async fn list_accounts(&self, repository_id: &str) -> anyhow::Result<Vec<Account>> {
        let mut accounts = self.api.list_accounts(repository_id).await?;
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts)
    }

    pub async fn get_account(
        &self,
        repository_id: &str,
        account_id: &str,
    ) -> anyhow::Result<Account> {
        self.api.get_account(repository_id, account_id).await
    }

    pub async fn create_account(
        &self,
        repository_id: &str,
        form: &AccountNew,
    ) -> anyhow::Result<Account> {
        self.api.create_account(repository_id, form).await
    }

    pub async fn update_account(
        &self,
        repository_id: &str,
        account_id: &str,
        form: &AccountUpdate,
    ) -> anyhow::Result<Account> {
        self.api.update_account(repository_id, account_id, form).await
    }
}
