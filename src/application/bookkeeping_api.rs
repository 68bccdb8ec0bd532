// Port for the remote bookkeeping API
use crate::domain::account::{Account, AccountNew, AccountUpdate};
use crate::domain::asset::{Asset, AssetNew};
use crate::domain::document::{Document, DocumentDueDate, DocumentNew};
use crate::domain::folder::{Folder, FolderNew, FolderNewDescription, FolderNewName};
use crate::domain::ledger::{LedgerItem, LedgerStat};
use crate::domain::project::{Project, ProjectAction, ProjectNew, ProjectUpdate};
use crate::domain::repository::{Repository, RepositoryNew, RepositoryShort, RepositoryUpdate};
use crate::domain::transaction::{Transaction, TransactionFilter, TransactionNew};
use crate::domain::user::{User, UserNew};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Every read and write the console performs goes through this trait.
/// Implementations own transport, encoding and authentication.
#[async_trait]
pub trait BookkeepingApi: Send + Sync {
    async fn list_repositories(&self) -> anyhow::Result<Vec<RepositoryShort>>;
    async fn get_repository(&self, repository_id: &str) -> anyhow::Result<Repository>;
    async fn create_repository(&self, form: &RepositoryNew) -> anyhow::Result<Repository>;
    async fn update_repository(
        &self,
        repository_id: &str,
        form: &RepositoryUpdate,
    ) -> anyhow::Result<Repository>;

    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
    async fn get_user(&self, user_id: &str) -> anyhow::Result<User>;
    async fn create_user(&self, form: &UserNew) -> anyhow::Result<User>;

    async fn list_accounts(&self, repository_id: &str) -> anyhow::Result<Vec<Account>>;
    async fn get_account(&self, repository_id: &str, account_id: &str) -> anyhow::Result<Account>;
    async fn create_account(&self, repository_id: &str, form: &AccountNew)
    -> anyhow::Result<Account>;
    async fn update_account(
        &self,
        repository_id: &str,
        account_id: &str,
        form: &AccountUpdate,
    ) -> anyhow::Result<Account>;

    async fn list_transactions(
        &self,
        repository_id: &str,
        filter: &TransactionFilter,
    ) -> anyhow::Result<Vec<Transaction>>;
    async fn create_transaction(
        &self,
        repository_id: &str,
        form: &TransactionNew,
    ) -> anyhow::Result<Transaction>;

    /// Account totals for every transaction settled on or before `till`.
    async fn get_ledger(&self, repository_id: &str, till: NaiveDate)
    -> anyhow::Result<Vec<LedgerItem>>;
    /// Current-year monthly movements of accounts starting with `account`.
    async fn get_ledger_stat(&self, repository_id: &str, account: &str)
    -> anyhow::Result<LedgerStat>;

    async fn list_assets(&self, repository_id: &str) -> anyhow::Result<Vec<Asset>>;
    async fn get_asset(&self, repository_id: &str, asset_id: usize) -> anyhow::Result<Asset>;
    async fn create_asset(&self, repository_id: &str, form: &AssetNew) -> anyhow::Result<Asset>;

    async fn list_projects(&self, repository_id: &str) -> anyhow::Result<Vec<Project>>;
    async fn get_project(&self, repository_id: &str, project_id: &str) -> anyhow::Result<Project>;
    async fn create_project(&self, repository_id: &str, form: &ProjectNew)
    -> anyhow::Result<Project>;
    async fn update_project(
        &self,
        repository_id: &str,
        project_id: &str,
        form: &ProjectUpdate,
    ) -> anyhow::Result<Project>;
    async fn project_action(
        &self,
        repository_id: &str,
        project_id: &str,
        action: ProjectAction,
    ) -> anyhow::Result<Project>;

    async fn list_folders(&self) -> anyhow::Result<Vec<Folder>>;
    async fn get_folder(&self, folder_id: &str) -> anyhow::Result<Folder>;
    async fn create_folder(&self, form: &FolderNew) -> anyhow::Result<Folder>;
    async fn rename_folder(&self, folder_id: &str, form: &FolderNewName) -> anyhow::Result<Folder>;
    async fn redescribe_folder(
        &self,
        folder_id: &str,
        form: &FolderNewDescription,
    ) -> anyhow::Result<Folder>;
    async fn set_folder_active(&self, folder_id: &str, active: bool) -> anyhow::Result<Folder>;

    async fn list_documents(&self, folder_id: &str) -> anyhow::Result<Vec<Document>>;
    async fn get_document(&self, document_id: &str) -> anyhow::Result<Document>;
    async fn create_document(&self, folder_id: &str, form: &DocumentNew)
    -> anyhow::Result<Document>;
    async fn set_document_due_date(
        &self,
        document_id: &str,
        form: &DocumentDueDate,
    ) -> anyhow::Result<Document>;
    async fn set_document_active(&self, document_id: &str, active: bool)
    -> anyhow::Result<Document>;
}
