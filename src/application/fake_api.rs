// In-memory BookkeepingApi used by service and router tests
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::account::{Account, AccountNew, AccountUpdate};
use crate::domain::asset::{Asset, AssetNew};
use crate::domain::document::{Document, DocumentDueDate, DocumentNew};
use crate::domain::folder::{Folder, FolderNew, FolderNewDescription, FolderNewName};
use crate::domain::ledger::{LedgerItem, LedgerStat};
use crate::domain::project::{Project, ProjectAction, ProjectNew, ProjectUpdate};
use crate::domain::repository::{Repository, RepositoryNew, RepositoryShort, RepositoryUpdate};
use crate::domain::transaction::{Transaction, TransactionFilter, TransactionNew};
use crate::domain::user::{User, UserNew};
use crate::infrastructure::error::ApiError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeData {
    pub repositories: Vec<Repository>,
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub ledger: Vec<LedgerItem>,
    pub stats: HashMap<String, LedgerStat>,
    pub assets: Vec<Asset>,
    pub projects: Vec<Project>,
    pub folders: Vec<Folder>,
    pub documents: Vec<Document>,
    /// Every call that reached the fake, e.g. `create_account r1 1911`.
    pub calls: Vec<String>,
    pub last_filter: Option<TransactionFilter>,
    pub last_till: Option<NaiveDate>,
}

#[derive(Default)]
pub struct FakeApi {
    pub data: Mutex<FakeData>,
}

impl FakeApi {
    pub fn with(data: FakeData) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.data.lock().unwrap().calls.clone()
    }

    fn record(&self, call: String) {
        self.data.lock().unwrap().calls.push(call);
    }
}

fn not_found<T>() -> anyhow::Result<T> {
    Err(ApiError::NotFound.into())
}

fn found<T: Clone>(items: &[T], pred: impl Fn(&T) -> bool) -> anyhow::Result<T> {
    match items.iter().find(|item| pred(item)) {
        Some(item) => Ok(item.clone()),
        None => not_found(),
    }
}

pub fn repository(id: &str, name: &str) -> Repository {
    Repository {
        id: id.into(),
        name: name.into(),
        is_active: true,
        ..Default::default()
    }
}

#[async_trait]
impl BookkeepingApi for FakeApi {
    async fn list_repositories(&self) -> anyhow::Result<Vec<RepositoryShort>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .repositories
            .iter()
            .map(|r| RepositoryShort {
                id: r.id.clone(),
                name: r.name.clone(),
                description: r.description.clone(),
            })
            .collect())
    }

    async fn get_repository(&self, repository_id: &str) -> anyhow::Result<Repository> {
        found(&self.data.lock().unwrap().repositories, |r| r.id == repository_id)
    }

    async fn create_repository(&self, form: &RepositoryNew) -> anyhow::Result<Repository> {
        self.record(format!("create_repository {}", form.name));
        let mut data = self.data.lock().unwrap();
        let created = repository(&format!("r{}", data.repositories.len() + 1), &form.name);
        data.repositories.push(created.clone());
        Ok(created)
    }

    async fn update_repository(
        &self,
        repository_id: &str,
        form: &RepositoryUpdate,
    ) -> anyhow::Result<Repository> {
        self.record(format!("update_repository {} {}", repository_id, form.name));
        let mut data = self.data.lock().unwrap();
        match data.repositories.iter_mut().find(|r| r.id == repository_id) {
            Some(r) => {
                r.name = form.name.clone();
                r.description = form.description.clone();
                Ok(r.clone())
            }
            None => not_found(),
        }
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.data.lock().unwrap().users.clone())
    }

    async fn get_user(&self, user_id: &str) -> anyhow::Result<User> {
        found(&self.data.lock().unwrap().users, |u| u.id == user_id)
    }

    async fn create_user(&self, form: &UserNew) -> anyhow::Result<User> {
        self.record(format!("create_user {}", form.id));
        let user = User {
            id: form.id.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            is_active: true,
            ..Default::default()
        };
        self.data.lock().unwrap().users.push(user.clone());
        Ok(user)
    }

    async fn list_accounts(&self, _repository_id: &str) -> anyhow::Result<Vec<Account>> {
        Ok(self.data.lock().unwrap().accounts.clone())
    }

    async fn get_account(&self, _repository_id: &str, account_id: &str) -> anyhow::Result<Account> {
        found(&self.data.lock().unwrap().accounts, |a| a.id == account_id)
    }

    async fn create_account(&self, repository_id: &str, form: &AccountNew) -> anyhow::Result<Account> {
        self.record(format!("create_account {} {}", repository_id, form.id));
        let account = Account {
            id: form.id.clone(),
            name: form.name.clone(),
            description: form.description.clone(),
            is_working: form.is_working,
            is_inverse: form.is_inverse,
            is_active: true,
            ..Default::default()
        };
        self.data.lock().unwrap().accounts.push(account.clone());
        Ok(account)
    }

    async fn update_account(
        &self,
        repository_id: &str,
        account_id: &str,
        form: &AccountUpdate,
    ) -> anyhow::Result<Account> {
        self.record(format!("update_account {} {}", repository_id, account_id));
        let mut data = self.data.lock().unwrap();
        match data.accounts.iter_mut().find(|a| a.id == account_id) {
            Some(a) => {
                a.name = form.name.clone();
                a.description = form.description.clone();
                a.is_working = form.is_working;
                a.is_inverse = form.is_inverse;
                Ok(a.clone())
            }
            None => not_found(),
        }
    }

    async fn list_transactions(
        &self,
        _repository_id: &str,
        filter: &TransactionFilter,
    ) -> anyhow::Result<Vec<Transaction>> {
        let mut data = self.data.lock().unwrap();
        data.last_filter = Some(filter.clone());
        Ok(data.transactions.clone())
    }

    async fn create_transaction(
        &self,
        repository_id: &str,
        form: &TransactionNew,
    ) -> anyhow::Result<Transaction> {
        self.record(format!("create_transaction {} {}", repository_id, form.amount));
        let mut data = self.data.lock().unwrap();
        let transaction = Transaction {
            id: data.transactions.len() + 1,
            subject: form.subject.clone(),
            debit: form.debit.clone(),
            credit: form.credit.clone(),
            amount: form.amount,
            date_settlement: form.date_settlement,
            ..Default::default()
        };
        data.transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn get_ledger(&self, _repository_id: &str, till: NaiveDate) -> anyhow::Result<Vec<LedgerItem>> {
        let mut data = self.data.lock().unwrap();
        data.last_till = Some(till);
        Ok(data.ledger.clone())
    }

    async fn get_ledger_stat(&self, _repository_id: &str, account: &str) -> anyhow::Result<LedgerStat> {
        match self.data.lock().unwrap().stats.get(account) {
            Some(stat) => Ok(*stat),
            None => Err(anyhow::anyhow!("no statistics for account {}", account)),
        }
    }

    async fn list_assets(&self, _repository_id: &str) -> anyhow::Result<Vec<Asset>> {
        Ok(self.data.lock().unwrap().assets.clone())
    }

    async fn get_asset(&self, _repository_id: &str, asset_id: usize) -> anyhow::Result<Asset> {
        found(&self.data.lock().unwrap().assets, |a| a.id == asset_id)
    }

    async fn create_asset(&self, repository_id: &str, form: &AssetNew) -> anyhow::Result<Asset> {
        self.record(format!("create_asset {} {}", repository_id, form.name));
        let mut data = self.data.lock().unwrap();
        let asset = Asset {
            id: data.assets.len() + 1,
            name: form.name.clone(),
            value: form.value,
            residual_value: form.residual_value,
            date_activated: form.date_activated,
            is_active: true,
            ..Default::default()
        };
        data.assets.push(asset.clone());
        Ok(asset)
    }

    async fn list_projects(&self, _repository_id: &str) -> anyhow::Result<Vec<Project>> {
        Ok(self.data.lock().unwrap().projects.clone())
    }

    async fn get_project(&self, _repository_id: &str, project_id: &str) -> anyhow::Result<Project> {
        found(&self.data.lock().unwrap().projects, |p| p.id == project_id)
    }

    async fn create_project(&self, repository_id: &str, form: &ProjectNew) -> anyhow::Result<Project> {
        self.record(format!("create_project {} {}", repository_id, form.name));
        let mut data = self.data.lock().unwrap();
        let project = Project {
            id: format!("p{}", data.projects.len() + 1),
            name: form.name.clone(),
            description: form.description.clone(),
            is_enabled: true,
            is_active: true,
            ..Default::default()
        };
        data.projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        repository_id: &str,
        project_id: &str,
        form: &ProjectUpdate,
    ) -> anyhow::Result<Project> {
        self.record(format!("update_project {} {}", repository_id, project_id));
        let mut data = self.data.lock().unwrap();
        match data.projects.iter_mut().find(|p| p.id == project_id) {
            Some(p) => {
                p.name = form.name.clone();
                p.description = form.description.clone();
                p.is_enabled = form.is_enabled;
                Ok(p.clone())
            }
            None => not_found(),
        }
    }

    async fn project_action(
        &self,
        repository_id: &str,
        project_id: &str,
        action: ProjectAction,
    ) -> anyhow::Result<Project> {
        self.record(format!(
            "project_action {} {} {}",
            repository_id,
            project_id,
            action.as_str()
        ));
        let mut data = self.data.lock().unwrap();
        match data.projects.iter_mut().find(|p| p.id == project_id) {
            Some(p) => {
                match action {
                    ProjectAction::Enable => p.is_enabled = true,
                    ProjectAction::Disable => p.is_enabled = false,
                    ProjectAction::Remove => p.is_active = false,
                }
                Ok(p.clone())
            }
            None => not_found(),
        }
    }

    async fn list_folders(&self) -> anyhow::Result<Vec<Folder>> {
        Ok(self.data.lock().unwrap().folders.clone())
    }

    async fn get_folder(&self, folder_id: &str) -> anyhow::Result<Folder> {
        found(&self.data.lock().unwrap().folders, |f| f.id == folder_id)
    }

    async fn create_folder(&self, form: &FolderNew) -> anyhow::Result<Folder> {
        self.record(format!("create_folder {}", form.name));
        let mut data = self.data.lock().unwrap();
        let folder = Folder {
            id: format!("f{}", data.folders.len() + 1),
            name: form.name.clone(),
            description: form.description.clone(),
            is_active: true,
            ..Default::default()
        };
        data.folders.push(folder.clone());
        Ok(folder)
    }

    async fn rename_folder(&self, folder_id: &str, form: &FolderNewName) -> anyhow::Result<Folder> {
        self.record(format!("rename_folder {} {}", folder_id, form.name));
        let mut data = self.data.lock().unwrap();
        match data.folders.iter_mut().find(|f| f.id == folder_id) {
            Some(f) => {
                f.name = form.name.clone();
                Ok(f.clone())
            }
            None => not_found(),
        }
    }

    async fn redescribe_folder(
        &self,
        folder_id: &str,
        form: &FolderNewDescription,
    ) -> anyhow::Result<Folder> {
        self.record(format!("redescribe_folder {}", folder_id));
        let mut data = self.data.lock().unwrap();
        match data.folders.iter_mut().find(|f| f.id == folder_id) {
            Some(f) => {
                f.description = form.description.clone();
                Ok(f.clone())
            }
            None => not_found(),
        }
    }

    async fn set_folder_active(&self, folder_id: &str, active: bool) -> anyhow::Result<Folder> {
        self.record(format!("set_folder_active {} {}", folder_id, active));
        let mut data = self.data.lock().unwrap();
        match data.folders.iter_mut().find(|f| f.id == folder_id) {
            Some(f) => {
                f.is_active = active;
                Ok(f.clone())
            }
            None => not_found(),
        }
    }

    async fn list_documents(&self, folder_id: &str) -> anyhow::Result<Vec<Document>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .documents
            .iter()
            .filter(|d| d.folder_id == folder_id)
            .cloned()
            .collect())
    }

    async fn get_document(&self, document_id: &str) -> anyhow::Result<Document> {
        found(&self.data.lock().unwrap().documents, |d| d.id == document_id)
    }

    async fn create_document(&self, folder_id: &str, form: &DocumentNew) -> anyhow::Result<Document> {
        self.record(format!("create_document {} {}", folder_id, form.title));
        let mut data = self.data.lock().unwrap();
        let document = Document {
            id: format!("d{}", data.documents.len() + 1),
            folder_id: folder_id.into(),
            reference: form.reference.clone(),
            title: form.title.clone(),
            description: form.description.clone(),
            is_active: true,
            ..Default::default()
        };
        data.documents.push(document.clone());
        Ok(document)
    }

    async fn set_document_due_date(
        &self,
        document_id: &str,
        form: &DocumentDueDate,
    ) -> anyhow::Result<Document> {
        self.record(format!(
            "set_document_due_date {} {}",
            document_id,
            form.due_date.is_some()
        ));
        let mut data = self.data.lock().unwrap();
        match data.documents.iter_mut().find(|d| d.id == document_id) {
            Some(d) => {
                d.due_date = form.due_date;
                Ok(d.clone())
            }
            None => not_found(),
        }
    }

    async fn set_document_active(&self, document_id: &str, active: bool) -> anyhow::Result<Document> {
        self.record(format!("set_document_active {} {}", document_id, active));
        let mut data = self.data.lock().unwrap();
        match data.documents.iter_mut().find(|d| d.id == document_id) {
            Some(d) => {
                d.is_active = active;
                Ok(d.clone())
            }
            None => not_found(),
        }
    }
}
