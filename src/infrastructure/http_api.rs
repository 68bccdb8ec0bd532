// HTTP implementation of the bookkeeping API
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
use crate::infrastructure::config::ApiSettings;
use crate::infrastructure::error::ApiError;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{header, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpBookkeepingApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBookkeepingApi {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token().map(str::to_string),
        })
    }

    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, method: Method, url: String, builder: RequestBuilder) -> Result<T> {
        tracing::debug!("{} {}", method, url);

        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::warn!("{} {} returned 404", method, url);
            return Err(ApiError::NotFound.into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("{} {} returned {}: {}", method, url, status, body);
            return Err(ApiError::Status { status, body }.into());
        }

        let data = response.json::<T>().await.map_err(ApiError::Decode)?;
        Ok(data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.build_url(path, query);
        let builder = self.request(Method::GET, &url);
        self.execute(Method::GET, url, builder).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path, &[]);
        let mut builder = self.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(method, url, builder).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send::<(), T>(Method::POST, path, None).await
    }
}

// Path parameters arrive decoded from the console URL.
fn seg(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

fn active_path(active: bool) -> &'static str {
    if active { "restore" } else { "remove" }
}

#[async_trait]
impl BookkeepingApi for HttpBookkeepingApi {
    async fn list_repositories(&self) -> Result<Vec<RepositoryShort>> {
        self.get("/repository/all", &[]).await
    }

    async fn get_repository(&self, repository_id: &str) -> Result<Repository> {
        self.get(&format!("/repository/{}", seg(repository_id)), &[]).await
    }

    async fn create_repository(&self, form: &RepositoryNew) -> Result<Repository> {
        self.put("/repository/new", form).await
    }

    async fn update_repository(&self, repository_id: &str, form: &RepositoryUpdate) -> Result<Repository> {
        self.post(&format!("/repository/{}", seg(repository_id)), form).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.get("/user/all", &[]).await
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.get(&format!("/user/{}", seg(user_id)), &[]).await
    }

    async fn create_user(&self, form: &UserNew) -> Result<User> {
        self.put("/user/new", form).await
    }

    async fn list_accounts(&self, repository_id: &str) -> Result<Vec<Account>> {
        self.get(&format!("/repository/{}/account/all", seg(repository_id)), &[])
            .await
    }

    async fn get_account(&self, repository_id: &str, account_id: &str) -> Result<Account> {
        self.get(
            &format!("/repository/{}/account/{}", seg(repository_id), seg(account_id)),
            &[],
        )
        .await
    }

    async fn create_account(&self, repository_id: &str, form: &AccountNew) -> Result<Account> {
        self.put(&format!("/repository/{}/account/new", seg(repository_id)), form)
            .await
    }

    async fn update_account(
        &self,
        repository_id: &str,
        account_id: &str,
        form: &AccountUpdate,
    ) -> Result<Account> {
        self.post(
            &format!("/repository/{}/account/{}", seg(repository_id), seg(account_id)),
            form,
        )
        .await
    }

    async fn list_transactions(
        &self,
        repository_id: &str,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>> {
        self.get(
            &format!("/repository/{}/transaction/all", seg(repository_id)),
            &filter.pairs(),
        )
        .await
    }

    async fn create_transaction(&self, repository_id: &str, form: &TransactionNew) -> Result<Transaction> {
        self.put(&format!("/repository/{}/transaction/new", seg(repository_id)), form)
            .await
    }

    async fn get_ledger(&self, repository_id: &str, till: NaiveDate) -> Result<Vec<LedgerItem>> {
        let till = till.format("%Y-%m-%d").to_string();
        self.get(
            &format!("/repository/{}/ledger", seg(repository_id)),
            &[("till", till.as_str())],
        )
        .await
    }

    async fn get_ledger_stat(&self, repository_id: &str, account: &str) -> Result<LedgerStat> {
        self.get(
            &format!("/repository/{}/ledger/stat", seg(repository_id)),
            &[("account", account)],
        )
        .await
    }

    async fn list_assets(&self, repository_id: &str) -> Result<Vec<Asset>> {
        self.get(&format!("/repository/{}/asset/all", seg(repository_id)), &[])
            .await
    }

    async fn get_asset(&self, repository_id: &str, asset_id: usize) -> Result<Asset> {
        self.get(
            &format!("/repository/{}/asset/{}", seg(repository_id), asset_id),
            &[],
        )
        .await
    }

    async fn create_asset(&self, repository_id: &str, form: &AssetNew) -> Result<Asset> {
        self.put(&format!("/repository/{}/asset/new", seg(repository_id)), form)
            .await
    }

    async fn list_projects(&self, repository_id: &str) -> Result<Vec<Project>> {
        self.get(&format!("/repository/{}/project/all", seg(repository_id)), &[])
            .await
    }

    async fn get_project(&self, repository_id: &str, project_id: &str) -> Result<Project> {
        self.get(
            &format!("/repository/{}/project/{}", seg(repository_id), seg(project_id)),
            &[],
        )
        .await
    }

    async fn create_project(&self, repository_id: &str, form: &ProjectNew) -> Result<Project> {
        self.put(&format!("/repository/{}/project/new", seg(repository_id)), form)
            .await
    }

    async fn update_project(
        &self,
        repository_id: &str,
        project_id: &str,
        form: &ProjectUpdate,
    ) -> Result<Project> {
        self.post(
            &format!("/repository/{}/project/{}", seg(repository_id), seg(project_id)),
            form,
        )
        .await
    }

    async fn project_action(
        &self,
        repository_id: &str,
        project_id: &str,
        action: ProjectAction,
    ) -> Result<Project> {
        self.post_empty(&format!(
            "/repository/{}/project/{}/{}",
            seg(repository_id),
            seg(project_id),
            action.as_str()
        ))
        .await
    }

    async fn list_folders(&self) -> Result<Vec<Folder>> {
        self.get("/folder/all", &[]).await
    }

    async fn get_folder(&self, folder_id: &str) -> Result<Folder> {
        self.get(&format!("/folder/{}", seg(folder_id)), &[]).await
    }

    async fn create_folder(&self, form: &FolderNew) -> Result<Folder> {
        self.put("/folder/new", form).await
    }

    async fn rename_folder(&self, folder_id: &str, form: &FolderNewName) -> Result<Folder> {
        self.post(&format!("/folder/{}/rename", seg(folder_id)), form).await
    }

    async fn redescribe_folder(&self, folder_id: &str, form: &FolderNewDescription) -> Result<Folder> {
        self.post(&format!("/folder/{}/redescription", seg(folder_id)), form)
            .await
    }

    async fn set_folder_active(&self, folder_id: &str, active: bool) -> Result<Folder> {
        self.post_empty(&format!("/folder/{}/{}", seg(folder_id), active_path(active)))
            .await
    }

    async fn list_documents(&self, folder_id: &str) -> Result<Vec<Document>> {
        self.get(&format!("/document/{}/all", seg(folder_id)), &[]).await
    }

    async fn get_document(&self, document_id: &str) -> Result<Document> {
        self.get(&format!("/document/{}", seg(document_id)), &[]).await
    }

    async fn create_document(&self, folder_id: &str, form: &DocumentNew) -> Result<Document> {
        self.put(&format!("/document/{}/new", seg(folder_id)), form).await
    }

    async fn set_document_due_date(&self, document_id: &str, form: &DocumentDueDate) -> Result<Document> {
        self.post(&format!("/document/{}/due_date", seg(document_id)), form)
            .await
    }

    async fn set_document_active(&self, document_id: &str, active: bool) -> Result<Document> {
        self.post_empty(&format!("/document/{}/{}", seg(document_id), active_path(active)))
            .await
    }
}
