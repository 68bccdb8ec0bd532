// Repository service - Use cases for tenant ledgers
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::repository::{Repository, RepositoryNew, RepositoryShort, RepositoryUpdate};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct RepositoryService {
    api: Arc<dyn BookkeepingApi>,
}

impl RepositoryService {
    pub fn new(api: Arc<dyn BookkeepingApi>) -> Self {
        Self { api }
    }

    pub async fn list_repositories(&self) -> anyhow::Result<Vec<RepositoryShort>> {
        let mut repositories = self.api.list_repositories().await?;
        repositories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(repositories)
    }

    pub async fn get_repository(&self, repository_id: &str) -> anyhow::Result<Repository> {
        self.api
            .get_repository(repository_id)
            .await
            .with_context(|| format!("loading repository {}", repository_id))
    }

    pub async fn create_repository(&self, form: &RepositoryNew) -> anyhow::Result<Repository> {
        let repository = self.api.create_repository(form).await?;
        tracing::info!("Created repository {}", repository.id);
        Ok(repository)
    }

    pub async fn update_repository(
        &self,
        repository_id: &str,
        form: &RepositoryUpdate,
    ) -> anyhow::Result<Repository> {
        self.api.update_repository(repository_id, form).await
    }
}
