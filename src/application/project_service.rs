// Project service - Use cases for cost projects
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::project::{Project, ProjectAction, ProjectNew, ProjectUpdate};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProjectService {
    api: Arc<dyn BookkeepingApi>,
}

impl ProjectService {
    pub fn new(api: Arc<dyn BookkeepingApi>) -> Self {
        Self { api }
    }

    /// Active projects only, enabled ones first.
    pub async fn list_projects(&self, repository_id: &str) -> anyhow::Result<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .api
            .list_projects(repository_id)
            .await?
            .into_iter()
            .filter(|p| p.is_active)
            .collect();
        projects.sort_by(|a, b| b.is_enabled.cmp(&a.is_enabled).then(a.name.cmp(&b.name)));
        Ok(projects)
    }

    pub async fn get_project(&self, repository_id: &str, project_id: &str) -> anyhow::Result<Project> {
        self.api.get_project(repository_id, project_id).await
    }

    pub async fn create_project(
        &self,
        repository_id: &str,
        form: &ProjectNew,
    ) -> anyhow::Result<Project> {
        self.api.create_project(repository_id, form).await
    }

    pub async fn update_project(
        &self,
        repository_id: &str,
        project_id: &str,
        form: &ProjectUpdate,
    ) -> anyhow::Result<Project> {
        self.api.update_project(repository_id, project_id, form).await
    }

    pub async fn apply_action(
        &self,
        repository_id: &str,
        project_id: &str,
        action: ProjectAction,
    ) -> anyhow::Result<Project> {
        tracing::info!(
            "Project {} in repository {}: {}",
            project_id,
            repository_id,
            action.as_str()
        );
        self.api.project_action(repository_id, project_id, action).await
    }
}
