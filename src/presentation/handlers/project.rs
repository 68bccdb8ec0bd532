use super::{rejected, see_other, seg, PageResult};
use crate::domain::project::ProjectAction;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ConsoleError;
use crate::presentation::forms::{FormErrors, ProjectForm};
use crate::presentation::views::project as view;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;
use std::sync::Arc;

pub async fn list_projects(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let projects = state.project_service.list_projects(&repository_id).await?;
    Ok(view::project_list(&repository_id, &projects).into_response())
}

pub async fn new_project_form(Path(repository_id): Path<String>) -> PageResult {
    Ok(view::project_new(&repository_id, &ProjectForm::default(), &FormErrors::default()).into_response())
}

pub async fn create_project(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProjectForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => return Ok(rejected(view::project_new(&repository_id, &form, &errors))),
    };
    let project = state
        .project_service
        .create_project(&repository_id, &model)
        .await?;
    see_other(format!("/repository/{}/project/{}", seg(&repository_id), seg(&project.id)))
}

pub async fn show_project(
    Path((repository_id, project_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let project = state
        .project_service
        .get_project(&repository_id, &project_id)
        .await?;
    let form = ProjectForm::from(&project);
    Ok(view::project_detail(&repository_id, &project, &form, &FormErrors::default()).into_response())
}

pub async fn update_project(
    Path((repository_id, project_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProjectForm>,
) -> PageResult {
    let model = match form.to_update() {
        Ok(model) => model,
        Err(errors) => {
            let project = state
                .project_service
                .get_project(&repository_id, &project_id)
                .await?;
            return Ok(rejected(view::project_detail(&repository_id, &project, &form, &errors)));
        }
    };
    state
        .project_service
        .update_project(&repository_id, &project_id, &model)
        .await?;
    see_other(format!("/repository/{}/project/{}", seg(&repository_id), seg(&project_id)))
}

pub async fn project_action(
    Path((repository_id, project_id, action)): Path<(String, String, String)>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let action = ProjectAction::from_name(&action).ok_or(ConsoleError::NotFound)?;
    state
        .project_service
        .apply_action(&repository_id, &project_id, action)
        .await?;
    let location = match action {
        ProjectAction::Remove => format!("/repository/{}/project", seg(&repository_id)),
        _ => format!("/repository/{}/project/{}", seg(&repository_id), seg(&project_id)),
    };
    see_other(location)
}
