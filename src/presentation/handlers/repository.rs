use super::{rejected, see_other, seg, today, PageResult};
use crate::presentation::app_state::AppState;
use crate::presentation::forms::{FormErrors, RepositoryForm};
use crate::presentation::views::{dashboard, repository as view};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;
use std::sync::Arc;

pub async fn list_repositories(State(state): State<Arc<AppState>>) -> PageResult {
    let repositories = state.repository_service.list_repositories().await?;
    Ok(view::repository_list(&repositories).into_response())
}

pub async fn new_repository_form() -> PageResult {
    Ok(view::repository_new(&RepositoryForm::default(), &FormErrors::default()).into_response())
}

pub async fn create_repository(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RepositoryForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => return Ok(rejected(view::repository_new(&form, &errors))),
    };
    let repository = state.repository_service.create_repository(&model).await?;
    see_other(format!("/repository/{}", seg(&repository.id)))
}

/// Repository landing page: the dashboard.
pub async fn show_dashboard(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let dashboard = state
        .dashboard_service
        .get_dashboard(&repository_id, today())
        .await?;
    Ok(dashboard::dashboard(&dashboard).into_response())
}

pub async fn edit_repository_form(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let repository = state.repository_service.get_repository(&repository_id).await?;
    let form = RepositoryForm::from(&repository);
    Ok(view::repository_edit(&repository, &form, &FormErrors::default()).into_response())
}

pub async fn update_repository(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<RepositoryForm>,
) -> PageResult {
    let model = match form.to_update() {
        Ok(model) => model,
        Err(errors) => {
            let repository = state.repository_service.get_repository(&repository_id).await?;
            return Ok(rejected(view::repository_edit(&repository, &form, &errors)));
        }
    };
    state
        .repository_service
        .update_repository(&repository_id, &model)
        .await?;
    see_other(format!("/repository/{}", seg(&repository_id)))
}
