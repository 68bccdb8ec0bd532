use super::{rejected, see_other, seg, PageResult};
use crate::presentation::app_state::AppState;
use crate::presentation::forms::{DocumentForm, DueDateForm, FolderForm, FormErrors};
use crate::presentation::views::folder as view;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;
use std::sync::Arc;

pub async fn list_folders(State(state): State<Arc<AppState>>) -> PageResult {
    let folders = state.document_service.list_folders().await?;
    Ok(view::folder_list(&folders).into_response())
}

pub async fn new_folder_form() -> PageResult {
    Ok(view::folder_new(&FolderForm::default(), &FormErrors::default()).into_response())
}

pub async fn create_folder(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FolderForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => return Ok(rejected(view::folder_new(&form, &errors))),
    };
    let folder = state.document_service.create_folder(&model).await?;
    see_other(format!("/folder/{}", seg(&folder.id)))
}

pub async fn show_folder(
    Path(folder_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let (folder, documents) = state.document_service.folder_with_documents(&folder_id).await?;
    Ok(view::folder_detail(&folder, &documents, &FormErrors::default()).into_response())
}

pub async fn rename_folder(
    Path(folder_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<FolderForm>,
) -> PageResult {
    let model = match form.to_new_name() {
        Ok(model) => model,
        Err(errors) => {
            let (folder, documents) = state.document_service.folder_with_documents(&folder_id).await?;
            return Ok(rejected(view::folder_detail(&folder, &documents, &errors)));
        }
    };
    state.document_service.rename_folder(&folder_id, &model).await?;
    see_other(format!("/folder/{}", seg(&folder_id)))
}

pub async fn redescribe_folder(
    Path(folder_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<FolderForm>,
) -> PageResult {
    state
        .document_service
        .redescribe_folder(&folder_id, &form.to_new_description())
        .await?;
    see_other(format!("/folder/{}", seg(&folder_id)))
}

pub async fn remove_folder(
    Path(folder_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    state.document_service.set_folder_active(&folder_id, false).await?;
    see_other(format!("/folder/{}", seg(&folder_id)))
}

pub async fn restore_folder(
    Path(folder_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    state.document_service.set_folder_active(&folder_id, true).await?;
    see_other(format!("/folder/{}", seg(&folder_id)))
}

pub async fn new_document_form(
    Path(folder_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let (folder, _) = state.document_service.folder_with_documents(&folder_id).await?;
    Ok(view::document_new(&folder, &DocumentForm::default(), &FormErrors::default()).into_response())
}

pub async fn create_document(
    Path(folder_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<DocumentForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => {
            let (folder, _) = state.document_service.folder_with_documents(&folder_id).await?;
            return Ok(rejected(view::document_new(&folder, &form, &errors)));
        }
    };
    let document = state
        .document_service
        .create_document(&folder_id, &model)
        .await?;
    see_other(format!("/document/{}", seg(&document.id)))
}

pub async fn show_document(
    Path(document_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let document = state.document_service.get_document(&document_id).await?;
    Ok(view::document_detail(&document, &FormErrors::default()).into_response())
}

pub async fn set_document_due_date(
    Path(document_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<DueDateForm>,
) -> PageResult {
    let model = match form.to_due_date() {
        Ok(model) => model,
        Err(errors) => {
            let document = state.document_service.get_document(&document_id).await?;
            return Ok(rejected(view::document_detail(&document, &errors)));
        }
    };
    state
        .document_service
        .set_due_date(&document_id, &model)
        .await?;
    see_other(format!("/document/{}", seg(&document_id)))
}

pub async fn remove_document(
    Path(document_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    state
        .document_service
        .set_document_active(&document_id, false)
        .await?;
    see_other(format!("/document/{}", seg(&document_id)))
}

pub async fn restore_document(
    Path(document_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    state
        .document_service
        .set_document_active(&document_id, true)
        .await?;
    see_other(format!("/document/{}", seg(&document_id)))
}
