use super::{rejected, see_other, seg, PageResult};
use crate::presentation::app_state::AppState;
use crate::presentation::forms::{FormErrors, UserForm};
use crate::presentation::views::user as view;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;
use std::sync::Arc;

pub async fn list_users(State(state): State<Arc<AppState>>) -> PageResult {
    let users = state.user_service.list_users().await?;
    Ok(view::user_list(&users).into_response())
}

pub async fn new_user_form() -> PageResult {
    Ok(view::user_new(&UserForm::default(), &FormErrors::default()).into_response())
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UserForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => return Ok(rejected(view::user_new(&form, &errors))),
    };
    let user = state.user_service.create_user(&model).await?;
    see_other(format!("/user/{}", seg(&user.id)))
}

pub async fn show_user(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let user = state.user_service.get_user(&user_id).await?;
    Ok(view::user_detail(&user).into_response())
}
