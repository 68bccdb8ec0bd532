use super::{rejected, see_other, seg, today, PageResult};
use crate::domain::asset::AssetNew;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ConsoleError;
use crate::presentation::forms::{AssetForm, FormErrors};
use crate::presentation::views::asset as view;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;
use std::sync::Arc;

pub async fn list_assets(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    let overview = state.asset_service.overview(&repository_id, today()).await?;
    Ok(view::asset_list(&repository_id, &overview).into_response())
}

pub async fn new_asset_form(Path(repository_id): Path<String>) -> PageResult {
    let form = AssetForm::from(AssetNew::default());
    Ok(view::asset_new(&repository_id, &form, &FormErrors::default()).into_response())
}

pub async fn create_asset(
    Path(repository_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<AssetForm>,
) -> PageResult {
    let model = match form.to_new() {
        Ok(model) => model,
        Err(errors) => return Ok(rejected(view::asset_new(&repository_id, &form, &errors))),
    };
    let asset = state.asset_service.create_asset(&repository_id, &model).await?;
    see_other(format!("/repository/{}/asset/{}", seg(&repository_id), asset.id))
}

pub async fn show_asset(
    Path((repository_id, asset_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> PageResult {
    // Asset ids are numeric; anything else cannot exist.
    let asset_id: usize = asset_id.parse().map_err(|_| ConsoleError::NotFound)?;
    let asset = state.asset_service.get_asset(&repository_id, asset_id).await?;
    Ok(view::asset_detail(&repository_id, &asset).into_response())
}
