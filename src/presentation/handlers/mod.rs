// HTTP request handlers
pub mod account;
pub mod asset;
pub mod folder;
pub mod project;
pub mod repository;
pub mod transaction;
pub mod user;

use crate::presentation::error::ConsoleError;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{Local, NaiveDate};
use maud::Markup;
use std::borrow::Cow;

pub type PageResult = Result<Response, ConsoleError>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn index() -> Redirect {
    Redirect::to("/repository")
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn rejected(body: Markup) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
}

/// Encode a path parameter for use inside a console URL.
pub(crate) fn seg(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// 303 to `location`; a target that is not a valid header value is rejected.
pub(crate) fn see_other(location: String) -> PageResult {
    let value = HeaderValue::try_from(location)
        .map_err(|_| ConsoleError::BadRequest("Invalid redirect target".to_string()))?;
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, value)]).into_response())
}
