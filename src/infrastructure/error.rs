// Errors raised while talking to the bookkeeping API
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("API unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected API response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Find an `ApiError` anywhere in an `anyhow` context chain.
    pub fn find(err: &anyhow::Error) -> Option<&ApiError> {
        err.chain().find_map(|cause| cause.downcast_ref::<ApiError>())
    }

    pub fn is_not_found(err: &anyhow::Error) -> bool {
        matches!(Self::find(err), Some(ApiError::NotFound))
    }
}
