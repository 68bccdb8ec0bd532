// HTTP error mapping for console pages
use crate::infrastructure::error::ApiError;
use crate::presentation::views::layout::{notification, page};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::html;

#[derive(Debug)]
pub enum ConsoleError {
    /// A call to the bookkeeping API failed.
    Api(anyhow::Error),
    /// The console itself has no such page or resource.
    NotFound,
    BadRequest(String),
}

impl From<anyhow::Error> for ConsoleError {
    fn from(err: anyhow::Error) -> Self {
        ConsoleError::Api(err)
    }
}

impl ConsoleError {
    fn status(&self) -> StatusCode {
        match self {
            ConsoleError::Api(e) if ApiError::is_not_found(e) => StatusCode::NOT_FOUND,
            ConsoleError::Api(_) => StatusCode::BAD_GATEWAY,
            ConsoleError::NotFound => StatusCode::NOT_FOUND,
            ConsoleError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            ConsoleError::Api(e) if ApiError::is_not_found(e) => {
                "The requested item does not exist.".to_string()
            }
            ConsoleError::Api(e) => format!("The bookkeeping service failed: {:#}", e),
            ConsoleError::NotFound => "The requested page does not exist.".to_string(),
            ConsoleError::BadRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::debug!("{}: {}", status, message);
        }

        let title = status.canonical_reason().unwrap_or("Error");
        let body = page(
            title,
            html! {
                section.section {
                    .container.content {
                        h2.title { (status.as_u16()) " " (title) }
                        (notification("danger", &message))
                        a.button href="/" { "Back to the start page" }
                    }
                }
            },
        );

        (status, body).into_response()
    }
}

pub async fn not_found() -> ConsoleError {
    ConsoleError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_not_found_is_404() {
        let err = ConsoleError::from(anyhow::Error::new(ApiError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_failure_is_bad_gateway() {
        let err = ConsoleError::from(anyhow::anyhow!("connection reset"));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.message().contains("connection reset"));
    }

    #[test]
    fn test_bad_request_keeps_message() {
        let err = ConsoleError::BadRequest("invalid date".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "invalid date");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
