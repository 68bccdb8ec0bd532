// Presentation layer - HTML pages over HTTP
pub mod app_state;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod router;
pub mod views;
