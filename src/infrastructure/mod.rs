// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod error;
pub mod http_api;
