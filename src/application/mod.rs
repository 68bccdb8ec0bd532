// Application layer - Use cases over the bookkeeping API
pub mod account_service;
pub mod asset_service;
pub mod bookkeeping_api;
pub mod dashboard_service;
pub mod document_service;
pub mod project_service;
pub mod repository_service;
pub mod transaction_service;
pub mod user_service;

#[cfg(test)]
pub mod fake_api;
