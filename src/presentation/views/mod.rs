// Server-rendered HTML views
pub mod account;
pub mod asset;
pub mod dashboard;
pub mod folder;
pub mod layout;
pub mod project;
pub mod repository;
pub mod transaction;
pub mod user;
