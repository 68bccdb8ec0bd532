// Domain layer - Records mirroring the bookkeeping API and pure view arithmetic
pub mod account;
pub mod asset;
pub mod chart;
pub mod dashboard;
pub mod document;
pub mod folder;
pub mod ledger;
pub mod project;
pub mod repository;
pub mod transaction;
pub mod user;
