pub mod commands;
pub mod config;
pub mod document;
pub mod observability;
pub mod store;
