//! Shared services wrapping the database for the store and front ends.

mod config_backend;

pub use config_backend::LibSqlConfigBackend;
