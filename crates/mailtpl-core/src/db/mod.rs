//! Database layer for mailtpl

mod auth_config_repository;
mod connection;
mod migrations;

pub use auth_config_repository::{
    validate_config_key, AuthConfigRepository, LibSqlAuthConfigRepository, StoredConfigEntry,
};
pub use connection::Database;
