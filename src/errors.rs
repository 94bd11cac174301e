//! Error types for the typehaus crate
//!
//! This module contains all error types that can be returned by typehaus operations.

use thiserror::Error;
use type_mapping::{Dialect, TypeMappingError};

#[derive(Error, Debug)]
pub enum TypeHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Type mapping error: {0}")]
    TypeMapping(#[from] TypeMappingError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No database driver available for dialect {0}")]
    NoDriver(Dialect),

    #[error("Not connected to a database")]
    NotConnected,

    #[error("Table not found: {0}")]
    TableNotFound(String),
}
