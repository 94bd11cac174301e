//! Error types for type mapping
//!
//! This module defines the errors raised while encoding, decoding
//! and resolving portable column types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeMappingError {
    #[error("Malformed identifier '{value}': {source}")]
    MalformedIdentifier {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("Invalid SQL identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: &'static str },

    #[error("Column type {column_type} cannot be rendered for {dialect}")]
    UnrenderableType {
        column_type: String,
        dialect: &'static str,
    },
}
