//! Validation utilities for type mapping
//!
//! This module checks SQL identifiers before they are spliced into
//! generated DDL.

use crate::errors::TypeMappingError;

/// Longest identifier accepted, the PostgreSQL limit
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate an identifier and wrap it in double quotes
///
/// Double-quoted identifiers are accepted by all supported dialects
/// (SQL Server with `QUOTED_IDENTIFIER ON`, its default).
pub fn quote_identifier(name: &str) -> Result<String, TypeMappingError> {
    validate_identifier(name)?;
    Ok(format!("\"{}\"", name))
}

pub fn validate_identifier(name: &str) -> Result<(), TypeMappingError> {
    let invalid = |reason| TypeMappingError::InvalidIdentifier {
        name: name.to_string(),
        reason,
    };

    let Some(first_char) = name.chars().next() else {
        return Err(invalid("identifier cannot be empty"));
    };
    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(invalid("identifier is longer than 63 characters"));
    }
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(invalid("identifier must start with a letter or underscore"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("identifier contains invalid characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers_are_quoted() {
        assert_eq!(quote_identifier("nodes").unwrap(), "\"nodes\"");
        assert_eq!(quote_identifier("_Source_2").unwrap(), "\"_Source_2\"");
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in ["", "2fast", "users; DROP TABLE users", "name\"", "a-b"] {
            let err = quote_identifier(name).unwrap_err();
            assert!(
                matches!(err, TypeMappingError::InvalidIdentifier { .. }),
                "{name:?} should be rejected"
            );
        }
        assert!(validate_identifier(&"x".repeat(64)).is_err());
        assert!(validate_identifier(&"x".repeat(63)).is_ok());
    }
}
