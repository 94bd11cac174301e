//! Column type definitions
//!
//! This module provides the abstract column types the mapping layer
//! declares, renders and reflects across dialects.

use serde::{Deserialize, Serialize};

/// Length used when a fixed-length textual UUID column has no explicit size
pub const UUID_PLACEHOLDER_LENGTH: u32 = 64;

/// Abstract column type understood by the mapping layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Numeric {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Boolean,
    Text,
    /// Variable-length string, `None` means unbounded
    String { length: Option<u32> },
    /// Fixed-length string
    Char { length: Option<u32> },
    Blob,
    Date,
    Timestamp,
    Json,
    /// Native UUID column (PostgreSQL)
    Uuid,
    /// SQL Server `UNIQUEIDENTIFIER`
    UniqueIdentifier {
        length: Option<u32>,
        collation: Option<String>,
    },
    /// Portable identifier column, see [`crate::PortableUuid`]
    PortableUuid,
    /// Type the reflecting dialect could not resolve
    Null,
}

impl ColumnType {
    pub fn string(length: u32) -> Self {
        ColumnType::String {
            length: Some(length),
        }
    }

    pub fn char(length: u32) -> Self {
        ColumnType::Char {
            length: Some(length),
        }
    }

    /// Declared length, for the types that carry one
    pub fn length(&self) -> Option<u32> {
        match self {
            ColumnType::String { length }
            | ColumnType::Char { length }
            | ColumnType::UniqueIdentifier { length, .. } => *length,
            _ => None,
        }
    }

    /// Apply parenthesized type arguments such as `VARCHAR(20)` or `NUMERIC(10, 2)`
    pub(crate) fn with_args(self, args: &[u32]) -> Self {
        match (self, args) {
            (ColumnType::String { .. }, [length, ..]) => ColumnType::string(*length),
            (ColumnType::Char { .. }, [length, ..]) => ColumnType::char(*length),
            (ColumnType::Numeric { .. }, [precision]) => ColumnType::Numeric {
                precision: Some(*precision),
                scale: None,
            },
            (ColumnType::Numeric { .. }, [precision, scale, ..]) => ColumnType::Numeric {
                precision: Some(*precision),
                scale: Some(*scale),
            },
            (ColumnType::UniqueIdentifier { collation, .. }, [length, ..]) => {
                ColumnType::UniqueIdentifier {
                    length: Some(*length),
                    collation,
                }
            }
            (column_type, _) => column_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_only_for_sized_types() {
        assert_eq!(ColumnType::string(20).length(), Some(20));
        assert_eq!(ColumnType::char(36).length(), Some(36));
        assert_eq!(
            ColumnType::UniqueIdentifier {
                length: Some(40),
                collation: None
            }
            .length(),
            Some(40)
        );
        assert_eq!(ColumnType::Integer.length(), None);
        assert_eq!(ColumnType::PortableUuid.length(), None);
    }

    #[test]
    fn test_with_args() {
        assert_eq!(
            ColumnType::String { length: None }.with_args(&[255]),
            ColumnType::string(255)
        );
        assert_eq!(
            ColumnType::Numeric {
                precision: None,
                scale: None
            }
            .with_args(&[10, 2]),
            ColumnType::Numeric {
                precision: Some(10),
                scale: Some(2)
            }
        );
        // Types without size arguments ignore them
        assert_eq!(ColumnType::Integer.with_args(&[11]), ColumnType::Integer);
        assert_eq!(ColumnType::char(1).with_args(&[]), ColumnType::char(1));
    }
}
