//! Supported database dialects
//!
//! This module defines the closed set of backends the portable types
//! know how to encode for, render DDL for, and reflect from.

use crate::errors::TypeMappingError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Database backend targeted by the mapping layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL-compatible backend with a native UUID type
    #[serde(rename = "postgresql")]
    Postgres,
    /// Embedded SQLite database
    Sqlite,
    /// Microsoft SQL Server
    Mssql,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Postgres, Dialect::Sqlite, Dialect::Mssql];

    /// Canonical dialect name
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgresql",
            Dialect::Sqlite => "sqlite",
            Dialect::Mssql => "mssql",
        }
    }

    /// Whether the backend stores UUIDs in a native column type
    pub fn has_native_uuid(&self) -> bool {
        match self {
            Dialect::Postgres => true,
            Dialect::Sqlite | Dialect::Mssql => false,
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = TypeMappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "mssql" | "sqlserver" => Ok(Dialect::Mssql),
            _ => Err(TypeMappingError::UnsupportedDialect(s.to_string())),
        }
    }
}
