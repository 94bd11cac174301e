//! # typehaus
//!
//! Portable column types for schemas shared between PostgreSQL, SQLite and
//! SQL Server. A `PortableUuid` column uses the native `UUID` type on
//! PostgreSQL and an uppercase `CHAR(36)` everywhere else; SQLite columns
//! declared `UNIQUEIDENTIFIER` reflect as `PortableUuid`, and SQL Server
//! `xml` columns reflect as plain strings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use typehaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "sqlite".to_string(), "sqlite::memory:".to_string(),
//!         1, 1, 30, 600, 0,
//!     );
//!
//!     let typehaus = TypeHaus::new(config).await?;
//!
//!     let nodes = TableSchema::new("nodes")
//!         .column(ColumnSchema::new("id", ColumnType::PortableUuid).primary_key())
//!         .column(ColumnSchema::new("name", ColumnType::string(256)).not_null());
//!     typehaus.auto_migrate(&nodes, true).await?;
//!
//!     let pool = typehaus.sqlite_pool().expect("connected to sqlite");
//!     sqlx::query("INSERT INTO nodes (id, name) VALUES (?, ?)")
//!         .bind(PortableUuid::new_v4())
//!         .bind("Interview 1")
//!         .execute(pool)
//!         .await?;
//!
//!     for column in typehaus.reflect_table("nodes").await? {
//!         println!("{} -> {:?}", column.name, column.column_type);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;
pub mod reflection;

// Re-export the main public types for convenience
pub use crate::core::{Connection, TypeHaus};
pub use crate::errors::TypeHausError;
pub use migration::{ColumnSchema, TableSchema};
pub use reflection::{CatalogSource, RawColumn, ReflectedColumn, reflect_columns};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export internal crates used in the public API
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
pub use uuid;
