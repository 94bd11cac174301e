//! Convenience re-exports for common typehaus usage
//!
//! # Example
//!
//! ```rust
//! use typehaus::prelude::*;
//!
//! let typehaus = TypeHaus::offline(Dialect::Sqlite);
//! assert_eq!(typehaus.render_type(&ColumnType::PortableUuid).unwrap(), "CHAR(36)");
//! ```

// Core typehaus components
pub use crate::core::{Connection, TypeHaus};
pub use crate::errors::TypeHausError;
pub use crate::migration::{ColumnSchema, TableSchema};
pub use crate::reflection::{CatalogSource, ReflectedColumn};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Portable types
pub use type_mapping::{ColumnType, Dialect, PortableUuid, TypeMappingError, UuidInput};

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
pub use uuid::Uuid;

// Commonly used sqlx types
pub use sqlx::{PgPool, Row, SqlitePool};
