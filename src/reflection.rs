//! Schema reflection
//!
//! Reads column metadata from a live database catalog and resolves each
//! raw type name through the installed type registry.

use async_trait::async_trait;
use sqlx::{PgPool, Row, SqlitePool};

use crate::core::{Connection, TypeHaus};
use crate::errors::TypeHausError;
use type_mapping::{ColumnType, Dialect, TypeRegistry, quote_identifier, validate_identifier};

/// Column as reported by the database catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    pub name: String,
    pub raw_type: String,
    pub nullable: bool,
}

/// Column with its resolved portable type
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedColumn {
    pub name: String,
    pub raw_type: String,
    pub column_type: ColumnType,
    pub nullable: bool,
}

/// Source of raw catalog column metadata
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Columns of a table in declaration order, empty when the table is absent
    async fn raw_columns(&self, table: &str) -> Result<Vec<RawColumn>, TypeHausError>;
}

#[async_trait]
impl CatalogSource for SqlitePool {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn raw_columns(&self, table: &str) -> Result<Vec<RawColumn>, TypeHausError> {
        let sql = format!("PRAGMA table_info({})", quote_identifier(table)?);
        let rows = sqlx::query(&sql).fetch_all(self).await?;

        rows.iter()
            .map(|row| -> Result<RawColumn, TypeHausError> {
                Ok(RawColumn {
                    name: row.try_get("name")?,
                    raw_type: row.try_get("type")?,
                    nullable: row.try_get::<i64, _>("notnull")? == 0,
                })
            })
            .collect()
    }
}

#[async_trait]
impl CatalogSource for PgPool {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn raw_columns(&self, table: &str) -> Result<Vec<RawColumn>, TypeHausError> {
        validate_identifier(table)?;
        let rows = sqlx::query(
            "SELECT column_name::text AS column_name,
                    data_type::text AS data_type,
                    character_maximum_length::int4 AS length,
                    numeric_precision::int4 AS precision,
                    numeric_scale::int4 AS scale,
                    is_nullable::text AS is_nullable
             FROM information_schema.columns
             WHERE table_schema = current_schema() AND table_name = $1
             ORDER BY ordinal_position",
        )
        .bind(table)
        .fetch_all(self)
        .await?;

        rows.iter()
            .map(|row| -> Result<RawColumn, TypeHausError> {
                let data_type: String = row.try_get("data_type")?;
                let length: Option<i32> = row.try_get("length")?;
                let precision: Option<i32> = row.try_get("precision")?;
                let scale: Option<i32> = row.try_get("scale")?;
                let is_nullable: String = row.try_get("is_nullable")?;

                let raw_type = match (data_type.as_str(), length, precision, scale) {
                    (_, Some(length), _, _) => format!("{}({})", data_type, length),
                    ("numeric", None, Some(precision), Some(scale)) => {
                        format!("numeric({}, {})", precision, scale)
                    }
                    _ => data_type.clone(),
                };

                Ok(RawColumn {
                    name: row.try_get("column_name")?,
                    raw_type,
                    nullable: is_nullable == "YES",
                })
            })
            .collect()
    }
}

/// Reflect a table's columns from any catalog source
pub async fn reflect_columns<S>(
    source: &S,
    registry: &TypeRegistry,
    table: &str,
) -> Result<Vec<ReflectedColumn>, TypeHausError>
where
    S: CatalogSource + ?Sized,
{
    let raw_columns = source.raw_columns(table).await?;
    if raw_columns.is_empty() {
        return Err(TypeHausError::TableNotFound(table.to_string()));
    }

    let dialect = source.dialect();
    Ok(raw_columns
        .into_iter()
        .map(|raw| {
            let column_type = registry.reflect(dialect, &raw.raw_type);
            crate::trace_log!("Reflected {}.{} {} as {:?}", table, raw.name, raw.raw_type, column_type);
            ReflectedColumn {
                name: raw.name,
                raw_type: raw.raw_type,
                column_type,
                nullable: raw.nullable,
            }
        })
        .collect())
}

impl TypeHaus {
    /// Reflect a table from the connected database
    pub async fn reflect_table(&self, table: &str) -> Result<Vec<ReflectedColumn>, TypeHausError> {
        match self.connection()? {
            Connection::Postgres(pool) => reflect_columns(pool, self.registry(), table).await,
            Connection::Sqlite(pool) => reflect_columns(pool, self.registry(), table).await,
        }
    }
}
