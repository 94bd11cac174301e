//! SQL type rendering
//!
//! This module compiles abstract column types into the DDL type names
//! of each dialect.

use crate::dialect::Dialect;
use crate::errors::TypeMappingError;
use crate::portable_uuid::PortableUuid;
use crate::types::{ColumnType, UUID_PLACEHOLDER_LENGTH};

/// Render a column type for DDL generation on the given dialect
///
/// The column type is only borrowed, so declared lengths and collations are
/// never altered by rendering.
pub fn render_column_type(
    column_type: &ColumnType,
    dialect: Dialect,
) -> Result<String, TypeMappingError> {
    let rendered = match dialect {
        Dialect::Postgres => render_postgres(column_type),
        Dialect::Sqlite => render_sqlite(column_type),
        Dialect::Mssql => render_mssql(column_type),
    };
    rendered.ok_or_else(|| TypeMappingError::UnrenderableType {
        column_type: format!("{:?}", column_type),
        dialect: dialect.name(),
    })
}

fn sized(name: &str, length: Option<u32>) -> String {
    match length {
        Some(length) => format!("{}({})", name, length),
        None => name.to_string(),
    }
}

fn numeric(precision: Option<u32>, scale: Option<u32>) -> String {
    match (precision, scale) {
        (Some(precision), Some(scale)) => format!("NUMERIC({},{})", precision, scale),
        (Some(precision), None) => format!("NUMERIC({})", precision),
        _ => "NUMERIC".to_string(),
    }
}

fn render_postgres(column_type: &ColumnType) -> Option<String> {
    let rendered = match column_type {
        ColumnType::SmallInt => "SMALLINT".to_string(),
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::BigInt => "BIGINT".to_string(),
        ColumnType::Real => "REAL".to_string(),
        ColumnType::Double => "DOUBLE PRECISION".to_string(),
        ColumnType::Numeric { precision, scale } => numeric(*precision, *scale),
        ColumnType::Boolean => "BOOLEAN".to_string(),
        ColumnType::Text => "TEXT".to_string(),
        ColumnType::String { length } => sized("VARCHAR", *length),
        ColumnType::Char { length } => sized("CHAR", *length),
        ColumnType::Blob => "BYTEA".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::Timestamp => "TIMESTAMP WITH TIME ZONE".to_string(),
        ColumnType::Json => "JSONB".to_string(),
        ColumnType::Uuid | ColumnType::UniqueIdentifier { .. } => "UUID".to_string(),
        ColumnType::PortableUuid => {
            return render_postgres(&PortableUuid::storage_type(Dialect::Postgres))
        }
        ColumnType::Null => return None,
    };
    Some(rendered)
}

fn render_sqlite(column_type: &ColumnType) -> Option<String> {
    let rendered = match column_type {
        ColumnType::SmallInt => "SMALLINT".to_string(),
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::BigInt => "BIGINT".to_string(),
        ColumnType::Real => "REAL".to_string(),
        ColumnType::Double => "DOUBLE".to_string(),
        ColumnType::Numeric { precision, scale } => numeric(*precision, *scale),
        ColumnType::Boolean => "BOOLEAN".to_string(),
        ColumnType::Text => "TEXT".to_string(),
        ColumnType::String { length } => sized("VARCHAR", *length),
        ColumnType::Char { length } => sized("CHAR", *length),
        ColumnType::Blob => "BLOB".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::Timestamp => "DATETIME".to_string(),
        ColumnType::Json => "JSON".to_string(),
        // SQLite has no identifier type: fall back to fixed-length text,
        // sized generously and without the SQL Server collation.
        ColumnType::UniqueIdentifier { length, .. } => {
            sized("CHAR", Some(length.unwrap_or(UUID_PLACEHOLDER_LENGTH)))
        }
        ColumnType::Uuid | ColumnType::PortableUuid => {
            return render_sqlite(&PortableUuid::storage_type(Dialect::Sqlite))
        }
        ColumnType::Null => return None,
    };
    Some(rendered)
}

fn render_mssql(column_type: &ColumnType) -> Option<String> {
    let rendered = match column_type {
        ColumnType::SmallInt => "SMALLINT".to_string(),
        ColumnType::Integer => "INT".to_string(),
        ColumnType::BigInt => "BIGINT".to_string(),
        ColumnType::Real => "REAL".to_string(),
        ColumnType::Double => "FLOAT".to_string(),
        ColumnType::Numeric { precision, scale } => numeric(*precision, *scale),
        ColumnType::Boolean => "BIT".to_string(),
        ColumnType::Text | ColumnType::Json => "NVARCHAR(max)".to_string(),
        ColumnType::String { length } => match length {
            Some(length) => format!("VARCHAR({})", length),
            None => "VARCHAR(max)".to_string(),
        },
        ColumnType::Char { length } => sized("CHAR", *length),
        ColumnType::Blob => "VARBINARY(max)".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::Timestamp => "DATETIMEOFFSET".to_string(),
        ColumnType::Uuid | ColumnType::UniqueIdentifier { .. } => "UNIQUEIDENTIFIER".to_string(),
        ColumnType::PortableUuid => {
            return render_mssql(&PortableUuid::storage_type(Dialect::Mssql))
        }
        ColumnType::Null => return None,
    };
    Some(rendered)
}
