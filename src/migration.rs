//! Table DDL generation
//!
//! This module describes tables in terms of portable column types and
//! creates them on the connected database.

use serde::{Deserialize, Serialize};

use crate::core::TypeHaus;
use crate::errors::TypeHausError;
use type_mapping::{ColumnType, Dialect, TypeMappingError, quote_identifier, render_column_type};

/// Column declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            primary_key: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Mark as primary key, which implies NOT NULL
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    fn definition_sql(&self, dialect: Dialect) -> Result<String, TypeMappingError> {
        let mut definition = format!(
            "{} {}",
            quote_identifier(&self.name)?,
            render_column_type(&self.column_type, dialect)?
        );
        if self.primary_key {
            definition.push_str(" PRIMARY KEY");
        } else if !self.nullable {
            definition.push_str(" NOT NULL");
        }
        Ok(definition)
    }
}

/// Table declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnSchema) -> Self {
        self.columns.push(column);
        self
    }

    /// CREATE TABLE statement for a dialect
    pub fn create_table_sql(&self, dialect: Dialect) -> Result<String, TypeMappingError> {
        let definitions = self
            .columns
            .iter()
            .map(|column| column.definition_sql(dialect))
            .collect::<Result<Vec<_>, _>>()?;

        let table = quote_identifier(&self.name)?;
        let sql = match dialect {
            Dialect::Postgres | Dialect::Sqlite => format!(
                "CREATE TABLE IF NOT EXISTS {} ({})",
                table,
                definitions.join(", ")
            ),
            // SQL Server has no IF NOT EXISTS for tables
            Dialect::Mssql => format!(
                "IF OBJECT_ID(N'{}', N'U') IS NULL CREATE TABLE {} ({})",
                self.name,
                table,
                definitions.join(", ")
            ),
        };
        Ok(sql)
    }

    /// DROP TABLE statement for a dialect
    pub fn drop_table_sql(&self, dialect: Dialect) -> Result<String, TypeMappingError> {
        let table = quote_identifier(&self.name)?;
        let sql = match dialect {
            Dialect::Postgres => format!("DROP TABLE IF EXISTS {} CASCADE", table),
            Dialect::Sqlite | Dialect::Mssql => format!("DROP TABLE IF EXISTS {}", table),
        };
        Ok(sql)
    }
}

impl TypeHaus {
    /// Create the table on the connected database
    /// If recreate is true, drops existing table first
    pub async fn auto_migrate(&self, table: &TableSchema, recreate: bool) -> Result<(), TypeHausError> {
        if recreate {
            let drop_sql = table.drop_table_sql(self.dialect())?;
            tracing::debug!("Dropping table with SQL: {}", drop_sql);
            self.execute(&drop_sql).await?;
        }

        let create_table_sql = table.create_table_sql(self.dialect())?;
        tracing::debug!("Creating table with SQL: {}", create_table_sql);
        self.execute(&create_table_sql).await
    }
}
