//! Introspection type-name tables
//!
//! Each dialect maps the raw type names reported by its catalog to a
//! [`ColumnType`]. The process-wide [`TypeRegistry`] adds the portable
//! overrides on top of the base tables and is installed exactly once.

use crate::dialect::Dialect;
use crate::types::ColumnType;
use std::collections::HashMap;
use std::sync::OnceLock;

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// The installed registry, built with overrides on first use
pub fn registry() -> &'static TypeRegistry {
    REGISTRY.get_or_init(|| {
        tracing::debug!("Installing portable type overrides");
        TypeRegistry::with_overrides()
    })
}

/// Raw type names known to one dialect's reflection
#[derive(Debug, Clone)]
pub struct IschemaNames {
    dialect: Dialect,
    names: HashMap<String, ColumnType>,
}

impl IschemaNames {
    /// Base table for a dialect, without portable overrides
    pub fn base(dialect: Dialect) -> Self {
        let entries: &[(&str, ColumnType)] = match dialect {
            Dialect::Postgres => &POSTGRES_NAMES,
            Dialect::Sqlite => &SQLITE_NAMES,
            Dialect::Mssql => &MSSQL_NAMES,
        };
        let names = entries
            .iter()
            .map(|(name, column_type)| (name.to_string(), column_type.clone()))
            .collect();
        Self { dialect, names }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Look up a bare type name, without parenthesized arguments
    pub fn get(&self, name: &str) -> Option<&ColumnType> {
        self.names.get(&normalize_name(self.dialect, name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn with(mut self, name: &str, column_type: ColumnType) -> Self {
        self.names
            .insert(normalize_name(self.dialect, name), column_type);
        self
    }

    /// Resolve a raw catalog type such as `VARCHAR(20)` to a column type
    pub fn reflect(&self, raw_type: &str) -> ColumnType {
        let (name, args) = split_type_arguments(raw_type);
        if let Some(column_type) = self.get(name) {
            return column_type.clone().with_args(&args);
        }

        match self.dialect {
            Dialect::Sqlite => sqlite_affinity(name).with_args(&args),
            Dialect::Postgres | Dialect::Mssql => {
                tracing::warn!(
                    "Did not recognize type '{}' of {} column, reflecting as NULL type",
                    raw_type,
                    self.dialect
                );
                ColumnType::Null
            }
        }
    }
}

/// Type-name tables for every supported dialect
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    postgres: IschemaNames,
    sqlite: IschemaNames,
    mssql: IschemaNames,
}

impl TypeRegistry {
    /// Registry holding only the base tables
    pub fn base() -> Self {
        Self {
            postgres: IschemaNames::base(Dialect::Postgres),
            sqlite: IschemaNames::base(Dialect::Sqlite),
            mssql: IschemaNames::base(Dialect::Mssql),
        }
    }

    /// Registry with the portable overrides installed
    ///
    /// SQL Server `xml` columns reflect as plain strings and SQLite columns
    /// declared `UNIQUEIDENTIFIER` reflect as [`ColumnType::PortableUuid`].
    pub fn with_overrides() -> Self {
        let base = Self::base();
        Self {
            postgres: base.postgres,
            sqlite: base
                .sqlite
                .with("UNIQUEIDENTIFIER", ColumnType::PortableUuid),
            mssql: base.mssql.with("xml", ColumnType::String { length: None }),
        }
    }

    pub fn names(&self, dialect: Dialect) -> &IschemaNames {
        match dialect {
            Dialect::Postgres => &self.postgres,
            Dialect::Sqlite => &self.sqlite,
            Dialect::Mssql => &self.mssql,
        }
    }

    pub fn reflect(&self, dialect: Dialect, raw_type: &str) -> ColumnType {
        self.names(dialect).reflect(raw_type)
    }
}

fn normalize_name(dialect: Dialect, name: &str) -> String {
    let name = name.trim();
    match dialect {
        Dialect::Sqlite => name.to_ascii_uppercase(),
        Dialect::Postgres | Dialect::Mssql => name.to_ascii_lowercase(),
    }
}

/// Split `NUMERIC(10, 2)` into `("NUMERIC", [10, 2])`
///
/// Non-numeric arguments such as `max` are dropped.
fn split_type_arguments(raw_type: &str) -> (&str, Vec<u32>) {
    let raw_type = raw_type.trim();
    match raw_type.split_once('(') {
        Some((name, rest)) => {
            let args = rest
                .trim_end()
                .trim_end_matches(')')
                .split(',')
                .filter_map(|arg| arg.trim().parse().ok())
                .collect();
            (name.trim(), args)
        }
        None => (raw_type, Vec::new()),
    }
}

/// SQLite column affinity for type names missing from the table
fn sqlite_affinity(name: &str) -> ColumnType {
    let name = name.to_ascii_uppercase();
    if name.contains("INT") {
        ColumnType::Integer
    } else if name.contains("CHAR") || name.contains("CLOB") || name.contains("TEXT") {
        ColumnType::Text
    } else if name.contains("BLOB") || name.is_empty() {
        ColumnType::Null
    } else if name.contains("REAL") || name.contains("FLOA") || name.contains("DOUB") {
        ColumnType::Real
    } else {
        ColumnType::Numeric {
            precision: None,
            scale: None,
        }
    }
}

const UNBOUNDED_STRING: ColumnType = ColumnType::String { length: None };
const UNBOUNDED_CHAR: ColumnType = ColumnType::Char { length: None };
const BARE_NUMERIC: ColumnType = ColumnType::Numeric {
    precision: None,
    scale: None,
};
const BARE_UNIQUE_IDENTIFIER: ColumnType = ColumnType::UniqueIdentifier {
    length: None,
    collation: None,
};

static POSTGRES_NAMES: [(&str, ColumnType); 28] = [
    ("smallint", ColumnType::SmallInt),
    ("int2", ColumnType::SmallInt),
    ("integer", ColumnType::Integer),
    ("int4", ColumnType::Integer),
    ("bigint", ColumnType::BigInt),
    ("int8", ColumnType::BigInt),
    ("real", ColumnType::Real),
    ("float4", ColumnType::Real),
    ("double precision", ColumnType::Double),
    ("float8", ColumnType::Double),
    ("numeric", BARE_NUMERIC),
    ("boolean", ColumnType::Boolean),
    ("bool", ColumnType::Boolean),
    ("text", ColumnType::Text),
    ("character varying", UNBOUNDED_STRING),
    ("varchar", UNBOUNDED_STRING),
    ("character", UNBOUNDED_CHAR),
    ("char", UNBOUNDED_CHAR),
    ("bpchar", UNBOUNDED_CHAR),
    ("bytea", ColumnType::Blob),
    ("date", ColumnType::Date),
    ("timestamp", ColumnType::Timestamp),
    ("timestamp without time zone", ColumnType::Timestamp),
    ("timestamp with time zone", ColumnType::Timestamp),
    ("timestamptz", ColumnType::Timestamp),
    ("json", ColumnType::Json),
    ("jsonb", ColumnType::Json),
    ("uuid", ColumnType::Uuid),
];

static SQLITE_NAMES: [(&str, ColumnType); 21] = [
    ("BIGINT", ColumnType::BigInt),
    ("BLOB", ColumnType::Blob),
    ("BOOL", ColumnType::Boolean),
    ("BOOLEAN", ColumnType::Boolean),
    ("CHAR", UNBOUNDED_CHAR),
    ("DATE", ColumnType::Date),
    ("DATETIME", ColumnType::Timestamp),
    ("DECIMAL", BARE_NUMERIC),
    ("DOUBLE", ColumnType::Double),
    ("FLOAT", ColumnType::Real),
    ("INT", ColumnType::Integer),
    ("INTEGER", ColumnType::Integer),
    ("JSON", ColumnType::Json),
    ("NUMERIC", BARE_NUMERIC),
    ("REAL", ColumnType::Real),
    ("SMALLINT", ColumnType::SmallInt),
    ("TEXT", ColumnType::Text),
    ("TIMESTAMP", ColumnType::Timestamp),
    ("VARCHAR", UNBOUNDED_STRING),
    ("NVARCHAR", UNBOUNDED_STRING),
    ("NCHAR", UNBOUNDED_CHAR),
];

static MSSQL_NAMES: [(&str, ColumnType); 24] = [
    ("int", ColumnType::Integer),
    ("bigint", ColumnType::BigInt),
    ("smallint", ColumnType::SmallInt),
    ("tinyint", ColumnType::SmallInt),
    ("bit", ColumnType::Boolean),
    ("real", ColumnType::Real),
    ("float", ColumnType::Double),
    ("decimal", BARE_NUMERIC),
    ("numeric", BARE_NUMERIC),
    ("money", BARE_NUMERIC),
    ("varchar", UNBOUNDED_STRING),
    ("nvarchar", UNBOUNDED_STRING),
    ("char", UNBOUNDED_CHAR),
    ("nchar", UNBOUNDED_CHAR),
    ("text", ColumnType::Text),
    ("ntext", ColumnType::Text),
    ("varbinary", ColumnType::Blob),
    ("binary", ColumnType::Blob),
    ("image", ColumnType::Blob),
    ("date", ColumnType::Date),
    ("datetime", ColumnType::Timestamp),
    ("datetime2", ColumnType::Timestamp),
    ("datetimeoffset", ColumnType::Timestamp),
    ("uniqueidentifier", BARE_UNIQUE_IDENTIFIER),
];
