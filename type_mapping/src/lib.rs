//! Portable column types shared across database dialects
//!
//! This crate provides the identifier codec, the per-dialect DDL type
//! rendering and the introspection type-name tables used by typehaus.

pub mod dialect;
pub mod encoding;
pub mod errors;
pub mod ischema;
pub mod portable_uuid;
pub mod sql;
pub mod types;
pub mod validate;

pub use dialect::Dialect;
pub use errors::TypeMappingError;
pub use ischema::{registry, IschemaNames, TypeRegistry};
pub use portable_uuid::{PortableUuid, UuidInput, UUID_CHAR_LENGTH};
pub use sql::render_column_type;
pub use types::{ColumnType, UUID_PLACEHOLDER_LENGTH};
pub use validate::{quote_identifier, validate_identifier};
