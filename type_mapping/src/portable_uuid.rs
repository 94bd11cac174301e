//! Portable identifier codec
//!
//! `PortableUuid` is stored in the native `UUID` column on PostgreSQL and
//! as `CHAR(36)` holding the uppercase hyphenated form everywhere else.

use crate::dialect::Dialect;
use crate::errors::TypeMappingError;
use crate::types::ColumnType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// Length of the hyphenated textual form
pub const UUID_CHAR_LENGTH: u32 = 36;

/// Value handed to [`PortableUuid::encode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidInput<'a> {
    Uuid(Uuid),
    /// Raw text expected to already be UUID-shaped
    Text(&'a str),
}

impl From<Uuid> for UuidInput<'_> {
    fn from(value: Uuid) -> Self {
        UuidInput::Uuid(value)
    }
}

impl From<PortableUuid> for UuidInput<'_> {
    fn from(value: PortableUuid) -> Self {
        UuidInput::Uuid(value.0)
    }
}

impl<'a> From<&'a str> for UuidInput<'a> {
    fn from(value: &'a str) -> Self {
        UuidInput::Text(value)
    }
}

impl<'a> From<&'a String> for UuidInput<'a> {
    fn from(value: &'a String) -> Self {
        UuidInput::Text(value.as_str())
    }
}

/// Platform-independent UUID column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortableUuid(pub Uuid);

impl PortableUuid {
    pub fn new_v4() -> Self {
        PortableUuid(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Storage column type for a dialect
    pub fn storage_type(dialect: Dialect) -> ColumnType {
        match dialect {
            Dialect::Postgres => ColumnType::Uuid,
            Dialect::Sqlite | Dialect::Mssql => ColumnType::char(UUID_CHAR_LENGTH),
        }
    }

    /// Render a structured value for binding on a dialect
    pub fn render(value: &Uuid, dialect: Dialect) -> String {
        let hyphenated = value.hyphenated();
        match dialect {
            Dialect::Postgres => hyphenated.to_string(),
            Dialect::Sqlite | Dialect::Mssql => {
                let mut buffer = Uuid::encode_buffer();
                hyphenated.encode_upper(&mut buffer).to_string()
            }
        }
    }

    /// Encode a value for binding. `None` stays `None` (SQL `NULL`).
    pub fn encode(
        value: Option<UuidInput<'_>>,
        dialect: Dialect,
    ) -> Result<Option<String>, TypeMappingError> {
        let uuid = match value {
            None => return Ok(None),
            Some(UuidInput::Uuid(uuid)) => uuid,
            Some(UuidInput::Text(text)) => Self::parse(text)?.0,
        };
        Ok(Some(Self::render(&uuid, dialect)))
    }

    /// Decode a stored value. `None` stays `None`.
    pub fn decode(value: Option<&str>, dialect: Dialect) -> Result<Option<Uuid>, TypeMappingError> {
        let Some(text) = value else {
            return Ok(None);
        };
        match dialect {
            Dialect::Postgres | Dialect::Sqlite | Dialect::Mssql => {
                Self::parse(text).map(|parsed| Some(parsed.0))
            }
        }
    }

    /// Parse any textual UUID form accepted by the `uuid` crate
    pub fn parse(text: &str) -> Result<Self, TypeMappingError> {
        Uuid::parse_str(text.trim())
            .map(PortableUuid)
            .map_err(|source| TypeMappingError::MalformedIdentifier {
                value: text.to_string(),
                source,
            })
    }
}

impl Display for PortableUuid {
    /// Uppercase hyphenated form, matching the textual storage representation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Uuid::encode_buffer();
        f.write_str(self.0.hyphenated().encode_upper(&mut buffer))
    }
}

impl FromStr for PortableUuid {
    type Err = TypeMappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for PortableUuid {
    fn from(value: Uuid) -> Self {
        PortableUuid(value)
    }
}

impl From<PortableUuid> for Uuid {
    fn from(value: PortableUuid) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "6f1a9a3c-2b4d-4e8f-9c0a-1b2c3d4e5f60";

    fn sample() -> Uuid {
        Uuid::parse_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_storage_type_per_dialect() {
        assert_eq!(PortableUuid::storage_type(Dialect::Postgres), ColumnType::Uuid);
        assert_eq!(
            PortableUuid::storage_type(Dialect::Sqlite),
            ColumnType::char(36)
        );
        assert_eq!(
            PortableUuid::storage_type(Dialect::Mssql),
            ColumnType::char(36)
        );
    }

    #[test]
    fn test_round_trip_every_dialect() {
        for _ in 0..16 {
            let value = Uuid::new_v4();
            for dialect in Dialect::ALL {
                let encoded = PortableUuid::encode(Some(value.into()), dialect).unwrap();
                let decoded = PortableUuid::decode(encoded.as_deref(), dialect).unwrap();
                assert_eq!(decoded, Some(value), "round trip failed on {}", dialect);
            }
        }
    }

    #[test]
    fn test_none_passes_through() {
        for dialect in Dialect::ALL {
            assert_eq!(PortableUuid::encode(None, dialect).unwrap(), None);
            assert_eq!(PortableUuid::decode(None, dialect).unwrap(), None);
        }
    }

    #[test]
    fn test_postgres_encodes_lowercase() {
        let encoded = PortableUuid::encode(Some(sample().into()), Dialect::Postgres)
            .unwrap()
            .unwrap();
        assert_eq!(encoded, SAMPLE);
        assert_eq!(encoded.len(), 36);
    }

    #[test]
    fn test_textual_dialects_encode_uppercase() {
        for dialect in [Dialect::Sqlite, Dialect::Mssql] {
            let encoded = PortableUuid::encode(Some(sample().into()), dialect)
                .unwrap()
                .unwrap();
            assert_eq!(encoded, SAMPLE.to_uppercase());
            assert_eq!(encoded.len(), 36);
            assert_eq!(encoded.matches('-').count(), 4);
        }
    }

    #[test]
    fn test_raw_text_is_parsed_then_rendered() {
        let braced = format!("{{{}}}", SAMPLE);
        let encoded = PortableUuid::encode(Some(braced.as_str().into()), Dialect::Sqlite)
            .unwrap()
            .unwrap();
        assert_eq!(encoded, SAMPLE.to_uppercase());

        let simple = SAMPLE.replace('-', "").to_uppercase();
        let encoded = PortableUuid::encode(Some(simple.as_str().into()), Dialect::Postgres)
            .unwrap()
            .unwrap();
        assert_eq!(encoded, SAMPLE);
    }

    #[test]
    fn test_malformed_text_fails_on_encode() {
        for dialect in Dialect::ALL {
            let err = PortableUuid::encode(Some("not-a-valid-uuid".into()), dialect).unwrap_err();
            assert!(matches!(err, TypeMappingError::MalformedIdentifier { .. }));
        }
    }

    #[test]
    fn test_malformed_text_fails_on_decode() {
        for dialect in Dialect::ALL {
            let err = PortableUuid::decode(Some("not-a-valid-uuid"), dialect).unwrap_err();
            match err {
                TypeMappingError::MalformedIdentifier { value, .. } => {
                    assert_eq!(value, "not-a-valid-uuid")
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_decode_accepts_either_case() {
        for text in [SAMPLE.to_string(), SAMPLE.to_uppercase()] {
            let decoded = PortableUuid::decode(Some(text.as_str()), Dialect::Mssql).unwrap();
            assert_eq!(decoded, Some(sample()));
        }
    }

    #[test]
    fn test_display_and_from_str() {
        let value = PortableUuid::from(sample());
        assert_eq!(value.to_string(), SAMPLE.to_uppercase());
        assert_eq!(value.to_string().parse::<PortableUuid>().unwrap(), value);
        assert_eq!(Uuid::from(value), sample());
    }

    #[test]
    fn test_serde_is_transparent() {
        let value = PortableUuid::from(sample());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{}\"", SAMPLE));
        let parsed: PortableUuid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
