use rusqlite::types::{ToSql, ToSqlOutput};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A JSON scalar carried through to the database untouched
///
/// Series and study attributes that the flattener does not interpret are
/// stored as whatever JSON scalar the source document holds. SQLite column
/// affinity decides the final storage class, the same way it would for any
/// other client binding the raw value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

impl Scalar {
    /// Convenience constructor for text values
    pub fn text(value: impl Into<String>) -> Self {
        Scalar::Text(value.into())
    }

    /// Returns the text value, if this is a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Real(r) => write!(f, "{}", r),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl ToSql for Scalar {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Scalar::Bool(b) => b.to_sql(),
            Scalar::Int(i) => i.to_sql(),
            Scalar::Real(r) => r.to_sql(),
            Scalar::Text(s) => s.to_sql(),
        }
    }
}

/// Deserializes a key that must be present but may hold `null`
///
/// Plain `Option` fields let serde treat a missing key as `None`; routing
/// through this function makes a missing key a "missing field" error.
pub(crate) fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Deserializes an identifier written either as a JSON string or a number
///
/// Identifiers end up in file paths, so booleans are rejected.
pub(crate) fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => Ok(s),
        Scalar::Int(i) => Ok(i.to_string()),
        Scalar::Real(r) => Ok(r.to_string()),
        Scalar::Bool(b) => Err(serde::de::Error::custom(format!(
            "expected a string or number identifier, found boolean {}",
            b
        ))),
    }
}
