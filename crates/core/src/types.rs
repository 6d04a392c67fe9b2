//! Shared scalar types for the marketplace model.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque backend identifier.
///
/// The backend emits ids as either JSON strings or integers, so both are
/// accepted and normalised to their textual form. Two ids are equal when
/// their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Id(s),
            Raw::Signed(n) => Id(n.to_string()),
            Raw::Unsigned(n) => Id(n.to_string()),
        })
    }
}

/// Parse a backend timestamp.
///
/// Accepts, in order: RFC 3339 (`2024-03-01T10:00:00Z`), a naive date-time
/// without offset (`2024-03-01T10:00:00.123`, read as UTC), and a bare date
/// (`2024-03-01`, read as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();

    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(CoreError::InvalidTimestamp(raw.to_string()))
}

/// Serde adapter for optional timestamps in any format [`parse_timestamp`]
/// understands. `null`, a missing field, and an unparseable value all
/// become `None`, so one odd timestamp never rejects a whole payload.
pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match parse_timestamp(&s) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unparseable timestamp");
            None
        }
    }))
}
