//! UTC timestamp codec for date fields.
//!
//! Every date in an edX document is written as `YYYY-MM-DDTHH:MM:SSZ`.
//! Sub-second precision is dropped on encode, so `decode(encode(t))`
//! yields `t` truncated to whole seconds.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use thiserror::Error;

/// Layout used for every timestamp on the wire.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A timestamp string did not match [`TIMESTAMP_FORMAT`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid timestamp '{value}': expected YYYY-MM-DDTHH:MM:SSZ")]
pub struct TimestampError {
    /// The rejected input.
    pub value: String,
}

/// Render an instant as a UTC timestamp string.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use edx::timestamp;
///
/// let t = Utc.with_ymd_and_hms(2025, 7, 11, 9, 30, 0).unwrap();
/// assert_eq!(timestamp::encode(&t), "2025-07-11T09:30:00Z");
/// ```
pub fn encode(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a UTC timestamp string.
pub fn decode(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampError {
            value: value.to_string(),
        })
}

/// Current time truncated to whole seconds.
///
/// Used as the fallback for absent date fields so that a freshly
/// defaulted document still round-trips exactly.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Serde adapter for `DateTime<Utc>` fields using [`TIMESTAMP_FORMAT`].
pub(crate) mod wire {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::encode(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::decode(&value).map_err(serde::de::Error::custom)
    }
}
