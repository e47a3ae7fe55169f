use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A backend-assigned point in time.
///
/// The backend stores timestamps without a zone and serializes them as
/// ISO-8601 strings, e.g. `2024-03-01T12:30:00.123456`.
///
/// # Example
///
/// ```
/// use gatehouse::utils::timestamp::Timestamp;
///
/// let timestamp: Timestamp = serde_json::from_str("\"2024-03-01T12:30:00.123456\"").unwrap();
/// assert_eq!(timestamp.to_string(), "2024-03-01 12:30:00");
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NaiveDateTime);

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn format_with(&self, format: &str) -> String {
        self.0.format(format).to_string()
    }

    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_with(TIME_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_timestamp_without_fraction() {
        let timestamp: Timestamp = serde_json::from_str("\"2023-09-17T16:34:06\"").unwrap();
        assert_eq!(timestamp.to_string(), "2023-09-17 16:34:06");
    }

    #[test]
    fn should_serialize_back_to_iso_format() {
        let timestamp: Timestamp = serde_json::from_str("\"2023-09-17T16:34:06.5\"").unwrap();
        let json = serde_json::to_string(&timestamp).unwrap();
        assert_eq!(json, "\"2023-09-17T16:34:06.500\"");
    }
}
