//! Event listing types.
//!
//! These mirror the rows served by `GET /api/events`. The backend stores most
//! columns as nullable text, so everything except `id` and `title` is
//! optional on the wire.

use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque event identifier.
///
/// The backend serves ids as integers, while the ticket endpoint receives
/// them back as strings. Both forms deserialize into the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventId(CompactString);

impl EventId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        Self(value.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(CompactString),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => EventId::from(n),
            RawId::Text(s) => EventId(s),
        })
    }
}

/// A single listed event.
///
/// `date` is kept exactly as received (normally `YYYY-MM-DD`, sometimes
/// `TBA`); interpreting it is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub ticket_url: Option<String>,
    pub source_site: Option<String>,
}

/// Optional server-side narrowing for `GET /api/events`.
///
/// `date` is matched by the backend as a substring of the stored date text,
/// so `2025-03` selects a whole month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
