//! The unified event entity and its display color.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serialize, Serializer};

/// Title fallback for posts with no resolvable title field.
pub const UNTITLED_POST: &str = "Untitled Post";
/// Title fallback for synced events with no summary.
pub const UNTITLED_EVENT: &str = "Untitled Event";

/// Display color assigned by the aggregator.
///
/// Presentation metadata only, never part of stored domain meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventColor {
    Purple,
    Green,
    Red,
    Blue,
}

impl EventColor {
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Purple => "#8b5cf6",
            Self::Green => "#10b981",
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
        }
    }
}

impl std::fmt::Display for EventColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_hex())
    }
}

impl Serialize for EventColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_hex())
    }
}

/// One entry of the unified event list, from either source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Unique within the unified list. Post-derived ids carry a `post-` prefix;
    /// synced events keep the source's native identifier.
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    /// Expected to be `>= start`, but inversions from an external source are
    /// tolerated; such events simply never classify as multi-day.
    pub end: DateTime<Utc>,
    pub color: EventColor,
}

impl CalendarEvent {
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
