//! Event aggregation: raw source records in, the unified event list out.

use chrono::{DateTime, TimeDelta, Utc};

use crate::color::{DEFAULT_COLOR, color_for_title};
use crate::event::{CalendarEvent, UNTITLED_EVENT, UNTITLED_POST};
use crate::records::{PostRecord, SyncedEventRecord};
use crate::resolve::{POST_SCHEDULE_ACCESSORS, POST_TITLE_ACCESSORS, first_resolved};

/// Prefix distinguishing post-derived ids from synced-event ids.
pub const POST_ID_PREFIX: &str = "post-";

/// Implied duration of a post, which has no end time of its own.
fn post_duration() -> TimeDelta {
    TimeDelta::minutes(30)
}

/// ## Summary
/// Converts post records into calendar events. Records without a resolvable
/// scheduling time cannot be placed on a calendar and are dropped; records
/// without an identifier cannot satisfy the unified-list uniqueness contract
/// and are dropped with a diagnostic.
#[must_use]
pub fn post_events(posts: &[PostRecord]) -> Vec<CalendarEvent> {
    posts.iter().filter_map(post_event).collect()
}

fn post_event(post: &PostRecord) -> Option<CalendarEvent> {
    let Some(start) = first_resolved(post, &POST_SCHEDULE_ACCESSORS).copied() else {
        tracing::trace!(id = ?post.id, "Skipping post without a scheduling time");
        return None;
    };
    let Some(id) = post.id.as_deref() else {
        tracing::warn!(start = %start, "Skipping scheduled post without an identifier");
        return None;
    };
    let title = first_resolved(post, &POST_TITLE_ACCESSORS)
        .cloned()
        .unwrap_or_else(|| UNTITLED_POST.to_string());
    Some(CalendarEvent {
        id: format!("{POST_ID_PREFIX}{id}"),
        title,
        description: post.message.clone().unwrap_or_default(),
        start,
        end: start + post_duration(),
        // Posts are never color-classified by content
        color: DEFAULT_COLOR,
    })
}

/// ## Summary
/// Converts synced event records into calendar events. Missing start/end
/// instants fall back to `now` (degenerate but safe); records without an
/// identifier are dropped with a diagnostic.
#[must_use]
pub fn synced_events(records: &[SyncedEventRecord], now: DateTime<Utc>) -> Vec<CalendarEvent> {
    records
        .iter()
        .filter_map(|record| synced_event(record, now))
        .collect()
}

fn synced_event(record: &SyncedEventRecord, now: DateTime<Utc>) -> Option<CalendarEvent> {
    let Some(id) = record.id.clone() else {
        tracing::warn!(summary = ?record.summary, "Skipping synced event without an identifier");
        return None;
    };
    let title = record
        .summary
        .clone()
        .unwrap_or_else(|| UNTITLED_EVENT.to_string());
    let color = color_for_title(&title);
    Some(CalendarEvent {
        id,
        description: record.description.clone().unwrap_or_default(),
        start: record.start.unwrap_or(now),
        end: record.end.unwrap_or(now),
        title,
        color,
    })
}

/// The unified event list: the post-derived portion plus the synced portion.
///
/// Posts merge additively and idempotently; synced events are replaced
/// wholesale on every successful sync and cleared on a failed one.
#[derive(Debug, Clone, Default)]
pub struct EventSet {
    posts: Vec<CalendarEvent>,
    synced: Vec<CalendarEvent>,
}

impl EventSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the unified list: posts in merge order, then synced events
    /// in fetch order. This is the "list order" the day-color policy uses.
    pub fn events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.posts.iter().chain(self.synced.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len() + self.synced.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.synced.is_empty()
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.events().any(|event| event.id == id)
    }

    /// Merges post-derived events, skipping any id already present.
    /// Returns how many events were actually added.
    pub fn merge_posts(&mut self, incoming: Vec<CalendarEvent>) -> usize {
        let mut added = 0;
        for event in incoming {
            if self.contains_id(&event.id) {
                tracing::trace!(id = %event.id, "Skipping already-merged post event");
                continue;
            }
            self.posts.push(event);
            added += 1;
        }
        added
    }

    /// Replaces the synced portion wholesale.
    pub fn replace_synced(&mut self, incoming: Vec<CalendarEvent>) {
        self.synced = incoming;
    }

    /// Empties the synced portion, keeping post-derived events untouched.
    pub fn clear_synced(&mut self) {
        self.synced.clear();
    }
}
