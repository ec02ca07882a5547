//! Ordered field-alias resolution.
//!
//! The upstream emits the same logical value under several field names.
//! Priority order is a contract, so it lives in named accessor tables
//! instead of inline fallback chains.

use chrono::{DateTime, Utc};

use crate::records::PostRecord;

/// One alias accessor: reads a single candidate field off a record.
pub type Accessor<R, T> = fn(&R) -> Option<&T>;

/// Returns the first value any accessor resolves, in table order.
#[must_use]
pub fn first_resolved<'r, R, T>(record: &'r R, accessors: &[Accessor<R, T>]) -> Option<&'r T> {
    accessors.iter().find_map(|accessor| accessor(record))
}

/// Scheduling-time aliases for a post, highest priority first.
pub const POST_SCHEDULE_ACCESSORS: [Accessor<PostRecord, DateTime<Utc>>; 4] = [
    |post| post.scheduled_at.as_ref(),
    |post| post.scheduled_at_camel.as_ref(),
    |post| post.start_time.as_ref(),
    |post| post.date.as_ref(),
];

/// Title aliases for a post, highest priority first.
pub const POST_TITLE_ACCESSORS: [Accessor<PostRecord, String>; 4] = [
    |post| post.campaign_name.as_ref(),
    |post| post.campaign_name_camel.as_ref(),
    |post| post.original_description.as_ref(),
    |post| post.caption.as_ref(),
];
