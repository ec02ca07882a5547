//! Raw upstream records as they arrive on the wire.
//!
//! Field aliasing is resolved later by [`crate::resolve`]; these structs
//! just capture every alias the upstream is known to emit, decoding each
//! scalar leniently so one malformed field never drops a record.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::lenient;

/// A content post as returned by `listPosts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,

    // Scheduling-time aliases, in resolution priority order
    #[serde(deserialize_with = "lenient::datetime")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(rename = "scheduledAt", deserialize_with = "lenient::datetime")]
    pub scheduled_at_camel: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub date: Option<DateTime<Utc>>,

    // Title aliases, in resolution priority order
    #[serde(deserialize_with = "lenient::text")]
    pub campaign_name: Option<String>,
    #[serde(rename = "campaignName", deserialize_with = "lenient::text")]
    pub campaign_name_camel: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub original_description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub caption: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub message: Option<String>,
}

/// An externally synced calendar event as returned by `listSyncedEvents`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SyncedEventRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub start: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::datetime")]
    pub end: Option<DateTime<Utc>>,
}
