//! Response envelopes for the upstream REST API.
//!
//! Both endpoints wrap their payload in `{ success, <array> }`. Every
//! field defaults, so a missing flag or array reads as "no data" rather
//! than a decode error; only a body that is not an envelope at all fails.

use gnomon_calendar::lenient;
use gnomon_calendar::records::{PostRecord, SyncedEventRecord};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostsEnvelope {
    #[serde(deserialize_with = "lenient::flag")]
    pub success: bool,
    pub posts: Vec<PostRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventsEnvelope {
    #[serde(deserialize_with = "lenient::flag")]
    pub success: bool,
    pub events: Vec<SyncedEventRecord>,
}
