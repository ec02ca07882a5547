#![allow(dead_code, clippy::expect_used)]
//! Test helpers for integration tests.
//!
//! Provides in-memory fake sources (static, scripted, and call-counting)
//! and builders for upstream records, so tests drive the planner without
//! any network.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use gnomon_test::calendar::records::{PostRecord, SyncedEventRecord};
use gnomon_test::client::error::{ClientError, ClientResult};
use gnomon_test::client::source::{PostSource, SyncedEventSource};

pub fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

pub fn post_record(id: &str, scheduled_at: &str) -> PostRecord {
    PostRecord {
        id: Some(id.to_string()),
        scheduled_at: Some(at(scheduled_at)),
        ..PostRecord::default()
    }
}

pub fn titled_post_record(id: &str, scheduled_at: &str, campaign_name: &str) -> PostRecord {
    PostRecord {
        campaign_name: Some(campaign_name.to_string()),
        ..post_record(id, scheduled_at)
    }
}

pub fn synced_record(id: &str, summary: &str, start: &str, end: &str) -> SyncedEventRecord {
    SyncedEventRecord {
        id: Some(id.to_string()),
        summary: Some(summary.to_string()),
        start: Some(at(start)),
        end: Some(at(end)),
        ..SyncedEventRecord::default()
    }
}

pub fn unavailable(message: &str) -> ClientError {
    ClientError::Unavailable(message.to_string())
}

/// Fake post source: serves scripted responses first, then the repeat
/// payload (empty if none), counting every call.
pub struct FakePosts {
    scripted: Mutex<VecDeque<ClientResult<Vec<PostRecord>>>>,
    repeat: Vec<PostRecord>,
    calls: AtomicUsize,
}

impl FakePosts {
    pub fn always(records: Vec<PostRecord>) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            repeat: records,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn scripted(responses: Vec<ClientResult<Vec<PostRecord>>>) -> Self {
        Self {
            scripted: Mutex::new(responses.into()),
            repeat: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PostSource for FakePosts {
    async fn list_posts(&self, _limit: u32) -> ClientResult<Vec<PostRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.scripted.lock().expect("scripted queue lock").pop_front();
        match next {
            Some(response) => response,
            None => Ok(self.repeat.clone()),
        }
    }
}

/// Fake synced-event source, mirroring [`FakePosts`].
pub struct FakeSynced {
    scripted: Mutex<VecDeque<ClientResult<Vec<SyncedEventRecord>>>>,
    repeat: Vec<SyncedEventRecord>,
    calls: AtomicUsize,
}

impl FakeSynced {
    pub fn always(records: Vec<SyncedEventRecord>) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            repeat: records,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn scripted(responses: Vec<ClientResult<Vec<SyncedEventRecord>>>) -> Self {
        Self {
            scripted: Mutex::new(responses.into()),
            repeat: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SyncedEventSource for FakeSynced {
    async fn list_synced_events(&self) -> ClientResult<Vec<SyncedEventRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.scripted.lock().expect("scripted queue lock").pop_front();
        match next {
            Some(response) => response,
            None => Ok(self.repeat.clone()),
        }
    }
}
