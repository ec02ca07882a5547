//! The two read-only queries the engine consumes.

use gnomon_calendar::records::{PostRecord, SyncedEventRecord};

use crate::error::ClientResult;

/// Label for diagnostics and cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    Posts,
    SyncedEvents,
}

impl EventSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::SyncedEvents => "synced_events",
        }
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetches recent content posts.
pub trait PostSource {
    /// ## Errors
    /// Returns an error on transport or decode failure.
    fn list_posts(&self, limit: u32) -> impl Future<Output = ClientResult<Vec<PostRecord>>>;
}

/// Fetches externally synced calendar events.
pub trait SyncedEventSource {
    /// ## Errors
    /// Returns an error on transport or decode failure.
    fn list_synced_events(&self) -> impl Future<Output = ClientResult<Vec<SyncedEventRecord>>>;
}

// Shared handles delegate, so one client can serve several owners.

impl<S: PostSource> PostSource for std::sync::Arc<S> {
    fn list_posts(&self, limit: u32) -> impl Future<Output = ClientResult<Vec<PostRecord>>> {
        self.as_ref().list_posts(limit)
    }
}

impl<S: SyncedEventSource> SyncedEventSource for std::sync::Arc<S> {
    fn list_synced_events(&self) -> impl Future<Output = ClientResult<Vec<SyncedEventRecord>>> {
        self.as_ref().list_synced_events()
    }
}
