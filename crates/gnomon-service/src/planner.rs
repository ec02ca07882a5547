//! The calendar planner: single-owner state holder the presentation
//! layer drives.
//!
//! Loads are async and suspend without blocking; there is no locking
//! anywhere here. Overlapping split-phase loads are fenced by a
//! monotonic load generation, so a late response from a superseded load
//! is discarded instead of overwriting newer state.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use gnomon_calendar::aggregate::{EventSet, post_events, synced_events};
use gnomon_calendar::event::{CalendarEvent, EventColor};
use gnomon_calendar::grid::{CalendarDay, month_grid};
use gnomon_calendar::month::YearMonth;
use gnomon_calendar::records::{PostRecord, SyncedEventRecord};
use gnomon_calendar::span;
use gnomon_calendar::view::{ViewMode, events_in_window, view_window};
use gnomon_client::error::ClientResult;
use gnomon_client::source::{EventSource, PostSource, SyncedEventSource};
use gnomon_core::config::Settings;

use crate::error::{ServiceError, ServiceResult};

/// Ticket for one load cycle, handed back by [`CalendarPlanner::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration(u64);

pub struct CalendarPlanner<P, S> {
    post_source: P,
    synced_source: S,
    set: EventSet,
    displayed: YearMonth,
    view: ViewMode,
    tz: Tz,
    post_limit: u32,
    generation: u64,
}

impl<P: PostSource, S: SyncedEventSource> CalendarPlanner<P, S> {
    /// Starts on the month containing the current instant, in Month view.
    #[must_use]
    pub fn new(post_source: P, synced_source: S, tz: Tz, post_limit: u32) -> Self {
        let displayed = YearMonth::containing(Utc::now().with_timezone(&tz).date_naive());
        Self {
            post_source,
            synced_source,
            set: EventSet::new(),
            displayed,
            view: ViewMode::default(),
            tz,
            post_limit,
            generation: 0,
        }
    }

    /// ## Summary
    /// Builds a planner from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the configured timezone is invalid.
    pub fn from_settings(post_source: P, synced_source: S, settings: &Settings) -> ServiceResult<Self> {
        let tz = settings
            .calendar
            .tz()
            .map_err(|e| ServiceError::InvalidConfiguration(e.to_string()))?;
        Ok(Self::new(
            post_source,
            synced_source,
            tz,
            settings.api.post_limit,
        ))
    }

    // Loads ----------------------------------------------------------------

    /// Fetches both sources concurrently and applies the results. A failed
    /// source contributes zero events; the calendar always renders.
    pub async fn refresh(&mut self) {
        let generation = self.begin_load();
        let (posts, synced) = futures::join!(
            self.post_source.list_posts(self.post_limit),
            self.synced_source.list_synced_events()
        );
        self.apply_posts(generation, posts);
        self.apply_synced(generation, synced);
    }

    /// Fetches and merges the post source only.
    pub async fn load_posts(&mut self) {
        let generation = self.begin_load();
        let result = self.post_source.list_posts(self.post_limit).await;
        self.apply_posts(generation, result);
    }

    /// Fetches and replaces the synced source only.
    pub async fn load_synced(&mut self) {
        let generation = self.begin_load();
        let result = self.synced_source.list_synced_events().await;
        self.apply_synced(generation, result);
    }

    /// Opens a load cycle and supersedes every earlier one.
    pub fn begin_load(&mut self) -> LoadGeneration {
        self.generation += 1;
        LoadGeneration(self.generation)
    }

    /// ## Summary
    /// Applies a post fetch outcome. Success merges additively and
    /// idempotently; failure keeps previously merged posts untouched.
    /// Returns false without touching state if the generation is stale.
    pub fn apply_posts(
        &mut self,
        generation: LoadGeneration,
        result: ClientResult<Vec<PostRecord>>,
    ) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(
                stale = generation.0,
                current = self.generation,
                source = %EventSource::Posts,
                "Discarding stale load response"
            );
            return false;
        }
        match result {
            Ok(records) => {
                let added = self.set.merge_posts(post_events(&records));
                tracing::debug!(fetched = records.len(), added, "Post events merged");
            }
            Err(error) => {
                tracing::warn!(%error, source = %EventSource::Posts, "Post load failed, contributing no events");
            }
        }
        true
    }

    /// Applies a synced-event fetch outcome at the current instant.
    pub fn apply_synced(
        &mut self,
        generation: LoadGeneration,
        result: ClientResult<Vec<SyncedEventRecord>>,
    ) -> bool {
        self.apply_synced_at(generation, result, Utc::now())
    }

    /// ## Summary
    /// Applies a synced-event fetch outcome. Success replaces the synced
    /// portion wholesale; failure clears it, preferring nothing over
    /// stale or partial data. Returns false without touching state if
    /// the generation is stale.
    pub fn apply_synced_at(
        &mut self,
        generation: LoadGeneration,
        result: ClientResult<Vec<SyncedEventRecord>>,
        now: DateTime<Utc>,
    ) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(
                stale = generation.0,
                current = self.generation,
                source = %EventSource::SyncedEvents,
                "Discarding stale load response"
            );
            return false;
        }
        match result {
            Ok(records) => {
                let events = synced_events(&records, now);
                tracing::debug!(fetched = records.len(), kept = events.len(), "Synced events replaced");
                self.set.replace_synced(events);
            }
            Err(error) => {
                tracing::warn!(%error, source = %EventSource::SyncedEvents, "Sync failed, clearing synced events");
                self.set.clear_synced();
            }
        }
        true
    }

    // Navigation -----------------------------------------------------------

    pub fn next_month(&mut self) {
        self.displayed = self.displayed.next();
    }

    pub fn prev_month(&mut self) {
        self.displayed = self.displayed.prev();
    }

    pub fn show_month(&mut self, month: YearMonth) {
        self.displayed = month;
    }

    /// Returns navigation to the month containing the current instant.
    pub fn show_current_month(&mut self) {
        self.displayed = YearMonth::containing(Utc::now().with_timezone(&self.tz).date_naive());
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    // Queries --------------------------------------------------------------

    #[must_use]
    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub fn tz(&self) -> Tz {
        self.tz
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.set.len()
    }

    pub fn events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.set.events()
    }

    /// The 42-cell grid for the displayed month.
    #[must_use]
    pub fn grid(&self) -> Vec<CalendarDay> {
        month_grid(self.displayed)
    }

    /// Events selected by the active view, anchored to the current instant.
    #[must_use]
    pub fn visible_events(&self) -> Vec<&CalendarEvent> {
        self.visible_events_at(Utc::now())
    }

    /// Clock-injected variant of [`Self::visible_events`].
    #[must_use]
    pub fn visible_events_at(&self, now: DateTime<Utc>) -> Vec<&CalendarEvent> {
        let window = view_window(self.view, now, self.tz, self.displayed);
        events_in_window(self.set.events(), window)
    }

    /// Every event touching the given date, in list order.
    #[must_use]
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.set
            .events()
            .filter(|event| span::occurs_on(event, date, self.tz))
            .collect()
    }

    /// The single color swatch for a day cell, if any event touches it.
    #[must_use]
    pub fn day_color(&self, date: NaiveDate) -> Option<EventColor> {
        span::day_color(self.set.events(), date, self.tz)
    }
}
