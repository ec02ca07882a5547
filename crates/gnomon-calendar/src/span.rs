//! Multi-day span classification and per-day color selection.

use chrono::{NaiveDate, TimeDelta};
use chrono_tz::Tz;

use crate::event::{CalendarEvent, EventColor};

/// Position of a grid-cell date within a multi-day event's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPosition {
    /// Degenerate equal-dates case; cannot occur under the >24h rule but
    /// is answered without error.
    Single,
    Start,
    Middle,
    End,
}

impl SpanPosition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl std::fmt::Display for SpanPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event is multi-day iff its duration strictly exceeds 24 hours.
/// Exactly 24h is single-day; so are non-positive durations.
#[must_use]
pub fn is_multi_day(event: &CalendarEvent) -> bool {
    event.duration() > TimeDelta::hours(24)
}

/// Whether the event touches the given date, by date-only comparison in the
/// anchor timezone. Inverted start/end pairs are tolerated by normalizing
/// the date order.
#[must_use]
pub fn occurs_on(event: &CalendarEvent, date: NaiveDate, tz: Tz) -> bool {
    let start = local_date(event, tz);
    let end = event.end.with_timezone(&tz).date_naive();
    start.min(end) <= date && date <= start.max(end)
}

/// ## Summary
/// Classifies where `date` sits within a multi-day event's span. Returns
/// `None` for single-day events and for dates outside the span.
#[must_use]
pub fn span_position(event: &CalendarEvent, date: NaiveDate, tz: Tz) -> Option<SpanPosition> {
    if !is_multi_day(event) || !occurs_on(event, date, tz) {
        return None;
    }
    let start = local_date(event, tz);
    let end = event.end.with_timezone(&tz).date_naive();
    Some(match (start == date, end == date) {
        (true, true) => SpanPosition::Single,
        (true, false) => SpanPosition::Start,
        (false, true) => SpanPosition::End,
        (false, false) => SpanPosition::Middle,
    })
}

/// ## Summary
/// Picks the single color swatch for a day cell. One event on the date
/// uses its color directly; several prefer the first multi-day event,
/// falling back to the first event in list order. A lossy display
/// simplification, not a data merge.
#[must_use]
pub fn day_color<'e>(
    events: impl IntoIterator<Item = &'e CalendarEvent>,
    date: NaiveDate,
    tz: Tz,
) -> Option<EventColor> {
    let on_date: Vec<&CalendarEvent> = events
        .into_iter()
        .filter(|event| occurs_on(event, date, tz))
        .collect();
    match on_date.as_slice() {
        [] => None,
        [only] => Some(only.color),
        several => {
            let chosen = several
                .iter()
                .find(|event| is_multi_day(event))
                .unwrap_or(&several[0]);
            Some(chosen.color)
        }
    }
}

fn local_date(event: &CalendarEvent, tz: Tz) -> NaiveDate {
    event.start.with_timezone(&tz).date_naive()
}
