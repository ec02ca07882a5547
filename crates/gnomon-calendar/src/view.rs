//! View modes and the date windows they select.

use chrono::{DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use gnomon_core::error::CoreError;

use crate::event::CalendarEvent;
use crate::month::YearMonth;

/// Last representable instant of a local day, millisecond precision.
const DAY_END_TIME: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(t) => t,
    None => panic!("23:59:59.999 is a valid time"),
};

/// Which slice of the unified list the side panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Today,
    Week,
    #[default]
    Month,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(CoreError::InvalidInput(format!("unknown view mode {other:?}"))),
        }
    }
}

/// Inclusive UTC instant range selected by a view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ViewWindow {
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// ## Summary
/// Computes the window a view mode selects. Today and Week anchor to the
/// real current instant; Month anchors to the currently displayed month.
/// That asymmetry is deliberate: browsing to a future month must not move
/// the Today/Week tabs off the actual present.
#[must_use]
pub fn view_window(mode: ViewMode, now: DateTime<Utc>, tz: Tz, displayed: YearMonth) -> ViewWindow {
    let today = now.with_timezone(&tz).date_naive();
    match mode {
        ViewMode::Today => window_over(today, today, tz),
        ViewMode::Week => {
            let monday = today
                .checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))
                .unwrap_or(today);
            let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
            window_over(monday, sunday, tz)
        }
        ViewMode::Month => window_over(displayed.first_day(), displayed.last_day(), tz),
    }
}

/// Events whose start lies in the window, ascending by start.
/// Ties keep their list order (stable sort).
#[must_use]
pub fn events_in_window<'e>(
    events: impl IntoIterator<Item = &'e CalendarEvent>,
    window: ViewWindow,
) -> Vec<&'e CalendarEvent> {
    let mut hits: Vec<_> = events
        .into_iter()
        .filter(|event| window.contains(event.start))
        .collect();
    hits.sort_by_key(|event| event.start);
    hits
}

fn window_over(first: NaiveDate, last: NaiveDate, tz: Tz) -> ViewWindow {
    ViewWindow {
        start: resolve_local(first.and_time(NaiveTime::MIN), tz),
        end: resolve_local(last.and_time(DAY_END_TIME), tz),
    }
}

/// Maps a local wall-clock datetime to UTC, tolerating DST transitions:
/// folds take the earliest mapping, gaps step forward until a valid
/// wall-clock time exists.
fn resolve_local(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    let mut candidate = local;
    // DST gaps are at most a couple of hours; probe in 15-minute steps
    for _ in 0..12 {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt.to_utc(),
            LocalResult::Ambiguous(earliest, _) => return earliest.to_utc(),
            LocalResult::None => {
                candidate += TimeDelta::minutes(15);
            }
        }
    }
    local.and_utc()
}
