//! Text and JSON rendering of the planner state.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Utc};
use gnomon_calendar::span;
use gnomon_client::source::{PostSource, SyncedEventSource};
use gnomon_service::planner::CalendarPlanner;
use tracing_unwrap::ResultExt;

const WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";

/// Renders the month grid and the agenda for the active view.
#[must_use]
pub fn render_calendar<P, S>(planner: &CalendarPlanner<P, S>, now: DateTime<Utc>) -> String
where
    P: PostSource,
    S: SyncedEventSource,
{
    let mut out = render_grid(planner);
    out.push('\n');
    out.push_str(&render_agenda(planner, now));
    out
}

/// The 6×7 day grid: fill days bracketed, days with events starred.
#[must_use]
pub fn render_grid<P, S>(planner: &CalendarPlanner<P, S>) -> String
where
    P: PostSource,
    S: SyncedEventSource,
{
    let mut out = String::new();
    writeln!(out, "{:^27}", planner.displayed().to_string()).unwrap_or_log();
    writeln!(out, "{WEEKDAY_HEADER}").unwrap_or_log();
    for week in planner.grid().chunks(7) {
        for day in week {
            let mark = if planner.events_on(day.date).is_empty() {
                ' '
            } else {
                '*'
            };
            if day.is_current_month {
                write!(out, " {:>2}{mark}", day.date.day()).unwrap_or_log();
            } else {
                write!(out, "({:>2})", day.date.day()).unwrap_or_log();
            }
        }
        out.push('\n');
    }
    out
}

/// The event list for the active view window, ascending by start.
#[must_use]
pub fn render_agenda<P, S>(planner: &CalendarPlanner<P, S>, now: DateTime<Utc>) -> String
where
    P: PostSource,
    S: SyncedEventSource,
{
    let tz = planner.tz();
    let visible = planner.visible_events_at(now);
    let mut out = String::new();
    writeln!(
        out,
        "{} view: {} event(s)",
        planner.view(),
        visible.len()
    )
    .unwrap_or_log();
    for event in visible {
        let start = event.start.with_timezone(&tz);
        let end = event.end.with_timezone(&tz);
        write!(
            out,
            "  {}  {} - {}  {}  {}",
            start.format("%Y-%m-%d"),
            start.format("%H:%M"),
            end.format("%H:%M"),
            event.title,
            event.color
        )
        .unwrap_or_log();
        if span::is_multi_day(event) {
            let days = (end.date_naive() - start.date_naive()).num_days() + 1;
            write!(out, "  [spans {days} days]").unwrap_or_log();
        }
        out.push('\n');
    }
    out
}

/// ## Summary
/// Serializes the visible events as pretty-printed JSON.
///
/// ## Errors
/// Returns an error if serialization fails.
pub fn render_json<P, S>(
    planner: &CalendarPlanner<P, S>,
    now: DateTime<Utc>,
) -> serde_json::Result<String>
where
    P: PostSource,
    S: SyncedEventSource,
{
    serde_json::to_string_pretty(&planner.visible_events_at(now))
}
