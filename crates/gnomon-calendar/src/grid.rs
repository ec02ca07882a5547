//! Fixed 42-cell month grid, week starting Monday.

use chrono::{Datelike, Days, NaiveDate};

use crate::month::YearMonth;

/// 6 weeks of 7 days, rendered as a fixed layout.
pub const GRID_CELLS: usize = 42;

/// One grid cell. Derived per render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing fill days borrowed from adjacent months.
    pub is_current_month: bool,
}

/// ## Summary
/// Builds the 42-cell grid for a month: the last N days of the previous
/// month (N = the month's Monday-indexed starting weekday), every day of
/// the month itself, then days of the next month up to exactly 42 cells.
#[must_use]
pub fn month_grid(month: YearMonth) -> Vec<CalendarDay> {
    let first = month.first_day();
    // Monday = 0 … Sunday = 6, the (sourceWeekday + 6) mod 7 re-index
    let leading = first.weekday().num_days_from_monday();

    let mut cursor = first
        .checked_sub_days(Days::new(u64::from(leading)))
        .unwrap_or(first);
    let mut cells = Vec::with_capacity(GRID_CELLS);
    while cells.len() < GRID_CELLS {
        cells.push(CalendarDay {
            date: cursor,
            is_current_month: month.contains(cursor),
        });
        cursor = cursor.succ_opt().unwrap_or(cursor);
    }
    cells
}
