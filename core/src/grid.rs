// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

//! Pure month-grid computation.
//!
//! The grid is always 6 rows of 7 cells, padded with adjacent-month days so
//! that every cell carries a concrete date; "does this date belong to the
//! visible month" is a separate flag, not a blank cell.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::datetime::Month;

/// Number of cells in the rendered month grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// The dates to render for `month`, aligned so that the first cell falls on
/// `first_weekday`.
///
/// The result is exactly [`GRID_CELLS`] consecutive dates: the trailing days
/// of the previous month, every day of `month`, and enough leading days of
/// the next month to fill the grid.
pub fn month_grid(month: Month, first_weekday: Weekday) -> Vec<NaiveDate> {
    let first = month.first_day();
    let offset = i64::from(first.weekday().days_since(first_weekday));
    let start = first - Duration::days(offset);
    (0..GRID_CELLS as i64)
        .map(|i| start + Duration::days(i))
        .collect()
}

/// Weekday labels for the grid header, starting at `first_weekday`.
pub fn week_header(first_weekday: Weekday) -> [Weekday; 7] {
    let mut days = [first_weekday; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Whether `date` belongs to `month` (same year and month-of-year).
pub fn is_in_month(date: NaiveDate, month: Month) -> bool {
    month.contains(date)
}

/// Whether `date` is the current day. `today` is injected by the caller so
/// the wall clock stays out of this module.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Render-time state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_events: bool,
}

/// The 42 cells for `month` with their display flags resolved against the
/// current view state.
pub fn grid_cells(
    month: Month,
    first_weekday: Weekday,
    today: NaiveDate,
    selected: NaiveDate,
    dates_with_events: &BTreeSet<NaiveDate>,
) -> Vec<GridCell> {
    month_grid(month, first_weekday)
        .into_iter()
        .map(|date| GridCell {
            date,
            in_month: is_in_month(date, month),
            is_today: is_today(date, today),
            is_selected: date == selected,
            has_events: dates_with_events.contains(&date),
        })
        .collect()
}
