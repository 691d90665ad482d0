// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// A calendar month (year plus month-of-year), the unit the grid pages by.
///
/// Independent of any selected date: paging the visible month never moves
/// the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month. `month` is 1-based; out-of-range values yield `None`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-based month-of-year.
    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is validated on construction")
    }

    pub fn last_day(self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .expect("the day before a month's first day must exist")
    }

    /// The given day-of-month, or `None` when the month is shorter.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Number of days in the month.
    pub fn days(self) -> u32 {
        self.last_day().day()
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// NOTE: The encodings below are used for storing in the database, so they
/// must be stable across runs: dates as epoch-day, times of day as
/// milliseconds since local midnight.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("1970-01-01 must exist")
}

pub(crate) fn encode_date(date: NaiveDate) -> i64 {
    (date - epoch()).num_days()
}

pub(crate) fn decode_date(days: i64) -> Option<NaiveDate> {
    epoch().checked_add_signed(Duration::days(days))
}

pub(crate) fn encode_time(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * 1000
}

pub(crate) fn decode_time(millis: i64) -> Option<NaiveTime> {
    if !(0..86_400_000).contains(&millis) {
        return None;
    }
    NaiveTime::from_num_seconds_from_midnight_opt((millis / 1000) as u32, 0)
}
