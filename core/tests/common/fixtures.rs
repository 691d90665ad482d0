// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime, Weekday};
use minical_core::{Config, Event};
use tempfile::TempDir;

/// A state directory under a temp base, cleaned up on drop.
pub struct TestDirs {
    pub state_dir: PathBuf,
    _base: TempDir,
}

impl TestDirs {
    pub fn new() -> Self {
        let base = tempfile::tempdir().expect("Failed to create temp dir");
        let state_dir = base.path().join("state");
        Self {
            state_dir,
            _base: base,
        }
    }
}

/// A config pointing at the given state directory, with seeding off.
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        first_day_of_week: Weekday::Mon,
        seed_sample_data: false,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

/// An unsaved event with the given title, day and time span.
pub fn timed_event(title: &str, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
    Event::new(title, date, at(start.0, start.1), at(end.0, end.1))
}
