// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};

use crate::ValidationError;

/// Id of an event that has not been persisted yet. Storage assigns a fresh
/// unique id on insert when it sees this sentinel.
pub const UNSAVED_ID: i64 = 0;

/// Default event color, the theme purple.
pub const DEFAULT_COLOR: u32 = 0xFF6A_5AE0;

/// A titled, timed, single-day calendar entry.
///
/// `start_time` and `end_time` are times of day on `date`; overlapping
/// events on the same day are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Storage-assigned identifier, [`UNSAVED_ID`] until persisted.
    pub id: i64,

    /// Display title. Non-empty, enforced by [`Event::validate`].
    pub title: String,

    /// Free-form description, possibly empty.
    pub description: String,

    pub start_time: NaiveTime,

    pub end_time: NaiveTime,

    /// The day bucket the event belongs to; decides which day list and
    /// which grid cell it shows up under.
    pub date: NaiveDate,

    /// 32-bit ARGB display color, doubling as a category tag.
    pub color: u32,
}

impl Event {
    /// Creates an unsaved event with an empty description and the default
    /// color.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            description: String::new(),
            start_time,
            end_time,
            date,
            color: DEFAULT_COLOR,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Creation-path validation. Storage itself stays permissive and
    /// accepts whatever it is handed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.end_time < self.start_time {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok(())
    }
}
