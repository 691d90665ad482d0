// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{Error, Event, LiveQuery};

/// Durable CRUD and query access to [`Event`] records, with push-on-change
/// observable queries.
///
/// Every mutation re-evaluates the live queries it may affect; at this data
/// scale a full re-query per mutation is the expected implementation.
///
/// The observable methods spawn their fetch loop, so they must be called
/// from within a tokio runtime.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Events on exactly `date`, ascending by start time, ties broken by id
    /// (insertion order).
    fn events_on_date(&self, date: NaiveDate) -> LiveQuery<Vec<Event>>;

    /// Events in the inclusive date range, ordered by `(date, start_time)`
    /// ascending.
    fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> LiveQuery<Vec<Event>>;

    /// Distinct dates in the inclusive range that hold at least one event.
    fn dates_with_events(&self, start: NaiveDate, end: NaiveDate)
    -> LiveQuery<BTreeSet<NaiveDate>>;

    /// Point lookup by id. [`Error::NotFound`] when no record matches.
    async fn get(&self, id: i64) -> Result<Event, Error>;

    /// Persists `event`. A fresh id is assigned when `event.id` is
    /// [`crate::UNSAVED_ID`]; otherwise any record sharing that id is
    /// replaced. Returns the id the event is stored under.
    async fn insert(&self, event: &Event) -> Result<i64, Error>;

    /// Replaces the record matching `event.id`.
    ///
    /// Returns [`Error::NotFound`] when no such record exists. This is a
    /// deliberate departure from silently ignoring the write.
    async fn update(&self, event: &Event) -> Result<(), Error>;

    /// Removes the record matching `event.id`, if present. Deleting an
    /// absent record is not an error.
    async fn delete(&self, event: &Event) -> Result<(), Error>;

    /// Clears all records.
    async fn delete_all(&self) -> Result<(), Error>;
}
