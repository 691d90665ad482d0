// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Weekday};
use tokio::fs;

use crate::localdb::LocalDb;
use crate::session::CalendarSession;
use crate::store::EventStore;
use crate::{Config, Error, Event, LiveQuery, sample};

/// The calendar application core.
///
/// Owns the database handle and hands out screen sessions. Construct one at
/// process start and pass it around explicitly; there is no ambient global.
#[derive(Debug, Clone)]
pub struct Minical {
    now: DateTime<Local>,
    config: Config,
    db: LocalDb,
}

impl Minical {
    /// Creates a new instance with the given configuration.
    pub async fn new(mut config: Config) -> Result<Self, Error> {
        let now = Local::now();

        config.normalize()?;
        if let Some(dir) = &config.state_dir {
            tracing::debug!(path = %dir.display(), "ensuring state directory exists");
            fs::create_dir_all(dir).await?;
        }

        let db = LocalDb::open(config.state_dir.as_deref()).await?;

        if config.seed_sample_data && db.is_empty().await? {
            tracing::debug!("seeding demo events into the empty store");
            sample::seed(&db, now.date_naive()).await?;
        }

        Ok(Self { now, config, db })
    }

    /// The current time as captured at construction (or the last refresh).
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Refresh the captured time to now.
    pub fn refresh_now(&mut self) {
        self.now = Local::now();
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// First day of the week from configuration, for the grid functions.
    pub fn first_day_of_week(&self) -> Weekday {
        self.config.first_day_of_week
    }

    /// Spawns the view-state session for one calendar screen.
    pub fn session(&self) -> CalendarSession {
        CalendarSession::spawn(Arc::new(self.db.clone()), self.today())
    }

    /// Validates and persists a new event, returning its assigned id.
    pub async fn create_event(&self, event: &Event) -> Result<i64, Error> {
        event.validate()?;
        self.db.insert(event).await
    }

    /// Point lookup by id.
    pub async fn get_event(&self, id: i64) -> Result<Event, Error> {
        self.db.get(id).await
    }

    /// Replaces the stored event matching `event.id`.
    pub async fn update_event(&self, event: &Event) -> Result<(), Error> {
        self.db.update(event).await
    }

    /// Deletes an event; deleting an absent record is not an error.
    pub async fn delete_event(&self, event: &Event) -> Result<(), Error> {
        self.db.delete(event).await
    }

    /// Clears the store.
    pub async fn delete_all_events(&self) -> Result<(), Error> {
        self.db.delete_all().await
    }

    /// Live query over the events on `date`.
    pub fn events_on_date(&self, date: NaiveDate) -> LiveQuery<Vec<Event>> {
        self.db.events_on_date(date)
    }

    /// Live query over the inclusive date range.
    pub fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> LiveQuery<Vec<Event>> {
        self.db.events_in_range(start, end)
    }

    /// Closes the instance, shutting down the database pool. Live queries
    /// and sessions observing it wind down on their own.
    pub async fn close(self) {
        self.db.close().await;
    }
}
