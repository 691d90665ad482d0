// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::watch;

use crate::localdb::events::Events;
use crate::store::EventStore;
use crate::{Error, Event, LiveQuery};

/// Handle to the local sqlite database.
///
/// Cloning is cheap; clones share the connection pool and the mutation
/// generation counter, so a live query created from any clone observes
/// mutations made through every other.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,
    generations: watch::Sender<u64>,
    events: Events,
}

impl LocalDb {
    /// Opens a sqlite database under `state_dir`.
    /// If `state_dir` is `None`, it opens an in-memory database.
    pub async fn open(state_dir: Option<&Path>) -> Result<Self, Error> {
        const NAME: &str = "minical.db";

        let pool = match state_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "connecting to SQLite database");
                let options = SqliteConnectOptions::new()
                    .filename(dir.join(NAME))
                    .create_if_missing(true);
                SqlitePoolOptions::new().connect_with(options).await?
            }
            None => {
                tracing::info!("connecting to in-memory SQLite database");
                // A :memory: database exists per connection; the pool must
                // hold exactly one and never recycle it.
                let options = SqliteConnectOptions::new().in_memory(true);
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            }
        };

        tracing::debug!("ensuring tables in the database");
        sqlx::query(Events::SQL_CREATE_TABLE).execute(&pool).await?;
        sqlx::query(Events::SQL_CREATE_INDEX).execute(&pool).await?;

        let events = Events::new(pool.clone());
        let (generations, _) = watch::channel(0);
        Ok(Self {
            pool,
            generations,
            events,
        })
    }

    pub(crate) fn events(&self) -> &Events {
        &self.events
    }

    /// Whether the store holds no events at all.
    pub(crate) async fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.events.count().await? == 0)
    }

    /// Wakes every live query; called after each completed mutation so a
    /// re-query always observes the write.
    fn bump_generation(&self) {
        self.generations.send_modify(|n| *n += 1);
    }

    pub async fn close(self) {
        tracing::debug!("closing database connection");
        self.pool.close().await;
    }
}

#[async_trait]
impl EventStore for LocalDb {
    fn events_on_date(&self, date: NaiveDate) -> LiveQuery<Vec<Event>> {
        let events = self.events.clone();
        LiveQuery::spawn(self.generations.subscribe(), move || {
            let events = events.clone();
            async move { events.list_on_date(date).await.map_err(Error::from) }
        })
    }

    fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> LiveQuery<Vec<Event>> {
        let events = self.events.clone();
        LiveQuery::spawn(self.generations.subscribe(), move || {
            let events = events.clone();
            async move { events.list_in_range(start, end).await.map_err(Error::from) }
        })
    }

    fn dates_with_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> LiveQuery<BTreeSet<NaiveDate>> {
        let events = self.events.clone();
        LiveQuery::spawn(self.generations.subscribe(), move || {
            let events = events.clone();
            async move { events.dates_in_range(start, end).await.map_err(Error::from) }
        })
    }

    async fn get(&self, id: i64) -> Result<Event, Error> {
        self.events.get(id).await?.ok_or(Error::NotFound(id))
    }

    async fn insert(&self, event: &Event) -> Result<i64, Error> {
        let id = self.events.insert(event).await?;
        tracing::debug!(id, date = %event.date, "event inserted");
        self.bump_generation();
        Ok(id)
    }

    async fn update(&self, event: &Event) -> Result<(), Error> {
        let affected = self.events.update(event).await?;
        if affected == 0 {
            return Err(Error::NotFound(event.id));
        }
        self.bump_generation();
        Ok(())
    }

    async fn delete(&self, event: &Event) -> Result<(), Error> {
        let removed = self.events.delete(event.id).await?;
        tracing::debug!(id = event.id, removed, "event deleted");
        self.bump_generation();
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.events.delete_all().await?;
        self.bump_generation();
        Ok(())
    }
}
