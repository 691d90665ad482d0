// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::Event;
use crate::datetime::{decode_date, decode_time, encode_date, encode_time};
use crate::event::UNSAVED_ID;

/// SQL access to the `events` table.
#[derive(Debug, Clone)]
pub(crate) struct Events {
    pool: SqlitePool,
}

impl Events {
    pub(crate) const SQL_CREATE_TABLE: &'static str = "\
CREATE TABLE IF NOT EXISTS events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    start_time  INTEGER NOT NULL,
    end_time    INTEGER NOT NULL,
    date        INTEGER NOT NULL,
    color       INTEGER NOT NULL DEFAULT 0xFF6A5AE0
);
";

    pub(crate) const SQL_CREATE_INDEX: &'static str =
        "CREATE INDEX IF NOT EXISTS idx_events_date ON events (date);";

    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the event, assigning a fresh id when `event.id` is the
    /// unsaved sentinel and replacing any record with the same id otherwise.
    pub(crate) async fn insert(&self, event: &Event) -> Result<i64, sqlx::Error> {
        const SQL_FRESH: &str = "\
INSERT INTO events (title, description, start_time, end_time, date, color)
VALUES (?, ?, ?, ?, ?, ?);
";
        const SQL_REPLACE: &str = "\
INSERT OR REPLACE INTO events (id, title, description, start_time, end_time, date, color)
VALUES (?, ?, ?, ?, ?, ?, ?);
";

        if event.id == UNSAVED_ID {
            let result = sqlx::query(SQL_FRESH)
                .bind(&event.title)
                .bind(&event.description)
                .bind(encode_time(event.start_time))
                .bind(encode_time(event.end_time))
                .bind(encode_date(event.date))
                .bind(i64::from(event.color))
                .execute(&self.pool)
                .await?;
            Ok(result.last_insert_rowid())
        } else {
            sqlx::query(SQL_REPLACE)
                .bind(event.id)
                .bind(&event.title)
                .bind(&event.description)
                .bind(encode_time(event.start_time))
                .bind(encode_time(event.end_time))
                .bind(encode_date(event.date))
                .bind(i64::from(event.color))
                .execute(&self.pool)
                .await?;
            Ok(event.id)
        }
    }

    /// Replaces the record matching `event.id`; the caller decides what a
    /// zero row count means.
    pub(crate) async fn update(&self, event: &Event) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
UPDATE events
SET title = ?, description = ?, start_time = ?, end_time = ?, date = ?, color = ?
WHERE id = ?;
";

        let result = sqlx::query(SQL)
            .bind(&event.title)
            .bind(&event.description)
            .bind(encode_time(event.start_time))
            .bind(encode_time(event.end_time))
            .bind(encode_date(event.date))
            .bind(i64::from(event.color))
            .bind(event.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub(crate) async fn get(&self, id: i64) -> Result<Option<Event>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, title, description, start_time, end_time, date, color
FROM events
WHERE id = ?;
";

        let record: Option<EventRecord> = sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        record.map(EventRecord::into_event).transpose()
    }

    pub(crate) async fn list_on_date(&self, date: NaiveDate) -> Result<Vec<Event>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, title, description, start_time, end_time, date, color
FROM events
WHERE date = ?
ORDER BY start_time ASC, id ASC;
";

        let records: Vec<EventRecord> = sqlx::query_as(SQL)
            .bind(encode_date(date))
            .fetch_all(&self.pool)
            .await?;
        records.into_iter().map(EventRecord::into_event).collect()
    }

    pub(crate) async fn list_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, title, description, start_time, end_time, date, color
FROM events
WHERE date BETWEEN ? AND ?
ORDER BY date ASC, start_time ASC, id ASC;
";

        let records: Vec<EventRecord> = sqlx::query_as(SQL)
            .bind(encode_date(start))
            .bind(encode_date(end))
            .fetch_all(&self.pool)
            .await?;
        records.into_iter().map(EventRecord::into_event).collect()
    }

    pub(crate) async fn dates_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeSet<NaiveDate>, sqlx::Error> {
        const SQL: &str = "SELECT DISTINCT date FROM events WHERE date BETWEEN ? AND ?;";

        let rows: Vec<(i64,)> = sqlx::query_as(SQL)
            .bind(encode_date(start))
            .bind(encode_date(end))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|(days,)| decode_date(days).ok_or_else(|| column_decode("date")))
            .collect()
    }

    /// Removes the record with `id`; returns the number of rows removed.
    pub(crate) async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM events WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub(crate) async fn delete_all(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM events;").execute(&self.pool).await?;
        Ok(())
    }

    pub(crate) async fn count(&self) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events;")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

/// Raw row shape of the `events` table. Dates are epoch-days, times are
/// milliseconds since local midnight, the color is ARGB in the low 32 bits.
#[derive(Debug, sqlx::FromRow)]
struct EventRecord {
    id: i64,
    title: String,
    description: String,
    start_time: i64,
    end_time: i64,
    date: i64,
    color: i64,
}

impl EventRecord {
    fn into_event(self) -> Result<Event, sqlx::Error> {
        Ok(Event {
            id: self.id,
            title: self.title,
            description: self.description,
            start_time: decode_time(self.start_time)
                .ok_or_else(|| column_decode("start_time"))?,
            end_time: decode_time(self.end_time).ok_or_else(|| column_decode("end_time"))?,
            date: decode_date(self.date).ok_or_else(|| column_decode("date"))?,
            color: self.color as u32,
        })
    }
}

fn column_decode(index: &str) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: "stored value out of range".into(),
    }
}
