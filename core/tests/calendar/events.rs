// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

//! Event CRUD tests through the `Minical` facade.

use minical_core::{Config, Error, Minical, UNSAVED_ID, ValidationError};

use crate::common::{TestDirs, date, test_config, timed_event};

async fn open(dirs: &TestDirs) -> Minical {
    Minical::new(test_config(&dirs.state_dir))
        .await
        .expect("Failed to open minical")
}

#[tokio::test]
async fn create_and_get_round_trips_every_field() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let event = timed_event("Standup", date(2024, 6, 3), (9, 0), (9, 15))
        .with_description("Daily sync")
        .with_color(0xFF4E_CDC4);
    let id = minical.create_event(&event).await.unwrap();
    assert_ne!(id, UNSAVED_ID);

    let stored = minical.get_event(id).await.unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.title, event.title);
    assert_eq!(stored.description, event.description);
    assert_eq!(stored.start_time, event.start_time);
    assert_eq!(stored.end_time, event.end_time);
    assert_eq!(stored.date, event.date);
    assert_eq!(stored.color, event.color);
}

#[tokio::test]
async fn events_on_date_returns_only_that_day() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let standup = timed_event("Standup", date(2024, 6, 3), (9, 0), (9, 15));
    minical.create_event(&standup).await.unwrap();

    let mut on_the_day = minical.events_on_date(date(2024, 6, 3));
    let events = on_the_day.next().await.unwrap().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Standup");

    let mut day_after = minical.events_on_date(date(2024, 6, 4));
    assert!(day_after.next().await.unwrap().unwrap().is_empty());
}

#[tokio::test]
async fn events_in_range_is_inclusive() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let (d1, d2, d3) = (date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3));
    for (title, day) in [("A", d1), ("B", d2), ("C", d3)] {
        minical
            .create_event(&timed_event(title, day, (9, 0), (10, 0)))
            .await
            .unwrap();
    }

    let mut range = minical.events_in_range(d1, d2);
    let events = range.next().await.unwrap().unwrap();
    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["A", "B"]);
}

#[tokio::test]
async fn create_event_rejects_blank_title() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let event = timed_event("   ", date(2024, 6, 3), (9, 0), (10, 0));
    let result = minical.create_event(&event).await;
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::EmptyTitle))
    ));
}

#[tokio::test]
async fn create_event_rejects_end_before_start() {
    // The permissive behavior of the source is deliberately tightened: a
    // negative time span never reaches storage.
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let event = timed_event("Backwards", date(2024, 6, 3), (10, 0), (9, 0));
    let result = minical.create_event(&event).await;
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::EndBeforeStart))
    ));
}

#[tokio::test]
async fn create_with_existing_id_replaces_the_record() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let mut event = timed_event("Original", date(2024, 6, 3), (9, 0), (10, 0));
    event.id = minical.create_event(&event).await.unwrap();

    event.title = "Replaced".to_string();
    let id = minical.create_event(&event).await.unwrap();
    assert_eq!(id, event.id);

    let stored = minical.get_event(id).await.unwrap();
    assert_eq!(stored.title, "Replaced");
}

#[tokio::test]
async fn update_replaces_a_stored_event() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let mut event = timed_event("Standup", date(2024, 6, 3), (9, 0), (9, 15));
    event.id = minical.create_event(&event).await.unwrap();

    event.title = "Retro".to_string();
    event.date = date(2024, 6, 4);
    minical.update_event(&event).await.unwrap();

    let stored = minical.get_event(event.id).await.unwrap();
    assert_eq!(stored.title, "Retro");
    assert_eq!(stored.date, date(2024, 6, 4));
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    // Documented decision: no silent no-op on a missing id.
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let mut event = timed_event("Ghost", date(2024, 6, 3), (9, 0), (10, 0));
    event.id = 999;
    assert!(matches!(
        minical.update_event(&event).await,
        Err(Error::NotFound(999))
    ));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    let mut event = timed_event("Standup", date(2024, 6, 3), (9, 0), (9, 15));
    event.id = minical.create_event(&event).await.unwrap();

    minical.delete_event(&event).await.unwrap();
    assert!(matches!(
        minical.get_event(event.id).await,
        Err(Error::NotFound(_))
    ));

    // Deleting again is fine and changes nothing.
    minical.delete_event(&event).await.unwrap();
}

#[tokio::test]
async fn delete_all_clears_the_store() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;

    for day in 1..=3 {
        minical
            .create_event(&timed_event("E", date(2024, 6, day), (9, 0), (10, 0)))
            .await
            .unwrap();
    }
    minical.delete_all_events().await.unwrap();

    let mut range = minical.events_in_range(date(2024, 6, 1), date(2024, 6, 30));
    assert!(range.next().await.unwrap().unwrap().is_empty());
}

#[tokio::test]
async fn events_persist_across_reopen() {
    let dirs = TestDirs::new();

    let minical = open(&dirs).await;
    let id = minical
        .create_event(&timed_event("Standup", date(2024, 6, 3), (9, 0), (9, 15)))
        .await
        .unwrap();
    minical.close().await;

    let reopened = open(&dirs).await;
    let stored = reopened.get_event(id).await.unwrap();
    assert_eq!(stored.title, "Standup");
}

#[tokio::test]
async fn seeding_fills_an_empty_store_once() {
    let dirs = TestDirs::new();
    let config = Config {
        seed_sample_data: true,
        ..test_config(&dirs.state_dir)
    };

    let minical = Minical::new(config.clone()).await.unwrap();
    let today = minical.today();
    let mut range = minical.events_in_range(today, today + chrono::Duration::days(8));
    assert_eq!(range.next().await.unwrap().unwrap().len(), 6);
    drop(range);
    minical.close().await;

    // Reopening with the flag still set must not duplicate the schedule.
    let reopened = Minical::new(config).await.unwrap();
    let mut range = reopened.events_in_range(today, today + chrono::Duration::days(8));
    assert_eq!(range.next().await.unwrap().unwrap().len(), 6);
}
