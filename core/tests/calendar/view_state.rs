// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

//! View-state session tests against a real store: the published snapshot
//! must follow mutations and control-input changes on its own.

use std::time::Duration;

use minical_core::{Minical, ViewState};
use tokio::sync::watch;

use crate::common::{TestDirs, test_config, timed_event};

async fn open(dirs: &TestDirs) -> Minical {
    Minical::new(test_config(&dirs.state_dir))
        .await
        .expect("Failed to open minical")
}

async fn wait_for(
    rx: &mut watch::Receiver<ViewState>,
    pred: impl FnMut(&ViewState) -> bool,
) -> ViewState {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(pred))
        .await
        .expect("view state did not converge in time")
        .expect("session worker gone")
        .clone()
}

#[tokio::test]
async fn session_starts_on_today_with_an_empty_day() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;
    let session = minical.session();

    let mut rx = session.subscribe();
    let state = wait_for(&mut rx, |s| !s.is_loading).await;

    assert_eq!(state.selected_date, minical.today());
    assert!(state.events.is_empty());
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn created_event_shows_up_without_touching_the_session() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;
    let session = minical.session();
    let mut rx = session.subscribe();
    wait_for(&mut rx, |s| !s.is_loading).await;

    let today = minical.today();
    session
        .create_event(&timed_event("Standup", today, (9, 0), (9, 15)))
        .await
        .unwrap();

    let state = wait_for(&mut rx, |s| {
        !s.events.is_empty() && s.dates_with_events.contains(&today)
    })
    .await;
    assert_eq!(state.events[0].title, "Standup");
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn deleted_event_disappears_from_the_snapshot() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;
    let session = minical.session();
    let mut rx = session.subscribe();

    let today = minical.today();
    let mut event = timed_event("Standup", today, (9, 0), (9, 15));
    event.id = session.create_event(&event).await.unwrap();
    wait_for(&mut rx, |s| !s.events.is_empty()).await;

    session.delete_event(&event).await.unwrap();
    let state = wait_for(&mut rx, |s| {
        s.events.is_empty() && s.dates_with_events.is_empty()
    })
    .await;
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn day_events_stay_ordered_by_start_time() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;
    let session = minical.session();
    let mut rx = session.subscribe();

    let today = minical.today();
    session
        .create_event(&timed_event("Afternoon", today, (14, 0), (15, 0)))
        .await
        .unwrap();
    session
        .create_event(&timed_event("Morning", today, (9, 0), (10, 0)))
        .await
        .unwrap();

    let state = wait_for(&mut rx, |s| s.events.len() == 2).await;
    let titles: Vec<_> = state.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Morning", "Afternoon"]);
}

#[tokio::test]
async fn selecting_another_day_swaps_the_event_list() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;
    let session = minical.session();
    let mut rx = session.subscribe();

    let today = minical.today();
    let tomorrow = today.succ_opt().unwrap();
    session
        .create_event(&timed_event("Today", today, (9, 0), (10, 0)))
        .await
        .unwrap();
    session
        .create_event(&timed_event("Tomorrow", tomorrow, (11, 0), (12, 0)))
        .await
        .unwrap();
    wait_for(&mut rx, |s| !s.events.is_empty()).await;

    session.select_date(tomorrow);
    let state = wait_for(&mut rx, |s| {
        s.selected_date == tomorrow && s.events.iter().any(|e| e.title == "Tomorrow")
    })
    .await;

    assert_eq!(state.events.len(), 1);
    // The visible month still follows today, not the selection.
    assert!(state.visible_month.contains(today));
}

#[tokio::test]
async fn paging_months_tracks_the_date_index() {
    let dirs = TestDirs::new();
    let minical = open(&dirs).await;
    let session = minical.session();
    let mut rx = session.subscribe();
    wait_for(&mut rx, |s| !s.is_loading).await;

    let this_month = session.state().visible_month;
    let next_month_day = this_month.next().day(5).unwrap();
    session
        .create_event(&timed_event("Next month", next_month_day, (9, 0), (10, 0)))
        .await
        .unwrap();

    session.next_month();
    let state = wait_for(&mut rx, |s| {
        s.visible_month == this_month.next() && s.dates_with_events.contains(&next_month_day)
    })
    .await;
    // Paging never moves the selection.
    assert_eq!(state.selected_date, minical.today());

    session.previous_month();
    let state = wait_for(&mut rx, |s| {
        s.visible_month == this_month && !s.dates_with_events.contains(&next_month_day)
    })
    .await;
    assert_eq!(state.selected_date, minical.today());
}
