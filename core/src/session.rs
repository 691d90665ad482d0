// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::datetime::Month;
use crate::store::EventStore;
use crate::{Error, Event};

/// Everything the calendar screen renders, derived from the control inputs
/// and the store-observed queries. Recomputed on change, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub selected_date: NaiveDate,

    /// The month shown in the grid, independent of the selection.
    pub visible_month: Month,

    /// Events on `selected_date`, ascending by start time.
    pub events: Vec<Event>,

    /// Dates within `visible_month` holding at least one event.
    pub dates_with_events: BTreeSet<NaiveDate>,

    /// True from a (re)subscription until the first emission lands.
    pub is_loading: bool,

    /// The latest query failure, cleared by the next successful emission.
    pub error: Option<String>,
}

impl ViewState {
    fn initial(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            visible_month: Month::containing(today),
            events: Vec::new(),
            dates_with_events: BTreeSet::new(),
            is_loading: true,
            error: None,
        }
    }
}

/// Reactive view-state aggregator for one calendar screen session.
///
/// Two control inputs (selected date, visible month) are combined with the
/// store's live queries into [`ViewState`] snapshots published over a watch
/// channel. Changing an input drops the superseded live query before
/// starting the next one, so a slow result for a stale input can never
/// overwrite state derived from a newer one (switch-latest).
///
/// One session per active screen; the session is the single writer of its
/// published state.
pub struct CalendarSession {
    store: Arc<dyn EventStore>,
    selected_date: watch::Sender<NaiveDate>,
    visible_month: watch::Sender<Month>,
    state: watch::Receiver<ViewState>,
    worker: JoinHandle<()>,
}

impl CalendarSession {
    /// Spawns the aggregation worker. `today` seeds both control inputs:
    /// the selection starts on today and the grid on today's month.
    pub fn spawn(store: Arc<dyn EventStore>, today: NaiveDate) -> Self {
        let (selected_date, selected_rx) = watch::channel(today);
        let (visible_month, month_rx) = watch::channel(Month::containing(today));
        let (state_tx, state) = watch::channel(ViewState::initial(today));
        let worker = tokio::spawn(run(store.clone(), selected_rx, month_rx, state_tx));
        Self {
            store,
            selected_date,
            visible_month,
            state,
            worker,
        }
    }

    /// A receiver over the published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    /// The latest published snapshot.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Moves the selection; the visible month stays where it is.
    pub fn select_date(&self, date: NaiveDate) {
        self.selected_date.send_replace(date);
    }

    /// Pages the grid one month forward.
    pub fn next_month(&self) {
        self.visible_month.send_modify(|month| *month = month.next());
    }

    /// Pages the grid one month back.
    pub fn previous_month(&self) {
        self.visible_month.send_modify(|month| *month = month.prev());
    }

    /// Validates and persists a new event, returning its assigned id.
    ///
    /// The published state is not touched here; it catches up through the
    /// store's change notification.
    pub async fn create_event(&self, event: &Event) -> Result<i64, Error> {
        event.validate()?;
        self.store.insert(event).await
    }

    /// Deletes an event. Failures surface to the caller.
    pub async fn delete_event(&self, event: &Event) -> Result<(), Error> {
        self.store.delete(event).await
    }
}

impl Drop for CalendarSession {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

async fn run(
    store: Arc<dyn EventStore>,
    mut selected_date: watch::Receiver<NaiveDate>,
    mut visible_month: watch::Receiver<Month>,
    state: watch::Sender<ViewState>,
) {
    let mut events_query = store.events_on_date(*selected_date.borrow_and_update());
    let month = *visible_month.borrow_and_update();
    let mut dates_query = store.dates_with_events(month.first_day(), month.last_day());

    loop {
        tokio::select! {
            changed = selected_date.changed() => {
                if changed.is_err() {
                    break;
                }
                let date = *selected_date.borrow_and_update();
                tracing::debug!(%date, "selection changed, resubscribing");
                events_query = store.events_on_date(date);
                state.send_modify(|s| {
                    s.selected_date = date;
                    s.is_loading = true;
                });
            }
            changed = visible_month.changed() => {
                if changed.is_err() {
                    break;
                }
                let month = *visible_month.borrow_and_update();
                tracing::debug!(%month, "visible month changed, resubscribing");
                dates_query = store.dates_with_events(month.first_day(), month.last_day());
                state.send_modify(|s| {
                    s.visible_month = month;
                    s.is_loading = true;
                });
            }
            emission = events_query.next() => {
                let Some(result) = emission else { break };
                apply(&state, result, |s, events| s.events = events);
            }
            emission = dates_query.next() => {
                let Some(result) = emission else { break };
                apply(&state, result, |s, dates| s.dates_with_events = dates);
            }
        }
    }
    tracing::debug!("store went away, session worker stopping");
}

fn apply<T>(
    state: &watch::Sender<ViewState>,
    result: Result<T, Error>,
    assign: impl FnOnce(&mut ViewState, T),
) {
    state.send_modify(|s| {
        s.is_loading = false;
        match result {
            Ok(value) => {
                assign(s, value);
                s.error = None;
            }
            Err(e) => s.error = Some(e.to_string()),
        }
    });
}
