// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

//! Hand-crafted demo schedule, seeded into a fresh store so a first launch
//! has something to show.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::store::EventStore;
use crate::{Error, Event};

const PURPLE: u32 = 0xFF6A_5AE0;
const TEAL: u32 = 0xFF4E_CDC4;
const CORAL: u32 = 0xFFFF_6B6B;
const YELLOW: u32 = 0xFFFF_D93D;
const MINT: u32 = 0xFF95_E1D3;

/// The demo schedule, laid out relative to `today`.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    vec![
        Event::new("Design new UX flow for Michael", today, at(10, 0), at(13, 0))
            .with_description("Start from screen 16")
            .with_color(PURPLE),
        Event::new("Brainstorm with the team", today, at(14, 0), at(15, 0))
            .with_description("Define the problem or question that...")
            .with_color(TEAL),
        Event::new("Workout with Ella", today, at(19, 0), at(20, 0))
            .with_description("We will do the legs and back workout")
            .with_color(CORAL),
        Event::new("Team Meeting", today + Duration::days(2), at(9, 0), at(10, 0))
            .with_description("Monthly sync meeting")
            .with_color(YELLOW),
        Event::new("Lunch with Client", today + Duration::days(5), at(12, 30), at(14, 0))
            .with_description("Discuss project requirements")
            .with_color(MINT),
        Event::new("Code Review", today + Duration::days(8), at(15, 0), at(16, 30))
            .with_description("Review pending PRs")
            .with_color(PURPLE),
    ]
}

/// Inserts the demo schedule into `store`.
pub async fn seed<S>(store: &S, today: NaiveDate) -> Result<(), Error>
where
    S: EventStore + ?Sized,
{
    for event in sample_events(today) {
        store.insert(&event).await?;
    }
    Ok(())
}

fn at(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).expect("hand-written times are valid")
}
