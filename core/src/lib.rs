// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

//! minical core: sqlite-backed event storage with observable queries, the
//! month-grid algorithm, and the view-state aggregation behind a calendar
//! screen.

mod config;
mod datetime;
mod error;
mod event;
mod grid;
mod live;
mod localdb;
mod minical;
pub mod sample;
mod session;
mod store;

pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::Month;
pub use crate::error::{Error, ValidationError};
pub use crate::event::{DEFAULT_COLOR, Event, UNSAVED_ID};
pub use crate::grid::{
    GRID_CELLS, GridCell, grid_cells, is_in_month, is_today, month_grid, week_header,
};
pub use crate::live::LiveQuery;
pub use crate::localdb::LocalDb;
pub use crate::minical::Minical;
pub use crate::session::{CalendarSession, ViewState};
pub use crate::store::EventStore;
