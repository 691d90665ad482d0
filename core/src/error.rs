// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors surfaced by the storage layer and the application facade.
///
/// Every mutating operation returns its failure to the caller; nothing is
/// swallowed on the write path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The storage medium is unavailable, full, or corrupted.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// A lookup (or update) by id matched no record.
    ///
    /// Range and date queries that match nothing return an empty collection
    /// instead, never this error.
    #[error("event {0} not found")]
    NotFound(i64),

    /// Caller-side validation rejected the event before it reached storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be normalized.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Rejections raised on the event creation path, never by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title is empty or whitespace-only.
    #[error("event title must not be empty")]
    EmptyTitle,

    /// The event ends before it starts on the same day.
    #[error("event must not end before it starts")]
    EndBeforeStart,
}
