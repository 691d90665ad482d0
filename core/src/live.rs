// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::Error;

/// An observable query handle.
///
/// Emits the current result once on subscription and again after every
/// mutation that may affect it. A failed fetch is emitted as `Err` and the
/// subscription stays alive; only the store going away ends the stream.
///
/// Dropping the handle cancels the in-flight query. Re-subscribing on a
/// control change therefore gives switch-latest behavior for free: the
/// superseded query can never deliver again.
#[derive(Debug)]
pub struct LiveQuery<T> {
    results: mpsc::Receiver<Result<T, Error>>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> LiveQuery<T> {
    /// Spawns the fetch loop on the ambient tokio runtime.
    ///
    /// `generations` is the store's mutation counter; every observed bump
    /// triggers a re-fetch. Bumps are coalesced while a result is pending,
    /// the subscriber only ever sees the freshest state. Store
    /// implementations build their observable queries out of this.
    pub fn spawn<F, Fut>(mut generations: watch::Receiver<u64>, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, Error>> + Send + 'static,
    {
        let (tx, results) = mpsc::channel(1);
        let task = tokio::spawn(async move {
            loop {
                let result = fetch().await;
                if tx.send(result).await.is_err() {
                    // Subscriber dropped.
                    break;
                }
                if generations.changed().await.is_err() {
                    // Store dropped.
                    break;
                }
            }
        });
        Self { results, task }
    }

    /// Waits for the next emission. `None` once the store has gone away and
    /// all pending results are drained.
    pub async fn next(&mut self) -> Option<Result<T, Error>> {
        self.results.recv().await
    }
}

impl<T> Drop for LiveQuery<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
