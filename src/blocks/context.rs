// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Caller-supplied deadline and cancellation for block lookups

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

/// Stand-in deadline for timeouts too large to add to the current instant
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Deadline and cancellation signal passed down by the caller of the indexer
///
/// Every block lookup issued on behalf of the caller observes the context: a
/// lookup still pending when the deadline passes fails with
/// [`LookupError::TimedOut`](crate::LookupError::TimedOut), and one pending
/// when the caller cancels fails with
/// [`LookupError::Cancelled`](crate::LookupError::Cancelled). Either failure
/// aborts the batch.
///
/// The default context never expires and cannot be cancelled; the configured
/// per-chain lookup timeout still applies.
///
/// # Examples
///
/// ```rust,ignore
/// use transferscan::LookupContext;
/// use std::time::Duration;
///
/// let (ctx, cancel) = LookupContext::cancellable();
/// let ctx = ctx.with_timeout(Duration::from_secs(120));
///
/// let handle = tokio::spawn(async move { indexer.index_logs(chain, &logs, &ctx).await });
/// // ... on shutdown
/// cancel.cancel();
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookupContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

impl LookupContext {
    /// Context with no deadline and no cancellation
    pub fn new() -> Self {
        Self::default()
    }

    /// Context paired with a handle that cancels it
    pub fn cancellable() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            deadline: None,
            cancel: Some(rx),
        };
        (ctx, CancelHandle { tx })
    }

    /// Sets an absolute deadline
    ///
    /// An earlier deadline already on the context is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Sets a deadline `timeout` from now
    ///
    /// A timeout too large to represent as an instant (e.g. `Duration::MAX`)
    /// leaves the context without a deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// The absolute deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true once the paired [`CancelHandle`] has fired
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Earliest of the context deadline and `timeout` from now
    pub(crate) fn deadline_within(&self, timeout: Duration) -> Instant {
        let now = Instant::now();
        let limit = now.checked_add(timeout).unwrap_or(now + FAR_FUTURE);
        self.deadline.map_or(limit, |deadline| deadline.min(limit))
    }

    /// Resolves when the context is cancelled; never resolves otherwise
    pub(crate) async fn cancelled(&self) {
        if let Some(mut rx) = self.cancel.clone() {
            let fired = rx.wait_for(|cancelled| *cancelled).await.is_ok();
            if fired {
                return;
            }
        }
        // No handle, or the handle was dropped without firing
        std::future::pending::<()>().await
    }
}

/// Cancels every [`LookupContext`] cloned from the one it was created with
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signals cancellation; pending and future lookups fail immediately
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Returns true if [`cancel`](Self::cancel) has been called
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}
