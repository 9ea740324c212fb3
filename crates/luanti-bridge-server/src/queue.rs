//! Unbounded FIFO of pending commands with drain-all semantics.
//!
//! Producers append with [`CommandQueue::enqueue`]; the game host takes
//! everything at once with [`CommandQueue::drain`]. Both operations hold a
//! single mutex for their whole duration, so they are linearizable: an
//! entry is returned by exactly one drain and no completed enqueue is lost.
//!
//! Neither operation can fail or wait for items. A poisoned lock is
//! recovered, since a panic elsewhere cannot leave the inner `Vec` in a
//! partially-updated state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use luanti_bridge_types::Command;

/// Thread-safe command queue.
#[derive(Debug, Default)]
pub struct CommandQueue {
    /// Pending commands, oldest first.
    inner: Mutex<Vec<Command>>,
}

impl CommandQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Append every item in caller order and return how many were added.
    ///
    /// An empty batch is valid and returns 0.
    pub fn enqueue<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = Command>,
    {
        let batch: Vec<Command> = items.into_iter().collect();
        let count = batch.len();
        self.lock().extend(batch);
        count
    }

    /// Atomically remove and return every queued command, oldest first.
    ///
    /// Returns an empty vector when nothing is pending.
    pub fn drain(&self) -> Vec<Command> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of commands currently waiting.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no commands are waiting.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Command>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
