//! Blocking operation queue.
//!
//! Unbounded FIFO bridging any number of producer threads to the single
//! render thread. `push` never blocks and never drops; `pop` parks the
//! consumer on a condition variable while the queue is empty.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::op::Operation;

#[derive(Debug, Default)]
pub struct OpQueue {
    items: Mutex<VecDeque<Operation>>,
    available: Condvar,
}

impl OpQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves the deque consistent, so a poisoned lock
    // is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Operation>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `op` at the tail and wakes the consumer if it is waiting.
    pub fn push(&self, op: Operation) {
        self.lock().push_back(op);
        self.available.notify_one();
    }

    /// Appends every operation contiguously under one lock acquisition, so no
    /// other producer's operations can interleave with them.
    pub fn push_all<I>(&self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        let pushed = {
            let mut items = self.lock();
            let before = items.len();
            items.extend(ops);
            items.len() - before
        };
        if pushed > 0 {
            self.available.notify_one();
        }
    }

    /// Removes and returns the head, blocking while the queue is empty.
    pub fn pop(&self) -> Operation {
        let mut items = self.lock();
        loop {
            if let Some(op) = items.pop_front() {
                return op;
            }
            items = self
                .available
                .wait(items)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Removes and returns the head without blocking.
    pub fn try_pop(&self) -> Option<Operation> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
