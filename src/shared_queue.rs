// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Lock-guarded queue for multi-threaded access.
//!
//! [`Queue`] provides no synchronization of its own. [`SharedQueue`] guards the
//! whole structure with a single [`parking_lot::Mutex`], so every operation
//! observes and leaves the queue in a consistent state.

use crate::{Queue, QueueError};
use parking_lot::Mutex;

/// A thread-safe FIFO queue.
///
/// Each method holds the lock for its entire duration and never calls back into
/// user code while locked, apart from `T::clone` in [`SharedQueue::front`].
///
/// # Example
///
/// ```
/// use queue_demo_rs::SharedQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(SharedQueue::new());
/// let producer = {
///     let queue = queue.clone();
///     thread::spawn(move || (0..100).for_each(|i| queue.push(i)))
/// };
/// producer.join().unwrap();
///
/// assert_eq!(queue.size(), 100);
/// assert_eq!(queue.pop(), Ok(0));
/// ```
#[derive(Debug)]
pub struct SharedQueue<T> {
    inner: Mutex<Queue<T>>,
}

impl<T> SharedQueue<T> {
    /// Creates a new empty shared queue.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Queue::new()),
        }
    }

    /// Appends `value` to the back of the queue.
    pub fn push(&self, value: T) {
        self.inner.lock().push(value);
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue has no elements.
    pub fn pop(&self) -> Result<T, QueueError> {
        self.inner.lock().pop()
    }

    /// Returns the number of elements in the queue.
    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Removes every element, returning them in FIFO order.
    ///
    /// The queue is drained under a single lock acquisition, so no concurrent
    /// push can interleave with the drain.
    pub fn drain(&self) -> Vec<T> {
        let mut queue = self.inner.lock();
        let mut values = Vec::with_capacity(queue.size());
        while let Ok(value) = queue.pop() {
            values.push(value);
        }
        values
    }

    /// Consumes the wrapper, returning the underlying queue.
    pub fn into_inner(self) -> Queue<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SharedQueue<T> {
    /// Returns a clone of the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue has no elements.
    pub fn front(&self) -> Result<T, QueueError> {
        self.inner.lock().front().cloned()
    }
}

impl<T> Default for SharedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Queue<T>> for SharedQueue<T> {
    fn from(queue: Queue<T>) -> Self {
        Self {
            inner: Mutex::new(queue),
        }
    }
}
