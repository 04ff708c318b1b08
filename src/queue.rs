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

//! FIFO queue backed by a singly linked list.
//!
//! Every node is a leaked `Box` reachable from the queue's head; the queue
//! reclaims a node with `Box::from_raw` when it is popped or on teardown. A
//! second pointer to the last node makes [`Queue::push`] O(1).
//!
//! # State Machine
//!
//! - **Empty**: no head, no tail, length zero.
//! - **NonEmpty**: `push` keeps it NonEmpty; `pop` returns to Empty once the
//!   last node is removed.
//!
//! `pop` and `front` on an empty queue return [`QueueError::EmptyQueue`] and
//! leave the queue untouched.

use crate::error::QueueError;
use crate::node::Node;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A first-in-first-out queue of owned nodes.
///
/// # Invariants
///
/// - `len == 0` if and only if `head` is `None` if and only if `tail` is `None`.
/// - When non-empty, following `next` from `head` reaches `tail` after exactly
///   `len - 1` steps, and `tail.next` is `None`.
/// - Every pointer in the chain came from `Box::leak` in [`Queue::push`] and is
///   reclaimed exactly once, by [`Queue::pop`] or [`Queue::clear`].
///
/// # Example
///
/// ```
/// use queue_demo_rs::{Queue, QueueError};
///
/// let mut queue = Queue::new();
/// queue.push(10);
/// queue.push(20);
///
/// assert_eq!(queue.front(), Ok(&10));
/// assert_eq!(queue.pop(), Ok(10));
/// assert_eq!(queue.pop(), Ok(20));
/// assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
/// ```
pub struct Queue<T> {
    /// First node of the chain, the next one to be removed.
    head: Option<NonNull<Node<T>>>,

    /// Most recently pushed node.
    tail: Option<NonNull<Node<T>>>,

    /// Number of nodes reachable from `head`.
    len: usize,

    /// The queue owns its nodes and their values.
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the queue is the sole owner of its nodes; no pointer into the chain
// escapes except through borrows of the queue itself.
unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Queue<T> {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Appends `value` to the back of the queue.
    pub fn push(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node::new(value))));

        match self.tail {
            // SAFETY: `tail` is a live node of this chain; nodes are only freed
            // by `pop` and `clear`, which reset `tail` before it could dangle.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue has no elements.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let head = self.head.ok_or(QueueError::EmptyQueue)?;

        // SAFETY: `head` was leaked by `push` and is unlinked right here, so
        // this is the only place it is reclaimed.
        let node = unsafe { Box::from_raw(head.as_ptr()) };

        self.head = node.next;
        if self.head.is_none() {
            // The released node was also the tail.
            self.tail = None;
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// Returns a reference to the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue has no elements.
    pub fn front(&self) -> Result<&T, QueueError> {
        self.head
            // SAFETY: linked nodes stay allocated for as long as `self` is borrowed.
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(QueueError::EmptyQueue)
    }

    /// Returns a mutable reference to the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue has no elements.
    pub fn front_mut(&mut self) -> Result<&mut T, QueueError> {
        self.head
            // SAFETY: as in `front`, and `&mut self` makes the access exclusive.
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(QueueError::EmptyQueue)
    }

    /// Returns the number of elements in the queue.
    ///
    /// Same as [`Queue::len`], under the queue's traditional name.
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Releases every node, leaving the queue empty and reusable.
    pub fn clear(&mut self) {
        self.tail = None;
        self.len = 0;

        let mut link = self.head.take();
        while let Some(node) = link {
            // SAFETY: the chain was detached from `head` above, so each node is
            // visited once and reclaimed once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            link = node.next;
        }
    }

    /// Returns a front-to-back iterator over the queued values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator returned by [`Queue::iter`].
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // SAFETY: the iterator borrows the queue for `'a`, so no node can
            // be popped or freed while it is in use.
            let node: &'a Node<T> = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// SAFETY: `Iter` only hands out shared references, like `&Queue<T>`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// Draining iterator returned by [`Queue::into_iter`].
///
/// Values not consumed are released when the iterator is dropped.
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
