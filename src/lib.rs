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

//! # Queue Demo
//!
//! This library provides a first-in-first-out queue backed by a singly linked
//! list of owned nodes, with explicit empty-queue errors and guaranteed release
//! of every node.
//!
//! ## Core Components
//!
//! - [`Queue`]: Single-threaded FIFO queue with O(1) push, pop, front and size
//! - [`SharedQueue`]: The same queue guarded by a single lock for shared use
//! - [`QueueError`]: Error returned when reading or removing from an empty queue
//!
//! ## Example
//!
//! ```
//! use queue_demo_rs::{Queue, QueueError};
//!
//! let mut queue = Queue::new();
//! queue.push(10);
//! queue.push(20);
//! queue.push(30);
//!
//! assert_eq!(queue.front(), Ok(&10));
//! assert_eq!(queue.size(), 3);
//!
//! assert_eq!(queue.pop(), Ok(10));
//! assert_eq!(queue.front(), Ok(&20));
//! assert_eq!(queue.size(), 2);
//!
//! // A stored -1 is an ordinary value, never confused with an empty queue.
//! let mut queue = Queue::new();
//! queue.push(-1);
//! assert_eq!(queue.pop(), Ok(-1));
//! assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
//! ```
//!
//! ## Thread Safety
//!
//! [`Queue`] has no internal synchronization; it is `Send`/`Sync` exactly when
//! its values are. Use [`SharedQueue`] when several threads push and pop.

pub mod error;
mod node;
mod queue;
mod shared_queue;

pub use error::QueueError;
pub use queue::{IntoIter, Iter, Queue};
pub use shared_queue::SharedQueue;
