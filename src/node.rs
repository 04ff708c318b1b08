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

//! Linked-list cell owned by a [`crate::Queue`].

use std::ptr::NonNull;

/// A single queue node.
///
/// Nodes are allocated with `Box` and linked through raw pointers. The
/// [`crate::Queue`] holding the chain is responsible for reclaiming each node
/// exactly once, either when it is popped or on teardown.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self { value, next: None }
    }
}
