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

//! Error types for queue operations.

use thiserror::Error;

/// Queue operation errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no elements to read or remove
    #[error("queue is empty")]
    EmptyQueue,
}

#[cfg(test)]
mod tests {
    use super::QueueError;

    #[test]
    fn error_display_messages() {
        assert_eq!(QueueError::EmptyQueue.to_string(), "queue is empty");
    }

    #[test]
    fn errors_are_copyable() {
        let error = QueueError::EmptyQueue;
        let copied = error;
        assert_eq!(error, copied);
    }
}
