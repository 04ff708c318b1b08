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

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use queue_demo_rs::Queue;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

/// Queue Demo - Replay queue operations against a linked-list queue
///
/// Without a FILE, replays the built-in demo sequence. Results are written to
/// stdout as CSV.
#[derive(Parser, Debug)]
#[command(name = "queue-demo-rs")]
#[command(about = "Replays push/pop/front/size operations on a FIFO queue", long_about = None)]
struct Args {
    /// Path to CSV file with queue operations
    ///
    /// Expected format: op,value
    /// Example: cargo run -- operations.csv > results.csv
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let stdout = std::io::stdout();

    let result = match &args.script {
        Some(path) => {
            let file = match File::open(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Error opening file '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };
            process_operations(BufReader::new(file), stdout.lock())
        }
        None => run_demo(stdout.lock()),
    };

    if let Err(e) = result {
        eprintln!("Error processing operations: {}", e);
        process::exit(1);
    }
}

/// A single queue operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Push(i64),
    Pop,
    Front,
    Size,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Push(_) => "push",
            Operation::Pop => "pop",
            Operation::Front => "front",
            Operation::Size => "size",
        }
    }
}

/// The sequence the demo replays when no script is given.
const DEMO: [Operation; 8] = [
    Operation::Push(10),
    Operation::Push(20),
    Operation::Push(30),
    Operation::Front,
    Operation::Size,
    Operation::Pop,
    Operation::Front,
    Operation::Size,
];

/// Raw CSV record matching the input format.
///
/// Fields: `op, value`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    op: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    value: Option<i64>,
}

impl CsvRecord {
    /// Converts CSV record to an [`Operation`].
    ///
    /// Returns `None` for unknown operations or a push without a value.
    fn into_operation(self) -> Option<Operation> {
        match self.op.to_lowercase().as_str() {
            "push" => self.value.map(Operation::Push),
            "pop" => Some(Operation::Pop),
            "front" => Some(Operation::Front),
            "size" => Some(Operation::Size),
            _ => None,
        }
    }
}

/// One result row: the value read from the queue, or why there was none.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct OutputRecord {
    op: &'static str,
    value: Option<i64>,
    error: Option<String>,
}

/// Applies `op` to `queue`, returning the row to report.
///
/// Pushes report nothing.
fn apply(queue: &mut Queue<i64>, op: Operation) -> Option<OutputRecord> {
    let outcome = match op {
        Operation::Push(value) => {
            queue.push(value);
            return None;
        }
        Operation::Pop => queue.pop(),
        Operation::Front => queue.front().copied(),
        Operation::Size => Ok(size_value(queue.size())),
    };

    let (value, error) = match outcome {
        Ok(value) => (Some(value), None),
        Err(e) => (None, Some(e.to_string())),
    };
    Some(OutputRecord {
        op: op.name(),
        value,
        error,
    })
}

/// Converts a queue size to the `value` column, saturating at `i64::MAX`.
fn size_value(size: usize) -> i64 {
    i64::try_from(size).unwrap_or(i64::MAX)
}

/// Replays the built-in demo sequence.
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn run_demo<W: Write>(writer: W) -> Result<Queue<i64>, csv::Error> {
    let mut queue = Queue::new();
    let mut wtr = Writer::from_writer(writer);

    for op in DEMO {
        if let Some(record) = apply(&mut queue, op) {
            wtr.serialize(&record)?;
        }
    }

    wtr.flush()?;
    Ok(queue)
}

/// Process queue operations from a CSV reader, writing results to `writer`.
///
/// Operations are applied as they are parsed. Malformed rows and unknown
/// operations are skipped.
///
/// # CSV Format
///
/// Expected columns: `op, value`
/// - `op`: Operation (push, pop, front, size)
/// - `value`: Integer to push (ignored for other operations)
///
/// # Example
///
/// ```csv
/// op,value
/// push,10
/// push,20
/// pop,
/// front,
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails or writing a result fails.
fn process_operations<R: Read, W: Write>(reader: R, writer: W) -> Result<Queue<i64>, csv::Error> {
    let mut queue = Queue::new();
    let mut wtr = Writer::from_writer(writer);

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " push "
        .flexible(true) // Allow missing value field
        .has_headers(true)
        .from_reader(reader);

    for result in rdr.deserialize::<CsvRecord>() {
        match result {
            Ok(record) => {
                let Some(op) = record.into_operation() else {
                    #[cfg(debug_assertions)]
                    eprintln!("Skipping invalid operation record");
                    continue;
                };

                if let Some(output) = apply(&mut queue, op) {
                    wtr.serialize(&output)?;
                }
            }
            Err(e) => {
                #[cfg(debug_assertions)]
                eprintln!("Skipping malformed row: {}", e);
                continue;
            }
        }
    }

    wtr.flush()?;
    Ok(queue)
}
