use std::collections::{BTreeSet, VecDeque};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::grid::{Grid, Record};
use crate::pipes::{Cell, SOURCE_SYMBOL};

/// Fatal conditions for a single reachability run. The computation is pure
/// and deterministic, so none of these are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No record carries the source symbol; there is nothing to traverse
    /// from, and "reachable from nothing" is undefined rather than empty.
    #[error("no source cell in the input")]
    MissingSource,
    /// More than one record carries the source symbol.
    #[error("multiple source cells in the input (second at ({x}, {y}))")]
    MultipleSources { x: i64, y: i64 },
    /// A stored symbol is neither the source, a sink label, nor a known
    /// pipe shape. The shape table is fixed and exhaustive, so this is an
    /// input-integrity error.
    #[error("unknown cell symbol {symbol:?} at ({x}, {y})")]
    UnknownPipeSymbol { symbol: char, x: i64, y: i64 },
}

// The four axis-aligned neighbor offsets, in fixed evaluation order.
const DIRECTIONS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// An immutable puzzle instance: the coordinate index plus the located
/// source cell. Traversal state is created fresh per run, so one instance
/// can be solved any number of times.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    source: (i64, i64),
}

impl Puzzle {
    /// Builds the coordinate index and locates the unique source record.
    pub fn from_records(records: &[Record]) -> Result<Puzzle, SolveError> {
        let grid = Grid::from_records(records)?;
        let mut sources = records.iter().filter(|r| r.symbol == SOURCE_SYMBOL);
        let Some(first) = sources.next() else {
            return Err(SolveError::MissingSource);
        };
        if let Some(extra) = sources.next() {
            return Err(SolveError::MultipleSources {
                x: extra.x,
                y: extra.y,
            });
        }
        Ok(Puzzle {
            grid,
            source: (first.x, first.y),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source(&self) -> (i64, i64) {
        self.source
    }

    /// Runs the breadth-first traversal and returns the labels of every
    /// sink reachable from the source, sorted and deduplicated.
    pub fn connected_sinks(&self) -> String {
        let mut visited: FxHashSet<(i64, i64)> = FxHashSet::default();
        let mut queue: VecDeque<(Cell, i64, i64)> = VecDeque::new();
        queue.push_back((Cell::Source, self.source.0, self.source.1));
        let mut sinks = BTreeSet::new();

        while let Some((cell, x, y)) = queue.pop_front() {
            // The same coordinate may be enqueued several times before its
            // first visit; the guard runs at dequeue time, not enqueue time.
            if !visited.insert((x, y)) {
                continue;
            }
            if let Cell::Sink(label) = cell {
                sinks.insert(label);
            }
            for (dx, dy) in DIRECTIONS {
                let (nx, ny) = (x + dx, y + dy);
                if self.grid.is_connected(x, y, nx, ny) {
                    // A connected neighbor is always occupied.
                    if let Some(neighbor) = self.grid.get(nx, ny) {
                        queue.push_back((neighbor, nx, ny));
                    }
                }
            }
        }

        sinks.into_iter().collect()
    }
}
