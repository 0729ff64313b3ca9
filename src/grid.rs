use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::pipes::Cell;
use crate::traverse::SolveError;

/// A single input record: a symbol placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub symbol: char,
    pub x: i64,
    pub y: i64,
}

impl Record {
    pub fn new(symbol: char, x: i64, y: i64) -> Self {
        Self { symbol, x, y }
    }
}

/// The sparse coordinate index, keyed y -> x -> cell. Built once from the
/// record list and read-only afterwards; absence of an entry means the
/// coordinate is empty.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: FxHashMap<i64, FxHashMap<i64, Cell>>,
}

impl Grid {
    /// Builds the index in input order. Later records overwrite earlier
    /// ones at the same coordinate. A record whose symbol is outside the
    /// source/sink/pipe alphabet fails the whole build.
    pub fn from_records(records: &[Record]) -> Result<Grid, SolveError> {
        let mut rows: FxHashMap<i64, FxHashMap<i64, Cell>> = FxHashMap::default();
        for r in records {
            let cell = Cell::from_symbol(r.symbol).ok_or(SolveError::UnknownPipeSymbol {
                symbol: r.symbol,
                x: r.x,
                y: r.y,
            })?;
            rows.entry(r.y).or_default().insert(r.x, cell);
        }
        Ok(Grid { rows })
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        self.rows.get(&y).and_then(|row| row.get(&x)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(|row| row.is_empty())
    }

    /// Iterates over all occupied coordinates as `(x, y, cell)`, in no
    /// particular order.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64, Cell)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&y, row)| row.iter().map(move |(&x, &cell)| (x, y, cell)))
    }

    /// Whether a connection exists between the two coordinates.
    ///
    /// An absent endpoint never connects. The source and sinks have no
    /// openings and connect to whatever occupies an adjacent coordinate.
    /// Two pipes connect only on a mutual opening: each shape must have an
    /// opening landing exactly on the other's coordinate. The caller always
    /// passes axis-adjacent pairs; no distance check is performed here.
    pub fn is_connected(&self, x1: i64, y1: i64, x2: i64, y2: i64) -> bool {
        let (Some(cell1), Some(cell2)) = (self.get(x1, y1), self.get(x2, y2)) else {
            return false;
        };
        let (Cell::Pipe(shape1), Cell::Pipe(shape2)) = (cell1, cell2) else {
            return true;
        };
        shape1
            .openings()
            .iter()
            .any(|&(dx, dy)| (x1 + dx, y1 + dy) == (x2, y2))
            && shape2
                .openings()
                .iter()
                .any(|&(dx, dy)| (x2 + dx, y2 + dy) == (x1, y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[(char, i64, i64)]) -> Grid {
        let records: Vec<Record> = cells
            .iter()
            .map(|&(symbol, x, y)| Record::new(symbol, x, y))
            .collect();
        Grid::from_records(&records).unwrap()
    }

    #[test]
    fn later_records_overwrite_earlier_ones() {
        let g = grid(&[('═', 0, 0), ('║', 0, 0)]);
        assert_eq!(
            g.get(0, 0),
            Some(Cell::Pipe(crate::pipes::PipeShape::Vertical))
        );
    }

    #[test]
    fn unknown_symbol_fails_the_build() {
        let records = vec![Record::new('═', 0, 0), Record::new('#', 3, 4)];
        assert_eq!(
            Grid::from_records(&records).unwrap_err(),
            SolveError::UnknownPipeSymbol {
                symbol: '#',
                x: 3,
                y: 4
            }
        );
    }

    #[test]
    fn absent_endpoints_never_connect() {
        let g = grid(&[('═', 0, 0)]);
        assert!(!g.is_connected(0, 0, 1, 0));
        assert!(!g.is_connected(1, 0, 0, 0));
        assert!(!g.is_connected(5, 5, 6, 5));
    }

    #[test]
    fn source_and_sinks_connect_to_any_occupied_neighbor() {
        // The vertical pipe has no opening toward either terminal, yet both
        // connect: terminals ignore shape.
        let g = grid(&[('*', 0, 0), ('║', 1, 0), ('A', 2, 0)]);
        assert!(g.is_connected(0, 0, 1, 0));
        assert!(g.is_connected(1, 0, 2, 0));
        assert!(g.is_connected(2, 0, 1, 0));
    }

    #[test]
    fn terminals_skip_the_distance_check() {
        // The predicate trusts the caller on adjacency, so a source
        // connects even to a far cell.
        let g = grid(&[('*', 0, 0), ('═', 5, 5)]);
        assert!(g.is_connected(0, 0, 5, 5));
    }

    #[test]
    fn mutual_opening_connects_pipes() {
        let g = grid(&[('═', 0, 0), ('═', 1, 0)]);
        assert!(g.is_connected(0, 0, 1, 0));
        assert!(g.is_connected(1, 0, 0, 0));
    }

    #[test]
    fn one_sided_opening_is_not_enough() {
        // ═ opens toward (1, 0) but ║ does not reciprocate.
        let g = grid(&[('═', 0, 0), ('║', 1, 0)]);
        assert!(!g.is_connected(0, 0, 1, 0));
        assert!(!g.is_connected(1, 0, 0, 0));
    }

    #[test]
    fn stacked_horizontal_pipes_do_not_connect() {
        let g = grid(&[('═', 0, 0), ('═', 0, 1)]);
        assert!(!g.is_connected(0, 0, 0, 1));
    }

    #[test]
    fn connection_is_symmetric() {
        let g = grid(&[
            ('*', 0, 0),
            ('═', 1, 0),
            ('╦', 2, 0),
            ('║', 2, 1),
            ('A', 2, 2),
            ('╗', 3, 0),
            ('B', 0, 1),
        ]);
        for x1 in -1..5 {
            for y1 in -1..4 {
                for (dx, dy) in [(1, 0), (0, 1)] {
                    let (x2, y2) = (x1 + dx, y1 + dy);
                    assert_eq!(
                        g.is_connected(x1, y1, x2, y2),
                        g.is_connected(x2, y2, x1, y1),
                        "asymmetric at ({}, {}) <-> ({}, {})",
                        x1,
                        y1,
                        x2,
                        y2
                    );
                }
            }
        }
    }

    #[test]
    fn cells_reports_every_occupied_coordinate() {
        let g = grid(&[('*', 0, 0), ('A', 2, -1)]);
        let mut cells: Vec<(i64, i64, Cell)> = g.cells().collect();
        cells.sort_by_key(|&(x, y, _)| (y, x));
        assert_eq!(
            cells,
            vec![(2, -1, Cell::Sink('A')), (0, 0, Cell::Source)]
        );
        assert!(!g.is_empty());
        assert!(Grid::default().is_empty());
    }
}
