use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The symbol of the unique source cell.
pub const SOURCE_SYMBOL: char = '*';

/// One of the ten fixed pipe shapes, named after its box-drawing glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeShape {
    Horizontal,
    Vertical,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
    VerticalRight,
    VerticalLeft,
    DownHorizontal,
    UpHorizontal,
}

const SHAPES_DATA: &[(char, PipeShape)] = &[
    ('═', PipeShape::Horizontal),
    ('║', PipeShape::Vertical),
    ('╔', PipeShape::DownRight),
    ('╗', PipeShape::DownLeft),
    ('╚', PipeShape::UpRight),
    ('╝', PipeShape::UpLeft),
    ('╠', PipeShape::VerticalRight),
    ('╣', PipeShape::VerticalLeft),
    ('╦', PipeShape::DownHorizontal),
    ('╩', PipeShape::UpHorizontal),
];

pub fn all_shapes() -> &'static [(char, PipeShape)] {
    SHAPES_DATA
}

// Build a symbol -> shape map once for O(1) lookup.
static SHAPE_MAP: Lazy<HashMap<char, PipeShape>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for &(symbol, shape) in SHAPES_DATA.iter() {
        m.insert(symbol, shape);
    }
    m
});

impl PipeShape {
    pub fn from_symbol(symbol: char) -> Option<PipeShape> {
        SHAPE_MAP.get(&symbol).copied()
    }

    pub fn symbol(self) -> char {
        match self {
            PipeShape::Horizontal => '═',
            PipeShape::Vertical => '║',
            PipeShape::DownRight => '╔',
            PipeShape::DownLeft => '╗',
            PipeShape::UpRight => '╚',
            PipeShape::UpLeft => '╝',
            PipeShape::VerticalRight => '╠',
            PipeShape::VerticalLeft => '╣',
            PipeShape::DownHorizontal => '╦',
            PipeShape::UpHorizontal => '╩',
        }
    }

    /// The relative `(dx, dy)` directions this shape has an opening on.
    /// Every shape opens on two or three of the four axis neighbors; the
    /// table is fixed and exhaustive.
    pub fn openings(self) -> &'static [(i64, i64)] {
        match self {
            PipeShape::Horizontal => &[(-1, 0), (1, 0)],
            PipeShape::Vertical => &[(0, 1), (0, -1)],
            PipeShape::DownRight => &[(1, 0), (0, -1)],
            PipeShape::DownLeft => &[(1, 0), (0, 1)],
            PipeShape::UpRight => &[(-1, 0), (0, -1)],
            PipeShape::UpLeft => &[(-1, 0), (0, 1)],
            PipeShape::VerticalRight => &[(-1, 0), (1, 0), (0, 1)],
            PipeShape::VerticalLeft => &[(-1, 0), (1, 0), (0, -1)],
            PipeShape::DownHorizontal => &[(0, 1), (0, -1), (1, 0)],
            PipeShape::UpHorizontal => &[(0, 1), (0, -1), (-1, 0)],
        }
    }
}

/// What occupies a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The unique originating cell, symbol `*`.
    Source,
    /// A labelled terminal cell, symbol `A`-`Z`.
    Sink(char),
    /// A pipe segment with a fixed shape.
    Pipe(PipeShape),
}

impl Cell {
    /// Classifies a raw symbol. Returns `None` for symbols outside the
    /// source/sink/pipe alphabet.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        if symbol == SOURCE_SYMBOL {
            Some(Cell::Source)
        } else if symbol.is_ascii_uppercase() {
            Some(Cell::Sink(symbol))
        } else {
            PipeShape::from_symbol(symbol).map(Cell::Pipe)
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Source => SOURCE_SYMBOL,
            Cell::Sink(label) => label,
            Cell::Pipe(shape) => shape.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shapes_contains_expected_entries() {
        let all = all_shapes();
        assert_eq!(all.len(), 10);
        let symbols: Vec<char> = all.iter().map(|&(c, _)| c).collect();
        assert_eq!(
            symbols,
            vec!['═', '║', '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩']
        );
    }

    #[test]
    fn symbol_lookup_round_trips() {
        for &(symbol, shape) in all_shapes() {
            assert_eq!(PipeShape::from_symbol(symbol), Some(shape));
            assert_eq!(shape.symbol(), symbol);
        }
        assert!(PipeShape::from_symbol('#').is_none());
        assert!(PipeShape::from_symbol('a').is_none());
        assert!(PipeShape::from_symbol('*').is_none());
    }

    #[test]
    fn openings_are_unit_axis_directions() {
        let axis = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        for &(_, shape) in all_shapes() {
            let openings = shape.openings();
            assert!(openings.len() == 2 || openings.len() == 3);
            for dir in openings {
                assert!(axis.contains(dir), "{:?}: {:?}", shape, dir);
            }
            // No shape lists the same direction twice.
            for (i, a) in openings.iter().enumerate() {
                assert!(!openings[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn straight_pipes_open_along_their_axis() {
        assert_eq!(PipeShape::Horizontal.openings(), &[(-1, 0), (1, 0)]);
        assert_eq!(PipeShape::Vertical.openings(), &[(0, 1), (0, -1)]);
    }

    #[test]
    fn cell_classification() {
        assert_eq!(Cell::from_symbol('*'), Some(Cell::Source));
        assert_eq!(Cell::from_symbol('A'), Some(Cell::Sink('A')));
        assert_eq!(Cell::from_symbol('Z'), Some(Cell::Sink('Z')));
        assert_eq!(
            Cell::from_symbol('═'),
            Some(Cell::Pipe(PipeShape::Horizontal))
        );
        assert!(Cell::from_symbol('a').is_none());
        assert!(Cell::from_symbol('5').is_none());
        assert!(Cell::from_symbol(' ').is_none());
    }

    #[test]
    fn cell_symbol_round_trips() {
        for symbol in ['*', 'A', 'Q', '═', '╩'] {
            let cell = Cell::from_symbol(symbol).unwrap();
            assert_eq!(cell.symbol(), symbol);
        }
    }
}
