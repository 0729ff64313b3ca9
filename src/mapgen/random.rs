//! # Random Grid Generation
//!
//! This module provides functions for generating random pipe-grid record
//! lists. Generated grids always use valid symbols and hold exactly one
//! source; they are deliberately not guaranteed to connect any sink to the
//! source, so downstream consumers get to exercise both reachable and
//! unreachable outcomes.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::grid::Record;
use crate::pipes::{self, SOURCE_SYMBOL};

/// Generates a random record list for a `width` x `height` region.
///
/// One source and `n_sinks` sink cells are placed on distinct coordinates;
/// every remaining cell independently holds a random pipe shape with
/// probability `density`. Sink labels cycle through `A`-`Z`, so more than
/// 26 sinks produces duplicate labels (which the solver deduplicates).
/// The returned record order is shuffled so that nothing downstream can
/// depend on it.
///
/// # Arguments
/// * `width`, `height` - Extent of the region; coordinates range over
///   `0..width` and `0..height`.
/// * `n_sinks` - The number of sink cells. `n_sinks + 1` must fit in the
///   region.
/// * `density` - Probability in `[0, 1]` that a free cell holds a pipe.
/// * `seed` - An optional seed for the random number generator for
///   reproducibility.
pub fn generate_records(
    width: i64,
    height: i64,
    n_sinks: usize,
    density: f64,
    seed: Option<u64>,
) -> Vec<Record> {
    assert!(width > 0 && height > 0, "empty region");
    assert!(
        (n_sinks as i64) < width * height,
        "region too small for one source and {} sinks",
        n_sinks
    );
    assert!((0.0..=1.0).contains(&density), "density out of range");

    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };

    let mut used = mat![false; height as usize; width as usize];
    let mut records = Vec::new();

    // Source and sinks go on distinct coordinates first.
    let place_terminal = |rng: &mut rand::rngs::StdRng, used: &mut Vec<Vec<bool>>| loop {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        if !used[y as usize][x as usize] {
            used[y as usize][x as usize] = true;
            return (x, y);
        }
    };
    let (sx, sy) = place_terminal(&mut rng, &mut used);
    records.push(Record::new(SOURCE_SYMBOL, sx, sy));
    for i in 0..n_sinks {
        let (x, y) = place_terminal(&mut rng, &mut used);
        let label = (b'A' + (i % 26) as u8) as char;
        records.push(Record::new(label, x, y));
    }

    // Fill the remaining cells with random pipe shapes.
    for y in 0..height {
        for x in 0..width {
            if used[y as usize][x as usize] || !rng.random_bool(density) {
                continue;
            }
            // The shape table is never empty, so choose always succeeds.
            if let Some(&(symbol, _)) = pipes::all_shapes().choose(&mut rng) {
                records.push(Record::new(symbol, x, y));
            }
        }
    }

    records.shuffle(&mut rng);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipes::Cell;
    use crate::traverse::Puzzle;

    #[test]
    fn same_seed_reproduces_the_same_records() {
        let a = generate_records(12, 8, 4, 0.5, Some(42));
        let b = generate_records(12, 8, 4, 0.5, Some(42));
        assert_eq!(a, b);
    }

    #[test]
    fn generates_one_source_and_the_requested_sinks() {
        let records = generate_records(10, 10, 5, 0.4, Some(7));
        let sources = records.iter().filter(|r| r.symbol == SOURCE_SYMBOL).count();
        let sinks = records
            .iter()
            .filter(|r| r.symbol.is_ascii_uppercase())
            .count();
        assert_eq!(sources, 1);
        assert_eq!(sinks, 5);
    }

    #[test]
    fn every_symbol_is_valid_and_in_bounds() {
        let records = generate_records(6, 9, 3, 0.8, Some(123));
        for r in &records {
            assert!(Cell::from_symbol(r.symbol).is_some(), "bad symbol {:?}", r);
            assert!((0..6).contains(&r.x) && (0..9).contains(&r.y), "{:?}", r);
        }
        // Terminals are placed on free cells and pipes on the rest, so all
        // coordinates are distinct.
        let mut coords: Vec<(i64, i64)> = records.iter().map(|r| (r.x, r.y)).collect();
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), records.len());
    }

    #[test]
    fn density_bounds_the_record_count() {
        assert_eq!(generate_records(5, 5, 2, 0.0, Some(1)).len(), 3);
        assert_eq!(generate_records(5, 5, 2, 1.0, Some(1)).len(), 25);
    }

    #[test]
    fn generated_records_always_build_a_puzzle() {
        for seed in 0..20 {
            let records = generate_records(8, 8, 3, 0.6, Some(seed));
            let puzzle = Puzzle::from_records(&records).unwrap();
            // The answer is some subset of the placed labels, sorted.
            let answer = puzzle.connected_sinks();
            assert!(answer.chars().all(|c| "ABC".contains(c)), "{:?}", answer);
            assert!(answer.as_bytes().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
