#![forbid(unsafe_code)]

//! Mirror-symmetric pattern grids.
//!
//! A pattern is a flat, row-major sequence of cell classes drawn from
//! the seeded stream: `0` background, `1` primary, `2` spot. Only the
//! left half of each row is drawn; the right half is its horizontal
//! reflection, which is what gives identicons their face-like quality.

use crate::rng::SeededRng;

/// Cell class for the background color.
pub const CELL_BACKGROUND: u8 = 0;
/// Cell class for the primary color.
pub const CELL_PRIMARY: u8 = 1;
/// Cell class for the spot color.
pub const CELL_SPOT: u8 = 2;

/// A generated pattern: row-major cell classes with per-row mirror
/// symmetry. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    cells: Vec<u8>,
}

impl PatternGrid {
    /// Draw a `size`-row pattern from the stream.
    ///
    /// The half-width is `size / 2` with truncating division, exactly
    /// as the reference computes it. For even sizes each row is
    /// `size` cells wide. For odd sizes the truncation shorts every
    /// row by one cell (the mirror can only reflect what was drawn),
    /// so the grid is not square and the rasterizer will reject it.
    /// That asymmetry is inherited behavior and is preserved
    /// bit-for-bit rather than corrected.
    ///
    /// Cells are `floor(draw * 2.3)`: the 2.3 multiplier skews spot
    /// cells rarer than background and primary, by design of the
    /// reference scheme.
    #[must_use]
    pub fn generate(size: usize, rng: &mut SeededRng) -> Self {
        let data_width = size / 2;
        let mirror_width = size - data_width;
        let mirror_len = data_width.min(mirror_width);

        let mut cells = Vec::with_capacity(size * size);
        for _ in 0..size {
            let row_start = cells.len();
            for _ in 0..data_width {
                cells.push((rng.next_f64() * 2.3).floor() as u8);
            }
            // Reflect the first `mirror_len` cells of the row, reversed.
            for i in (0..mirror_len).rev() {
                let cell = cells[row_start + i];
                cells.push(cell);
            }
        }
        Self { cells }
    }

    /// Wrap an existing cell sequence.
    ///
    /// Intended for callers that already hold pattern data; no
    /// symmetry or squareness is enforced here (the rasterizer checks
    /// squareness at its boundary).
    #[must_use]
    pub fn from_cells(cells: Vec<u8>) -> Self {
        Self { cells }
    }

    /// Flat row-major cell classes.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid holds no cells (`size == 0`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_for(seed: &str, size: usize) -> PatternGrid {
        let mut rng = SeededRng::from_seed(seed);
        PatternGrid::generate(size, &mut rng)
    }

    #[test]
    fn even_size_grid_is_square() {
        assert_eq!(grid_for("squares", 8).len(), 64);
        assert_eq!(grid_for("squares", 10).len(), 100);
    }

    #[test]
    fn odd_size_rows_are_short_by_one() {
        // 7 / 2 truncates to 3 drawn cells + 3 mirrored = 6 per row.
        assert_eq!(grid_for("odd", 7).len(), 7 * 6);
    }

    #[test]
    fn zero_size_grid_is_empty() {
        assert!(grid_for("", 0).is_empty());
    }

    #[test]
    fn cells_are_background_primary_or_spot() {
        for cell in grid_for("0xdeadbeef", 8).cells() {
            assert!(matches!(
                *cell,
                CELL_BACKGROUND | CELL_PRIMARY | CELL_SPOT
            ));
        }
    }

    #[test]
    fn rows_mirror_about_the_vertical_center() {
        let grid = grid_for("mirror me", 8);
        for row in grid.cells().chunks(8) {
            for col in 0..4 {
                assert_eq!(row[col], row[7 - col], "row {row:?} not symmetric");
            }
        }
    }

    #[test]
    fn all_zero_stream_yields_all_background() {
        // Empty seed draws 0.0 forever; floor(0.0 * 2.3) is background.
        let grid = grid_for("", 8);
        assert!(grid.cells().iter().all(|&c| c == CELL_BACKGROUND));
    }

    #[test]
    fn known_grid_for_fixed_seed() {
        // Pinned against an exact-semantics simulation of the
        // reference generation scheme.
        let grid = grid_for("0x0000000000000000000000000000000000000000", 8);
        #[rustfmt::skip]
        let expected: &[u8] = &[
            2, 1, 1, 1, 1, 1, 1, 2,
            2, 0, 1, 0, 0, 1, 0, 2,
            2, 1, 0, 0, 0, 0, 1, 2,
            2, 0, 0, 2, 2, 0, 0, 2,
            1, 1, 0, 0, 0, 0, 1, 1,
            1, 0, 1, 0, 0, 1, 0, 1,
            0, 0, 0, 1, 1, 0, 0, 0,
            1, 0, 2, 1, 1, 2, 0, 1,
        ];
        assert_eq!(grid.cells(), expected);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn symmetry_holds_for_any_seed(seed in ".{0,64}") {
                let grid = grid_for(&seed, 8);
                for row in grid.cells().chunks(8) {
                    for col in 0..4 {
                        prop_assert_eq!(row[col], row[7 - col]);
                    }
                }
            }

            #[test]
            fn cells_in_range_for_any_seed_and_even_size(
                seed in ".{0,64}",
                size in (1usize..=12).prop_map(|n| n * 2),
            ) {
                let grid = grid_for(&seed, size);
                prop_assert_eq!(grid.len(), size * size);
                for &cell in grid.cells() {
                    prop_assert!(cell <= CELL_SPOT);
                }
            }

            #[test]
            fn generation_is_deterministic(seed in ".{0,64}") {
                prop_assert_eq!(grid_for(&seed, 8), grid_for(&seed, 8));
            }
        }
    }
}
