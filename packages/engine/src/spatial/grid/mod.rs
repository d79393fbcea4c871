//! Grid - fixed N×N array of cell colors, row-major (index = row * N + col)
//!
//! Colors are ABGR-packed `u32` so `colors_ptr()` can be read straight into a
//! `Uint32Array` on the JS side.
//!
//! Invariant: `colors.len() == size * size` for the lifetime of the grid.
//! Paints never mutate in place; they produce the next snapshot (see `paint.rs`).

use crate::domain::color::Color;

mod indexing;
mod accessors;
mod paint;

pub use paint::PaintMode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    blank: Color,
    colors: Vec<Color>,
}

impl Grid {
    /// All cells start out `blank`
    pub fn new(size: u32, blank: Color) -> Self {
        let cell_count = (size as usize) * (size as usize);
        Self {
            size,
            blank,
            colors: vec![blank; cell_count],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::{BLANK, BLUE, MAGENTA};

    #[test]
    fn new_grid_is_blank_everywhere() {
        let grid = Grid::new(100, BLANK);
        assert_eq!(grid.cell_count(), 10_000);
        assert!((0..grid.cell_count()).all(|i| grid.color(i) == Some(BLANK)));
        assert_eq!(grid.count_painted(), 0);
    }

    #[test]
    fn index_and_coords_are_row_major() {
        let grid = Grid::new(100, BLANK);
        assert_eq!(grid.index(5, 5), 505);
        assert_eq!(grid.coords(505), (5, 5));
        assert_eq!(grid.index(3, 0), 3);
        assert_eq!(grid.coords(9_999), (99, 99));
        assert!(grid.in_bounds(99, 0));
        assert!(!grid.in_bounds(100, 0));
        assert!(!grid.in_bounds(0, -1));
    }

    #[test]
    fn set_overwrites_regardless_of_prior_color() {
        let grid = Grid::new(4, BLANK)
            .painted(Some(2), BLUE, PaintMode::Set)
            .painted(Some(2), MAGENTA, PaintMode::Set);
        assert_eq!(grid.color(2), Some(MAGENTA));
        assert_eq!(grid.count_painted(), 1);
    }

    #[test]
    fn toggle_flips_between_color_and_blank() {
        let start = Grid::new(4, BLANK);
        let on = start.painted(Some(7), MAGENTA, PaintMode::Toggle);
        assert_eq!(on.color(7), Some(MAGENTA));

        let off = on.painted(Some(7), MAGENTA, PaintMode::Toggle);
        assert_eq!(off.color(7), Some(BLANK));

        // Any non-blank color toggles back to blank, not to the new color
        let other = on.painted(Some(7), BLUE, PaintMode::Toggle);
        assert_eq!(other.color(7), Some(BLANK));
    }

    #[test]
    fn paint_is_a_pure_transition() {
        let before = Grid::new(4, BLANK);
        let after = before.painted(Some(0), BLUE, PaintMode::Set);
        assert_eq!(before.color(0), Some(BLANK));
        assert_eq!(after.color(0), Some(BLUE));
        assert_eq!(after.cell_count(), before.cell_count());
    }

    #[test]
    fn no_cell_and_out_of_range_targets_are_no_ops() {
        let grid = Grid::new(4, BLANK);
        assert_eq!(grid.painted(None, BLUE, PaintMode::Set), grid);
        assert_eq!(grid.painted(Some(16), BLUE, PaintMode::Set), grid);
        assert_eq!(grid.resolve(16, BLUE, PaintMode::Set), None);
    }
}
