//! Canonical line shapes for the forbidden-move rules
//!
//! Shapes are exact cell sequences: `X` is the restricted color, `O` an empty
//! point. An opponent stone equals neither, so it blocks any shape it touches.

use crate::board::Stone;

const O: Stone = Stone::Empty;
const X: Stone = Stone::Black;

/// Width of the window slid across an extracted line
pub const WINDOW_WIDTH: usize = 6;
/// Shortest shape in the tables; lines shorter than this never match
pub const MIN_SHAPE_LEN: usize = 5;

/// A named shape: an ordered list of cell states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub cells: &'static [Stone],
}

impl Shape {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Exact match: same length, every position equal, no wildcards
    #[inline]
    pub fn matches(&self, window: &[Stone]) -> bool {
        self.cells == window
    }
}

/// Threes that can still grow into an open four on either side
pub const OPEN_THREES: [Shape; 3] = [
    Shape { name: "_XXX_", cells: &[O, X, X, X, O] },
    Shape { name: "_XX_X_", cells: &[O, X, X, O, X, O] },
    Shape { name: "_X_XX_", cells: &[O, X, O, X, X, O] },
];

/// Fours: one more stone makes five
pub const FOURS: [Shape; 4] = [
    Shape { name: "_XXXX_", cells: &[O, X, X, X, X, O] },
    Shape { name: "XXX_X", cells: &[X, X, X, O, X] },
    Shape { name: "XX_XX", cells: &[X, X, O, X, X] },
    Shape { name: "X_XXX", cells: &[X, O, X, X, X] },
];

/// Slide a [`WINDOW_WIDTH`]-wide window over `line` and return the first shape
/// that equals a window.
///
/// Windows start at every offset that leaves at least [`MIN_SHAPE_LEN`] cells
/// and are cut short by the end of the line. Only the last window can be
/// shorter than six cells, so five-cell shapes match only at the tail.
pub fn find_shape(line: &[Stone], shapes: &'static [Shape]) -> Option<&'static Shape> {
    if line.len() < MIN_SHAPE_LEN {
        return None;
    }

    (0..=line.len() - MIN_SHAPE_LEN).find_map(|start| {
        let end = (start + WINDOW_WIDTH).min(line.len());
        let window = &line[start..end];
        shapes.iter().find(|shape| shape.matches(window))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_table_lengths() {
        for shape in OPEN_THREES.iter().chain(FOURS.iter()) {
            assert!(
                shape.len() == 5 || shape.len() == 6,
                "{} has length {}",
                shape.name,
                shape.len()
            );
            assert!(shape.len() <= WINDOW_WIDTH);
            assert!(shape.len() >= MIN_SHAPE_LEN);
        }
    }

    #[test]
    fn test_exact_match_requires_equal_length() {
        let shape = &OPEN_THREES[0];
        assert!(shape.matches(&[O, X, X, X, O]));
        assert!(!shape.matches(&[O, X, X, X, O, O]));
        assert!(!shape.matches(&[O, X, X, X]));
    }

    #[test]
    fn test_opponent_blocks_shape() {
        let w = Stone::White;
        assert_eq!(find_shape(&[w, X, X, X, X, O], &FOURS), None);
        assert_eq!(find_shape(&[O, X, X, X, X, O], &FOURS).map(|s| s.name), Some("_XXXX_"));
    }

    #[test]
    fn test_six_cell_shape_found_mid_line() {
        let line = [O, O, X, X, O, X, O, O];
        let found = find_shape(&line, &OPEN_THREES);
        assert_eq!(found.map(|s| s.name), Some("_XX_X_"));
    }

    #[test]
    fn test_five_cell_shape_only_at_tail() {
        // _XXX_ sitting at the tail of a seven-cell line is found
        let tail = [O, O, O, X, X, X, O];
        assert_eq!(find_shape(&tail, &OPEN_THREES).map(|s| s.name), Some("_XXX_"));

        // The same three one cell earlier is only ever seen inside six-wide
        // windows, which never equal the five-cell shape
        let inner = [O, O, X, X, X, O, O];
        assert_eq!(find_shape(&inner, &OPEN_THREES), None);
    }

    #[test]
    fn test_exactly_five_cells() {
        assert!(find_shape(&[X, X, O, X, X], &FOURS).is_some());
        assert!(find_shape(&[O, X, X, X, O], &OPEN_THREES).is_some());
    }

    #[test]
    fn test_short_line_never_matches() {
        assert_eq!(find_shape(&[X, X, X, X], &FOURS), None);
        assert_eq!(find_shape(&[], &OPEN_THREES), None);
    }
}
