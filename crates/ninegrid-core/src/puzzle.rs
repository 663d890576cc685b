//! Puzzle string codec and grid mapping.
//!
//! The canonical serialization of a board state is an 81-character string of
//! digits `1`-`9` and the blank marker `.`, in row-major order. [`Grid`] is
//! the decoded form, a mapping from each [`Cell`] to its digit; it is always
//! derived from a puzzle string and renders back to one, never stored as an
//! independent source of truth.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Cell, Digit};

/// The blank-cell marker used in puzzle strings.
pub const BLANK: char = '.';

/// Returns `true` if `s` is a well-formed puzzle string: exactly 81
/// characters, each a digit `1`-`9` or the blank marker `.`.
///
/// # Examples
///
/// ```
/// use ninegrid_core::puzzle;
///
/// assert!(puzzle::is_well_formed(&".".repeat(81)));
/// assert!(!puzzle::is_well_formed("123"));
/// assert!(!puzzle::is_well_formed(&"0".repeat(81)));
/// ```
#[must_use]
pub fn is_well_formed(s: &str) -> bool {
    s.len() == 81 && s.chars().all(|c| c == BLANK || Digit::from_char(c).is_some())
}

/// Returns `true` if `s` is a complete candidate solution: exactly 81
/// characters, each a digit `1`-`9`, no blanks.
///
/// This is the shape precondition for solution validation; it says nothing
/// about whether the digits satisfy the Sudoku rules.
#[must_use]
pub fn is_complete(s: &str) -> bool {
    s.len() == 81 && s.chars().all(|c| Digit::from_char(c).is_some())
}

/// Error reported when a puzzle string is not 81 characters of `[1-9.]`.
///
/// This is a recoverable condition: callers display the message and take no
/// grid action. The display text is the exact message collaborating UIs show
/// next to the puzzle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Error: Expected puzzle to be 81 characters long.")]
pub struct MalformedPuzzleError;

/// A mapping from each [`Cell`] to its digit, with blanks absent.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Cell, Digit, Grid};
///
/// let puzzle = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
/// let grid = Grid::from_puzzle(puzzle)?;
///
/// let a3: Cell = "A3".parse().unwrap();
/// assert_eq!(grid.get(a3), Some(Digit::D9));
///
/// let a1: Cell = "A1".parse().unwrap();
/// assert_eq!(grid.get(a1), None);
///
/// // The codec round-trips
/// assert_eq!(grid.to_puzzle_string(), puzzle);
/// # Ok::<(), ninegrid_core::MalformedPuzzleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Decodes a puzzle string into a grid.
    ///
    /// Position `i` of the string (row-major) maps to `Cell::from_index(i)`.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPuzzleError`] if `s` is not exactly 81 characters
    /// of `[1-9.]`.
    pub fn from_puzzle(s: &str) -> Result<Self, MalformedPuzzleError> {
        if !is_well_formed(s) {
            return Err(MalformedPuzzleError);
        }
        let mut grid = Self::empty();
        for (cell, c) in Cell::ALL.iter().zip(s.chars()) {
            grid.cells[cell.index()] = Digit::from_char(c);
        }
        Ok(grid)
    }

    /// Renders the 81 cells in row-major order, blanks as `.`.
    #[must_use]
    pub fn to_puzzle_string(&self) -> String {
        self.cells
            .iter()
            .map(|digit| digit.map_or(BLANK, Digit::to_char))
            .collect()
    }

    /// Returns the digit at `cell`, or `None` if the cell is blank.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()]
    }

    /// Places a digit at `cell`.
    pub fn set(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.index()] = Some(digit);
    }

    /// Blanks the cell.
    pub fn clear(&mut self, cell: Cell) {
        self.cells[cell.index()] = None;
    }

    /// Returns the first blank cell in row-major order, or `None` when the
    /// grid is complete.
    #[must_use]
    pub fn first_blank(&self) -> Option<Cell> {
        Cell::ALL.into_iter().find(|cell| self.get(*cell).is_none())
    }

    /// Returns `true` when every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over all cells with their contents, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<Digit>)> + '_ {
        Cell::ALL.into_iter().map(move |cell| (cell, self.get(cell)))
    }
}

impl FromStr for Grid {
    type Err = MalformedPuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_puzzle(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9u8 {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..9u8 {
                if column > 0 && column % 3 == 0 {
                    write!(f, " ")?;
                }
                let c = self.get(Cell::new(row, column)).map_or(BLANK, Digit::to_char);
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed(PUZZLE));
        assert!(is_well_formed(&"1".repeat(81)));
        assert!(is_well_formed(&".".repeat(81)));

        // Wrong length
        assert!(!is_well_formed(""));
        assert!(!is_well_formed(&PUZZLE[..80]));
        assert!(!is_well_formed(&format!("{PUZZLE}.")));

        // Bad characters
        assert!(!is_well_formed(&"0".repeat(81)));
        assert!(!is_well_formed(&"a".repeat(81)));
        assert!(!is_well_formed(&format!("x{}", &PUZZLE[1..])));
    }

    #[test]
    fn test_complete() {
        assert!(is_complete(&"9".repeat(81)));
        assert!(!is_complete(PUZZLE)); // contains blanks
        assert!(!is_complete(&"9".repeat(80)));
        assert!(!is_complete(&"0".repeat(81)));
    }

    #[test]
    fn test_decode_known_cells() {
        let grid = Grid::from_puzzle(PUZZLE).unwrap();
        let at = |token: &str| grid.get(token.parse().unwrap());

        assert_eq!(at("A1"), None);
        assert_eq!(at("A3"), Some(Digit::D9));
        assert_eq!(at("B1"), Some(Digit::D8));
        assert_eq!(at("E2"), Some(Digit::D9));
        assert_eq!(at("I7"), Some(Digit::D6));
        assert_eq!(at("I9"), None);
    }

    #[test]
    fn test_malformed_puzzles_are_rejected() {
        let short = "83.9.....6.62.71...9......1945....4.37.4.3..6..";
        let long = format!("{PUZZLE}.");

        for s in [short, long.as_str()] {
            let err = Grid::from_puzzle(s).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Error: Expected puzzle to be 81 characters long."
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let grid = Grid::from_puzzle(PUZZLE).unwrap();
        assert_eq!(grid.to_puzzle_string(), PUZZLE);
    }

    #[test]
    fn test_set_clear_first_blank() {
        let mut grid = Grid::from_puzzle(PUZZLE).unwrap();
        let a1: Cell = "A1".parse().unwrap();

        assert_eq!(grid.first_blank(), Some(a1));
        grid.set(a1, Digit::D7);
        assert_eq!(grid.get(a1), Some(Digit::D7));
        assert_ne!(grid.first_blank(), Some(a1));

        grid.clear(a1);
        assert_eq!(grid.first_blank(), Some(a1));
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_display_layout() {
        let grid = Grid::from_puzzle(PUZZLE).unwrap();
        let rendered = grid.to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "..9 ..5 .1.");
        assert_eq!(rendered.lines().count(), 9);
    }

    proptest! {
        #[test]
        fn prop_codec_round_trip(s in "[1-9.]{81}") {
            let grid = Grid::from_puzzle(&s).unwrap();
            prop_assert_eq!(grid.to_puzzle_string(), s);
        }

        #[test]
        fn prop_short_strings_are_malformed(s in "[1-9.]{0,80}") {
            prop_assert!(!is_well_formed(&s));
            prop_assert!(Grid::from_puzzle(&s).is_err());
        }
    }
}
