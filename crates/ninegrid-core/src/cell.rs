//! Board cells and their peer topology.

use std::fmt::{self, Display};
use std::str::FromStr;

/// One of the 81 cells of a 9×9 board.
///
/// A cell is identified by its row-major index (0-80) and renders as a
/// two-character token: row letter `A`-`I` followed by column number `1`-`9`.
/// `A1` is the top-left cell, `I9` the bottom-right. The index arithmetic
/// (`index = row * 9 + column`) is the same one the puzzle-string codec uses,
/// so coordinates stay consistent across the crate.
///
/// # Examples
///
/// ```
/// use ninegrid_core::Cell;
///
/// let cell = Cell::new(0, 2);
/// assert_eq!(cell.to_string(), "A3");
/// assert_eq!(cell.index(), 2);
///
/// let cell: Cell = "E5".parse()?;
/// assert_eq!(cell.index(), 40);
///
/// // Every cell has exactly 20 peers
/// assert_eq!(cell.peers().len(), 20);
/// # Ok::<(), ninegrid_core::ParseCellError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All 81 cells in row-major order (`A1`, `A2`, ..., `I9`).
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from row and column coordinates (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        assert!(row < 9 && column < 9);
        Self(row * 9 + column)
    }

    /// Creates a cell from its row-major index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self(index)
    }

    /// Row-major index of this cell (0-80).
    ///
    /// Position `i` of a puzzle string maps to `Cell::from_index(i)`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row coordinate (0-8, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column coordinate (0-8, left to right).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.0 % 9
    }

    /// Index of the 3×3 box containing this cell (0-8, left to right, top to
    /// bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.column() / 3
    }

    /// Row letter of the cell token (`'A'`-`'I'`).
    #[must_use]
    pub fn row_letter(self) -> char {
        char::from(b'A' + self.row())
    }

    /// Column number of the cell token (1-9).
    #[must_use]
    pub const fn column_number(self) -> u8 {
        self.column() + 1
    }

    /// The 20 cells sharing a row, column, or box with this cell.
    ///
    /// Peer sets are symmetric: if `b` is a peer of `a`, then `a` is a peer
    /// of `b`. The table is precomputed at compile time.
    #[must_use]
    pub fn peers(self) -> &'static [Self; 20] {
        &PEERS[self.index()]
    }

    const fn shares_group(self, other: Self) -> bool {
        self.row() == other.row()
            || self.column() == other.column()
            || self.box_index() == other.box_index()
    }
}

/// Peer table: for each cell, the 20 cells appearing with it in any of its
/// three groups, in row-major order.
const PEERS: [[Cell; 20]; 81] = {
    let mut table = [[Cell(0); 20]; 81];
    let mut a = 0;
    #[expect(clippy::cast_possible_truncation)]
    while a < 81 {
        let cell = Cell(a as u8);
        let mut count = 0;
        let mut b = 0;
        while b < 81 {
            let other = Cell(b as u8);
            if a != b && cell.shares_group(other) {
                table[a][count] = other;
                count += 1;
            }
            b += 1;
        }
        assert!(count == 20);
        a += 1;
    }
    table
};

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column_number())
    }
}

/// Error returned when parsing a cell token fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell token, expected a row letter A-I followed by a column number 1-9")]
pub struct ParseCellError;

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row @ 'A'..='I'), Some(column @ '1'..='9'), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCellError);
        };
        #[expect(clippy::cast_possible_truncation)]
        let cell = Self::new(row as u8 - b'A', column as u8 - b'1');
        Ok(cell)
    }
}
