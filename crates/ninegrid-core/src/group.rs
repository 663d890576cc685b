//! The 27 groups of a board: rows, columns, and 3×3 boxes.

use crate::Cell;

/// A board group (row, column, or 3×3 box).
///
/// A valid solution contains each digit 1-9 exactly once in every group.
/// The 27 groups are fixed structural data, never mutated after program
/// start.
///
/// # Examples
///
/// ```
/// use ninegrid_core::Group;
///
/// assert_eq!(Group::ALL.len(), 27);
///
/// let row = Group::Row { y: 0 };
/// let cells = row.cells();
/// assert_eq!(cells[0].to_string(), "A1");
/// assert_eq!(cells[8].to_string(), "A9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Group {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 groups in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a member index within the group (0-8) into the absolute
    /// [`Cell`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn cell_at(self, i: u8) -> Cell {
        assert!(i < 9);
        match self {
            Group::Row { y } => Cell::new(y, i),
            Group::Column { x } => Cell::new(i, x),
            Group::Box { index } => {
                Cell::new((index / 3) * 3 + i / 3, (index % 3) * 3 + i % 3)
            }
        }
    }

    /// Returns the 9 member cells of this group, in group order.
    ///
    /// Rows and columns yield their cells in coordinate order; boxes yield
    /// theirs row-major within the box.
    #[must_use]
    pub fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell::from_index(0); 9];
        for i in 0u8..9 {
            cells[usize::from(i)] = self.cell_at(i);
        }
        cells
    }
}
