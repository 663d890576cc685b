//! Core model for 81-character Sudoku puzzle strings.
//!
//! This crate provides the board model shared by validation and solving:
//!
//! 1. **Core types**
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9
//!    - [`digit_set`]: A 9-bit set of digits, used for candidate tracking
//! 2. **Topology tables** — fixed structural data, computed at compile time
//!    - [`cell`]: The 81 board cells (`A1`-`I9`) and their 20-cell peer sets
//!    - [`group`]: The 27 groups (9 rows, 9 columns, 9 boxes)
//! 3. **Puzzle codec**
//!    - [`puzzle`]: Conversion between 81-character puzzle strings and
//!      [`Grid`] mappings, with shape validation
//! 4. **Validation**
//!    - [`validate`]: Permutation checks per group and over a complete
//!      solution string
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{Cell, Digit, Grid, is_solution_valid};
//!
//! let solved = "769235418851496372432178956174569283395842761628713549283657194516924837947381625";
//! assert!(is_solution_valid(solved));
//!
//! let grid = Grid::from_puzzle(solved)?;
//! let a1: Cell = "A1".parse().unwrap();
//! assert_eq!(grid.get(a1), Some(Digit::D7));
//! # Ok::<(), ninegrid_core::MalformedPuzzleError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod group;
pub mod puzzle;
pub mod validate;

// Re-export commonly used types
pub use self::{
    cell::{Cell, ParseCellError},
    digit::Digit,
    digit_set::DigitSet,
    group::Group,
    puzzle::{BLANK, Grid, MalformedPuzzleError, is_complete, is_well_formed},
    validate::{is_group_valid, is_solution_valid},
};
