//! Backtracking solver for 9×9 Sudoku puzzle strings.
//!
//! The solver explores the blank cells of a puzzle depth-first, always
//! filling the leftmost blank (row-major order) and trying candidate digits
//! in ascending order. Candidates are pruned against the 20 peers of the
//! blank cell, so a digit that would immediately violate a row, column, or
//! box constraint is never tried. The first complete assignment found is the
//! answer; the search is fully deterministic.
//!
//! # Examples
//!
//! ```
//! use ninegrid_solver::solve;
//!
//! let puzzle = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
//! let solution = solve(puzzle)?;
//! assert_eq!(
//!     solution,
//!     "769235418851496372432178956174569283395842761628713549283657194516924837947381625",
//! );
//! # Ok::<(), ninegrid_solver::SolveError>(())
//! ```

pub use self::{backtrack::*, error::*};

mod backtrack;
mod error;
