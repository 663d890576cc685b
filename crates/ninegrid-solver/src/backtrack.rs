use ninegrid_core::{Cell, DigitSet, Grid};

use crate::SolveError;

/// Solves a puzzle string, returning the solved 81-character string.
///
/// The search fills the leftmost blank (row-major order) first and tries
/// candidates in ascending digit order, so the result is deterministic.
/// Puzzles with more than one solution yield the first one reachable under
/// that order. An already-complete puzzle is returned unchanged, without
/// re-validating its groups.
///
/// # Errors
///
/// Returns [`SolveError::Malformed`] if `puzzle` is not an 81-character
/// string of `[1-9.]`, and [`SolveError::Unsolvable`] if no assignment of
/// the blank cells satisfies every row, column, and box.
///
/// # Examples
///
/// ```
/// use ninegrid_solver::{SolveError, solve};
///
/// let puzzle = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
/// let solution = solve(puzzle)?;
/// assert!(!solution.contains('.'));
///
/// assert!(solve("not a puzzle").unwrap_err().is_malformed());
/// # Ok::<(), SolveError>(())
/// ```
pub fn solve(puzzle: &str) -> Result<String, SolveError> {
    let grid = Grid::from_puzzle(puzzle)?;
    match solve_grid(&grid) {
        Some(solved) => {
            let solution = solved.to_puzzle_string();
            log::debug!("solved {puzzle} -> {solution}");
            Ok(solution)
        }
        None => {
            log::debug!("no solution for {puzzle}");
            Err(SolveError::Unsolvable)
        }
    }
}

/// Solves a decoded grid, returning the completed grid if one exists.
///
/// This is the recursive core of [`solve`]: locate the first blank cell,
/// compute its candidates, and recurse on each in ascending order until a
/// branch completes the grid. A grid with no blanks is its own solution.
/// `None` signals that this branch admits no complete assignment, and the
/// caller moves on to its next candidate.
#[must_use]
pub fn solve_grid(grid: &Grid) -> Option<Grid> {
    let Some(cell) = grid.first_blank() else {
        return Some(*grid);
    };
    for digit in candidates(grid, cell) {
        let mut next = *grid;
        next.set(cell, digit);
        if let Some(solved) = solve_grid(&next) {
            return Some(solved);
        }
    }
    None
}

/// Digits that can be placed at `cell` without clashing with any of its 20
/// peers in the current grid.
fn candidates(grid: &Grid, cell: Cell) -> DigitSet {
    let mut remaining = DigitSet::FULL;
    for &peer in cell.peers() {
        if let Some(digit) = grid.get(peer) {
            remaining.remove(digit);
        }
    }
    remaining
}

#[cfg(test)]
mod tests {
    use ninegrid_core::{Digit, is_solution_valid};

    use super::*;

    const PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
    const SOLVED: &str =
        "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

    #[test]
    fn test_solves_known_puzzle() {
        assert_eq!(solve(PUZZLE).unwrap(), SOLVED);
    }

    #[test]
    fn test_complete_puzzle_is_returned_unchanged() {
        assert_eq!(solve(SOLVED).unwrap(), SOLVED);
    }

    #[test]
    fn test_solution_satisfies_all_groups() {
        let solution = solve(PUZZLE).unwrap();
        assert!(is_solution_valid(&solution));
    }

    #[test]
    fn test_empty_board_is_solvable() {
        let solution = solve(&".".repeat(81)).unwrap();
        assert!(is_solution_valid(&solution));
    }

    #[test]
    fn test_malformed_input() {
        let long = format!("{PUZZLE}.");
        let zeros = "0".repeat(81);
        for s in ["", "123", long.as_str(), zeros.as_str()] {
            let err = solve(s).unwrap_err();
            assert!(err.is_malformed(), "expected {s:?} to be malformed");
        }
    }

    #[test]
    fn test_contradiction_is_unsolvable() {
        // Blank A1 and force a second 7 into row A: the blank's peers then
        // cover all nine digits, so its candidate set is empty.
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars[0] = '.';
        chars[1] = '7';
        let puzzle: String = chars.into_iter().collect();

        let err = solve(&puzzle).unwrap_err();
        assert!(err.is_unsolvable());
    }

    #[test]
    fn test_candidates_exclude_peer_digits() {
        let grid = Grid::from_puzzle(PUZZLE).unwrap();
        let a1: Cell = "A1".parse().unwrap();

        let candidates = candidates(&grid, a1);
        // Row A holds {9, 5, 1}, column 1 holds {8, 4, 1, 6, 5}, box 0 holds
        // {9, 8, 5, 4, 3, 2}; only 7 survives.
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(Digit::D7));
        assert!(!candidates.contains(Digit::D6));
    }

    #[test]
    fn test_search_is_deterministic() {
        // Multiple runs over the same input take the same branches
        let first = solve(PUZZLE).unwrap();
        let second = solve(PUZZLE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_solve_grid_on_complete_grid() {
        let grid = Grid::from_puzzle(SOLVED).unwrap();
        let solved = solve_grid(&grid).unwrap();
        assert_eq!(solved, grid);
    }
}
