//! Group and solution validation.

use tinyvec::ArrayVec;

use crate::{Grid, Group, puzzle};

/// Returns `true` iff `values` is exactly a permutation of 1-9.
///
/// Occurrences are tallied into nine buckets indexed by `value - 1`; the
/// group is valid iff every bucket holds exactly one. Any value outside 1-9,
/// any duplicate, or any missing digit fails. Sequences that are not exactly
/// 9 long are immediately invalid.
///
/// # Examples
///
/// ```
/// use ninegrid_core::is_group_valid;
///
/// assert!(is_group_valid(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
/// assert!(is_group_valid(&[9, 8, 7, 6, 5, 4, 3, 2, 1]));
/// assert!(!is_group_valid(&[1, 1, 3, 4, 5, 6, 7, 8, 9])); // duplicate
/// assert!(!is_group_valid(&[1, 2, 3, 4, 5, 6, 7, 8])); // wrong length
/// assert!(!is_group_valid(&[0, 2, 3, 4, 5, 6, 7, 8, 9])); // out of range
/// ```
#[must_use]
pub fn is_group_valid(values: &[u8]) -> bool {
    if values.len() != 9 {
        return false;
    }
    let mut counts = [0u8; 9];
    for &value in values {
        match value {
            1..=9 => counts[usize::from(value - 1)] += 1,
            _ => return false,
        }
    }
    counts.iter().all(|&count| count == 1)
}

/// Returns `true` iff `s` is a complete, rule-satisfying solution string.
///
/// Incomplete or malformed strings are invalid by definition. The string is
/// projected onto all 27 groups (rows, columns, boxes), each of which must
/// be a permutation of 1-9. Only a single boolean is reported; callers
/// needing to know which group failed re-derive per-group results.
///
/// # Examples
///
/// ```
/// use ninegrid_core::is_solution_valid;
///
/// let solved = "769235418851496372432178956174569283395842761628713549283657194516924837947381625";
/// assert!(is_solution_valid(solved));
///
/// // A duplicate in the first row fails
/// let broken = format!("77{}", &solved[2..]);
/// assert!(!is_solution_valid(&broken));
/// ```
#[must_use]
pub fn is_solution_valid(s: &str) -> bool {
    if !puzzle::is_complete(s) {
        return false;
    }
    let Ok(grid) = Grid::from_puzzle(s) else {
        return false;
    };
    Group::ALL.iter().all(|group| {
        let values: ArrayVec<[u8; 9]> = group
            .cells()
            .iter()
            .filter_map(|cell| grid.get(*cell))
            .map(|digit| digit.value())
            .collect();
        is_group_valid(&values)
    })
}
