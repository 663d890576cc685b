use ninegrid_core::MalformedPuzzleError;

/// Errors returned by [`solve`](crate::solve).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolveError {
    /// The input was not an 81-character string of `[1-9.]`.
    #[display("{_0}")]
    #[from]
    Malformed(MalformedPuzzleError),
    /// The search exhausted every candidate without completing the board.
    #[display("no solution exists for the given puzzle")]
    Unsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let malformed = SolveError::from(MalformedPuzzleError);
        assert_eq!(
            malformed.to_string(),
            "Error: Expected puzzle to be 81 characters long."
        );
        assert_eq!(
            SolveError::Unsolvable.to_string(),
            "no solution exists for the given puzzle"
        );
    }

    #[test]
    fn test_variant_predicates() {
        assert!(SolveError::Unsolvable.is_unsolvable());
        assert!(SolveError::from(MalformedPuzzleError).is_malformed());
    }
}
