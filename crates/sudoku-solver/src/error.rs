//! Errors that can occur while solving.

use sudoku_core::GridError;

/// Errors that can occur during solving.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The grid passed to [`solve`](crate::solve) already violates Sudoku's
    /// distinctness constraints on its non-zero cells (two equal digits
    /// share a row, column, or block). This is a caller error, detected
    /// once up front, distinct from the normal "no solution exists" case
    /// (which is represented as an empty [`Solutions`](crate::Solutions)
    /// iterator, not an error).
    #[display("grid already violates row/column/block distinctness")]
    Contradiction,
    /// Propagated from a [`Grid`](sudoku_core::Grid) operation (e.g. an
    /// out-of-bounds transition during search, which should not occur given
    /// in-bounds positions but is propagated rather than unwrapped).
    #[display("{_0}")]
    #[from]
    Grid(GridError),
}
