//! Errors that can occur while configuring or running the factory.

use sudoku_core::GridError;
use sudoku_solver::SolverError;

/// Errors that can occur while building or running a [`Factory`](crate::Factory).
///
/// An exhausted generation attempt is deliberately *not* a variant here: it
/// is represented as `None` in the [`GenerationStream`](crate::GenerationStream),
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GeneratorError {
    /// `worker_count` was zero, or `naked_single_min_ratio` fell outside `[0.0, 1.0]`.
    #[display("invalid factory configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the invalid setting.
        reason: String,
    },
    /// Building the solved-grid pool failed because the empty grid of the
    /// requested side could not be constructed.
    #[display("{_0}")]
    #[from]
    Grid(GridError),
    /// Building the solved-grid pool failed because the empty grid of the
    /// requested side is infeasible (should not occur for `side` in `{4, 9}`,
    /// but is propagated rather than unwrapped).
    #[display("{_0}")]
    #[from]
    Solver(SolverError),
}
