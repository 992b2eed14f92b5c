//! Error types returned by the grid model.

/// Errors that can occur while constructing or transitioning a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input rows were not square, or the side length was not a perfect square.
    #[display("invalid grid shape: {reason}")]
    InvalidShape {
        /// Human-readable description of what was wrong with the shape.
        reason: String,
    },
    /// A transition was requested at a position outside `[0, side)`.
    #[display("position ({row}, {col}) is out of bounds for side {side}")]
    OutOfBounds {
        /// The offending row.
        row: u8,
        /// The offending column.
        col: u8,
        /// The grid's side length.
        side: u8,
    },
}
