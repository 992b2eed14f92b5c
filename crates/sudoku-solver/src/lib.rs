//! The backtracking solver and the LayerN candidate engine for the
//! depth-bounded Sudoku reasoning core.
//!
//! Layer-0 (Plain/Naked/Hidden/Combined) and Layer-1 (Consensus) are pure
//! functions of a [`sudoku_core::Grid`] and live in `sudoku-core` directly
//! (they need no solver). This crate adds the one layer that does need a
//! solver — [`layer_n_candidates`] — plus the backtracking [`solve`] it is
//! built on.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::Grid;
//!
//! let grid = Grid::from_rows(&[vec![0u8; 4]; 4]).unwrap();
//! let count = sudoku_solver::solve(&grid, Some(10))?.count();
//! assert_eq!(count, 10);
//! # Ok::<(), sudoku_solver::SolverError>(())
//! ```

mod error;
mod layer_n;
mod solver;

pub use crate::{
    error::SolverError,
    layer_n::layer_n_candidates,
    solver::{Solutions, solve},
};
