//! Parallel puzzle generation with layer filtering.
//!
//! A removal-method generator: generate a complete solution, then remove
//! cells one at a time, testing a target predicate after each removal. This
//! crate generalizes that shape to a worker-pool architecture that produces
//! puzzles matching a requested candidate layer rather than a fixed
//! "removable while uniquely solvable" criterion.
//!
//! The factory amortizes solver cost by precomputing a pool of complete
//! solved grids once (via [`sudoku_solver::solve`]) and drawing from it per
//! attempt, so many parallel workers can share that up-front cost instead of
//! paying it once per attempt.
//!
//! # Examples
//!
//! ```
//! use sudoku_generator::{Factory, FactoryConfig, PuzzleLayer};
//!
//! let factory = Factory::with_seed(4, FactoryConfig::default(), [7u8; 32]).unwrap();
//! let accepted: Vec<_> = factory
//!     .generate(PuzzleLayer::NakedSingle, 1, 200)
//!     .flatten()
//!     .take(1)
//!     .collect();
//! assert_eq!(accepted.len(), 1);
//! ```

mod error;
mod layer;
mod predicate;
mod worker;

pub use crate::{
    error::GeneratorError,
    layer::PuzzleLayer,
    worker::{Factory, FactoryConfig, GenerationStream},
};
