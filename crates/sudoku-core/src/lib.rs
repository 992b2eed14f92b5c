//! Core data structures for the depth-bounded Sudoku reasoning engine.
//!
//! This crate provides the immutable [`Grid`] value type and the Layer-0
//! (Plain / Naked Single / Hidden Single / Combined) and Layer-1 (Consensus)
//! candidate engines that are pure functions of a `Grid`. The remaining
//! components — the backtracking solver, the LayerN engine (which needs the
//! solver), and the parallel puzzle factory — live in the downstream
//! `sudoku-solver` and `sudoku-generator` crates.
//!
//! # Architecture
//!
//! `Grid` generalizes the traditional fixed-9x9 board to any perfect-square
//! side `N` (this system targets `N` in `{4, 9}`). It is a plain value type:
//! equality, hashing, and cloning all operate over `(side, cells)` only. A
//! small per-instance LRU memo cache is attached to every `Grid` to avoid
//! recomputing candidate queries within one logical session, but that cache
//! is never part of a `Grid`'s identity — cloning a `Grid` always starts
//! with a fresh, empty cache.
//!
//! Digit and position sets are represented as bitmasks ([`DigitSet`],
//! [`bitset::PositionSet`]) rather than `HashSet`s: this makes the
//! Plain/Naked/Hidden arithmetic in the Layer-0 engine O(1) per set
//! operation.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{CandidateLayer, Grid, Position};
//!
//! let grid = Grid::from_rows(&[
//!     vec![0, 2, 3, 4],
//!     vec![3, 4, 1, 2],
//!     vec![2, 1, 4, 3],
//!     vec![4, 3, 2, 1],
//! ])
//! .unwrap();
//!
//! let pos = Position::new(0, 0);
//! let combined = grid.candidates(CandidateLayer::Layer0Combined, pos).unwrap();
//! assert_eq!(combined.len(), 1);
//! ```

mod bitset;
mod candidate;
mod consensus;
mod digit;
mod error;
mod grid;
mod layer0;
mod memo;
mod position;

pub use crate::{
    bitset::{DigitSet, PositionSet},
    candidate::{Candidate, CandidateLayer},
    digit::Digit,
    error::GridError,
    grid::Grid,
    position::Position,
};
