//! The six candidate layers and the `(value, position)` pairs they emit.

use std::fmt;

use crate::{Digit, Position};

/// A single candidate: a digit that may legally occupy a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// The candidate digit.
    pub value: Digit,
    /// The cell the digit is a candidate for.
    pub position: Position,
}

impl Candidate {
    /// Builds a candidate from a value and a position.
    #[must_use]
    pub fn new(value: Digit, position: Position) -> Self {
        Self { value, position }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.position)
    }
}

/// Which computation a `Grid::candidates` query should perform.
///
/// The first four variants are the Layer-0 single-candidate engine (plain
/// row/column/block elimination, and its Naked-Single / Hidden-Single /
/// Combined refinements); `Layer1Consensus` is the depth-1 region
/// case-analysis engine; `LayerN` asks whether placing each digit leaves the
/// grid globally solvable, which requires a [`Solver`](https://docs.rs/sudoku-solver)
/// and so cannot be answered by `sudoku-core` alone (`Grid::candidates`
/// returns `None` for it; see `sudoku_solver::layer_n_candidates`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateLayer {
    /// Digits not ruled out by row/column/block membership alone.
    Layer0Plain,
    /// The Layer-0 Plain set, only if it has exactly one member.
    Layer0NakedSingle,
    /// The digit forced by house-peer elimination, only if exactly one remains.
    Layer0HiddenSingle,
    /// Naked ∪ Hidden if either is nonempty, else the Plain set.
    Layer0Combined,
    /// The digit forced by depth-1 region case analysis.
    Layer1Consensus,
    /// Digits that leave the grid globally solvable when placed.
    LayerN,
}

impl CandidateLayer {
    /// All six layers, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Layer0Plain,
        Self::Layer0NakedSingle,
        Self::Layer0HiddenSingle,
        Self::Layer0Combined,
        Self::Layer1Consensus,
        Self::LayerN,
    ];
}

impl fmt::Display for CandidateLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Layer0Plain => "Layer0Plain",
            Self::Layer0NakedSingle => "Layer0NakedSingle",
            Self::Layer0HiddenSingle => "Layer0HiddenSingle",
            Self::Layer0Combined => "Layer0Combined",
            Self::Layer1Consensus => "Layer1Consensus",
            Self::LayerN => "LayerN",
        };
        write!(f, "{name}")
    }
}
