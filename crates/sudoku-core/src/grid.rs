//! The immutable `Grid` value type and its candidate-query dispatch.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, Mutex},
};

use crate::{
    Candidate, CandidateLayer, Digit, DigitSet, GridError, Position, consensus, layer0,
    memo::MemoCache,
};

/// An immutable `side x side` Sudoku board.
///
/// Cells hold `0` (empty) or a digit `1..=side`. `side` must be a perfect
/// square (the system targets `side` in `{4, 9}`, though nothing here
/// assumes a specific value beyond what fits in a `u8` and this crate's
/// bitset widths). Two `Grid`s with identical `side` and cell contents are
/// indistinguishable: `Eq`/`Hash`/`Clone` all ignore the per-instance memo
/// cache, so a clone always starts with a fresh, empty cache — the cache is
/// never shared across distinct `Grid`s.
///
/// `Grid` is never mutated in place; [`Grid::with`] returns a new value.
///
/// # Examples
///
/// ```
/// use sudoku_core::{CandidateLayer, Grid, Position};
///
/// let grid = Grid::from_rows(&[
///     vec![0, 2, 3, 4],
///     vec![3, 4, 1, 2],
///     vec![2, 1, 4, 3],
///     vec![4, 3, 2, 1],
/// ])
/// .unwrap();
///
/// let naked = grid
///     .candidates(CandidateLayer::Layer0NakedSingle, Position::new(0, 0))
///     .unwrap();
/// assert_eq!(naked.len(), 1);
/// ```
#[derive(Clone)]
pub struct Grid {
    side: u8,
    cells: Arc<[u8]>,
    cache: Arc<Mutex<MemoCache>>,
}

impl Grid {
    /// Builds a `Grid` from row-major rows of raw cell values (`0` = empty).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidShape`] if `rows` is not square, empty, or
    /// its side length is not a perfect square.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let side = rows.len();
        if side == 0 {
            return Err(GridError::InvalidShape {
                reason: "grid has zero rows".to_owned(),
            });
        }
        if rows.iter().any(|row| row.len() != side) {
            return Err(GridError::InvalidShape {
                reason: format!("every row must have length {side}"),
            });
        }
        let side_u8 = u8::try_from(side).map_err(|_| GridError::InvalidShape {
            reason: format!("side {side} does not fit in a u8"),
        })?;
        let block_side = (f64::from(side_u8)).sqrt().round() as u8;
        if block_side == 0 || block_side * block_side != side_u8 {
            return Err(GridError::InvalidShape {
                reason: format!("side {side} is not a perfect square"),
            });
        }
        let cells: Arc<[u8]> = rows.iter().flatten().copied().collect();
        Ok(Self {
            side: side_u8,
            cells,
            cache: Arc::new(Mutex::new(MemoCache::new(side_u8))),
        })
    }

    /// Returns a new `Grid` identical to `self` except that `(row, col)`
    /// holds `value` (`0` clears the cell). No validity check beyond
    /// bounds: `value` is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `row` or `col` is `>= side()`
    /// (contrast with [`Grid::get`] / [`Grid::candidates`], which silently
    /// treat out-of-bounds positions as queries about nothing).
    pub fn with(&self, row: u8, col: u8, value: u8) -> Result<Self, GridError> {
        let pos = Position::new(row, col);
        if !pos.in_bounds(self.side) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                side: self.side,
            });
        }
        let mut cells = self.cells.to_vec();
        cells[usize::from(pos.linear_index(self.side))] = value;
        Ok(Self {
            side: self.side,
            cells: cells.into(),
            cache: Arc::new(Mutex::new(MemoCache::new(self.side))),
        })
    }

    /// The side length `N`.
    #[must_use]
    pub fn side(&self) -> u8 {
        self.side
    }

    /// The block side `sqrt(N)`.
    #[must_use]
    pub fn block_side(&self) -> u8 {
        (f64::from(self.side)).sqrt().round() as u8
    }

    /// The total cell count `N^2`.
    #[must_use]
    pub fn area(&self) -> u16 {
        u16::from(self.side) * u16::from(self.side)
    }

    /// The digit at `pos`, or `None` if `pos` is empty or out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        Digit::new(self.raw_value(pos))
    }

    /// Whether every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Whether every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    /// The block (row-major index) containing `pos`.
    #[must_use]
    pub fn block_of(&self, pos: Position) -> u8 {
        pos.block_index(self.block_side())
    }

    /// Row `row` as an ordered `N`-tuple, `None` for empty cells.
    #[must_use]
    pub fn row(&self, row: u8) -> Vec<Option<Digit>> {
        Position::row_positions(row, self.side)
            .map(|p| self.get(p))
            .collect()
    }

    /// Column `col` as an ordered `N`-tuple, `None` for empty cells.
    #[must_use]
    pub fn col(&self, col: u8) -> Vec<Option<Digit>> {
        Position::col_positions(col, self.side)
            .map(|p| self.get(p))
            .collect()
    }

    /// Block `block` (row-major block index), flattened row-major within
    /// the block, `None` for empty cells.
    #[must_use]
    pub fn block(&self, block: u8) -> Vec<Option<Digit>> {
        Position::block_positions(block, self.block_side())
            .map(|p| self.get(p))
            .collect()
    }

    /// The grid's contents as row-major `Vec<Vec<u8>>` (`0` = empty), the
    /// serialized form external collaborators use.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        (0..self.side)
            .map(|row| {
                Position::row_positions(row, self.side)
                    .map(|p| self.raw_value(p))
                    .collect()
            })
            .collect()
    }

    /// Answers a candidate query at `pos` for `layer`.
    ///
    /// Returns `None` only for [`CandidateLayer::LayerN`], which requires a
    /// solver and so is answered by `sudoku_solver::layer_n_candidates`
    /// instead. Out-of-bounds `pos` yields `Some(DigitSet::empty())`.
    /// Results are served from this grid's memo cache when available.
    #[must_use]
    pub fn candidates(&self, layer: CandidateLayer, pos: Position) -> Option<DigitSet> {
        if layer == CandidateLayer::LayerN {
            return None;
        }
        if !pos.in_bounds(self.side) {
            return Some(DigitSet::empty());
        }
        let key = (layer, Some(pos));
        if let Some(cached) = self.cache.lock().expect("memo cache mutex poisoned").get(key) {
            return Some(cached);
        }
        let value = self.compute(layer, pos);
        self.cache
            .lock()
            .expect("memo cache mutex poisoned")
            .insert(key, value);
        Some(value)
    }

    /// Enumerates every `(position, value)` candidate for `layer` across the
    /// whole grid, in row-major order. Empty for [`CandidateLayer::LayerN`]
    /// (see [`Grid::candidates`]).
    #[must_use]
    pub fn all_candidates(&self, layer: CandidateLayer) -> Vec<Candidate> {
        if layer == CandidateLayer::LayerN {
            return Vec::new();
        }
        Position::all(self.side)
            .flat_map(|pos| {
                self.candidates(layer, pos)
                    .into_iter()
                    .flat_map(|set| set.iter().map(move |value| Candidate::new(value, pos)))
            })
            .collect()
    }

    fn compute(&self, layer: CandidateLayer, pos: Position) -> DigitSet {
        match layer {
            CandidateLayer::Layer0Plain => layer0::plain(self, pos),
            CandidateLayer::Layer0NakedSingle => layer0::naked_single(self, pos),
            CandidateLayer::Layer0HiddenSingle => layer0::hidden_single(self, pos),
            CandidateLayer::Layer0Combined => layer0::combined(self, pos),
            CandidateLayer::Layer1Consensus => consensus::consensus(self, pos),
            CandidateLayer::LayerN => unreachable!("handled by caller"),
        }
    }

    fn raw_value(&self, pos: Position) -> u8 {
        if !pos.in_bounds(self.side) {
            return 0;
        }
        self.cells[usize::from(pos.linear_index(self.side))]
    }

    pub(crate) fn row_digit_set(&self, row: u8) -> DigitSet {
        Position::row_positions(row, self.side)
            .filter_map(|p| self.get(p))
            .collect()
    }

    pub(crate) fn col_digit_set(&self, col: u8) -> DigitSet {
        Position::col_positions(col, self.side)
            .filter_map(|p| self.get(p))
            .collect()
    }

    pub(crate) fn block_digit_set(&self, block: u8) -> DigitSet {
        Position::block_positions(block, self.block_side())
            .filter_map(|p| self.get(p))
            .collect()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.side.hash(state);
        self.cells.hash(state);
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("side", &self.side)
            .field("cells", &self.cells)
            .finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                let v = self.raw_value(Position::new(row, col));
                if v == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{v:x}")?;
                }
            }
            if f.alternate() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
