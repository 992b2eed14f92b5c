//! Board position and region (row/column/block) utilities.
//!
//! Unlike a fixed-`N=9` board, block geometry depends on the grid's side, so
//! the box-related helpers here take `side`/`block_side` explicitly rather
//! than baking in `9`/`3`.

use std::fmt;

/// A cell position on an `N x N` board: `row` and `col` are both in
/// `0..N` for whatever `N` the owning [`Grid`](crate::Grid) has.
///
/// `Position` itself does not know `N`; bounds are validated by the `Grid`
/// operations that accept one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Builds a position from a `(row, col)` pair, unchecked against any
    /// particular grid side.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The row index.
    #[must_use]
    pub fn row(self) -> u8 {
        self.row
    }

    /// The column index.
    #[must_use]
    pub fn col(self) -> u8 {
        self.col
    }

    /// The row-major linear index of this position on a board of the given
    /// `side`.
    #[must_use]
    pub fn linear_index(self, side: u8) -> u16 {
        u16::from(self.row) * u16::from(side) + u16::from(self.col)
    }

    /// Builds a position back from a row-major linear index.
    #[must_use]
    pub fn from_linear_index(index: u16, side: u8) -> Self {
        let side = u16::from(side);
        Self {
            row: (index / side) as u8,
            col: (index % side) as u8,
        }
    }

    /// Whether `self` lies within a board of the given `side`.
    #[must_use]
    pub fn in_bounds(self, side: u8) -> bool {
        self.row < side && self.col < side
    }

    /// The row-major index (`0..side`) of the block containing this
    /// position, given the board's `block_side` (`block_side = sqrt(side)`).
    #[must_use]
    pub fn block_index(self, block_side: u8) -> u8 {
        (self.row / block_side) * block_side + (self.col / block_side)
    }

    /// Whether `self` and `other` share a row, column, or block.
    #[must_use]
    pub fn shares_house_with(self, other: Self, block_side: u8) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.block_index(block_side) == other.block_index(block_side)
    }

    /// All positions on a board of the given `side`, in row-major order.
    pub fn all(side: u8) -> impl Iterator<Item = Self> {
        (0..side).flat_map(move |row| (0..side).map(move |col| Self { row, col }))
    }

    /// The positions making up row `row` of a board of the given `side`, in
    /// column order.
    pub fn row_positions(row: u8, side: u8) -> impl Iterator<Item = Self> {
        (0..side).map(move |col| Self { row, col })
    }

    /// The positions making up column `col` of a board of the given `side`,
    /// in row order.
    pub fn col_positions(col: u8, side: u8) -> impl Iterator<Item = Self> {
        (0..side).map(move |row| Self { row, col })
    }

    /// The positions making up block `block` (row-major block index) of a
    /// board with the given `block_side`, in row-major order within the
    /// block.
    pub fn block_positions(block: u8, block_side: u8) -> impl Iterator<Item = Self> {
        let row0 = (block / block_side) * block_side;
        let col0 = (block % block_side) * block_side;
        (0..block_side)
            .flat_map(move |dr| (0..block_side).map(move |dc| (dr, dc)))
            .map(move |(dr, dc)| Self {
                row: row0 + dr,
                col: col0 + dc,
            })
    }

    /// Every other position on the board that shares a row, column, or block
    /// with `self` (i.e. every "house peer"), in row-major order, excluding
    /// `self`.
    pub fn house_peers(self, side: u8, block_side: u8) -> impl Iterator<Item = Self> {
        Self::all(side).filter(move |&p| p != self && p.shares_house_with(self, block_side))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_index_roundtrip() {
        for side in [4, 9] {
            for p in Position::all(side) {
                let idx = p.linear_index(side);
                assert_eq!(Position::from_linear_index(idx, side), p);
            }
        }
    }

    #[test]
    fn test_block_index_groups_correctly_for_side_9() {
        let block_side = 3;
        assert_eq!(Position::new(0, 0).block_index(block_side), 0);
        assert_eq!(Position::new(0, 3).block_index(block_side), 1);
        assert_eq!(Position::new(4, 4).block_index(block_side), 4);
        assert_eq!(Position::new(8, 8).block_index(block_side), 8);
    }

    #[test]
    fn test_block_positions_for_side_4() {
        let block_side = 2;
        let cells: Vec<_> = Position::block_positions(3, block_side).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_house_peers_excludes_self_and_counts_correctly() {
        let side = 9;
        let block_side = 3;
        let peers: Vec<_> = Position::new(4, 4).house_peers(side, block_side).collect();
        // row peers (8) + col peers (8) + block peers (8) - double counted (row&block: 2, col&block: 2) = 20
        assert_eq!(peers.len(), 20);
        assert!(!peers.contains(&Position::new(4, 4)));
    }

    #[test]
    fn test_shares_house_with_is_symmetric() {
        let block_side = 3;
        let a = Position::new(1, 1);
        let b = Position::new(1, 7);
        assert!(a.shares_house_with(b, block_side));
        assert!(b.shares_house_with(a, block_side));
    }
}
