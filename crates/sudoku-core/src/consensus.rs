//! Layer-1 consensus engine.
//!
//! For an empty cell, case-analyzes every digit's possible positions within
//! each region (row, column, block) it could occupy: if placing the digit
//! at every *other* candidate position and saturating Layer-0 singles
//! everywhere except the cell under study always forces the same digit
//! there, that digit is a consensus witness. Depth-bounded: each branch
//! only ever applies Layer-0 propagation, never nested case analysis.
//!
//! The required witness count is `|P \ {(i,j)}|` — every position *other*
//! than the cell itself must force the digit, not `|P|`.

use crate::{Digit, DigitSet, Grid, Position, PositionSet, layer0};

/// `Consensus(pos)`: a singleton `DigitSet` if depth-1 case analysis forces
/// a unique digit, else empty.
pub(crate) fn consensus(grid: &Grid, pos: Position) -> DigitSet {
    if grid.get(pos).is_some() {
        return DigitSet::empty();
    }

    let side = grid.side();
    let block_side = grid.block_side();
    let regions: Vec<PositionSet> = (0..side)
        .map(|row| PositionSet::from_positions(side, Position::row_positions(row, side)))
        .chain((0..side).map(|col| PositionSet::from_positions(side, Position::col_positions(col, side))))
        .chain(
            (0..side)
                .map(|block| PositionSet::from_positions(side, Position::block_positions(block, block_side))),
        )
        .collect();

    let mut found: Option<Digit> = None;
    for region in &regions {
        for digit in Digit::all(side) {
            let candidates = PositionSet::from_positions(
                side,
                region
                    .iter()
                    .filter(|&p| grid.get(p).is_none() && layer0::plain(grid, p).contains(digit)),
            );
            let others = candidates.removed(pos);
            if others.is_empty() {
                continue;
            }
            let mut witnesses = Vec::with_capacity(others.len() as usize);
            for p in others.iter() {
                let Ok(branch) = grid.with(p.row(), p.col(), digit.value()) else {
                    continue;
                };
                let (saturated, _placements) = layer0::saturate_except(&branch, pos);
                if let Some(v) = layer0::combined(&saturated, pos).as_singleton() {
                    witnesses.push(v);
                }
            }
            if witnesses.len() as u32 == others.len() && witnesses.iter().all(|&v| v == witnesses[0]) {
                let forced = witnesses[0];
                match found {
                    None => found = Some(forced),
                    Some(existing) if existing == forced => {}
                    Some(_) => return DigitSet::empty(), // disagreement: no consensus
                }
            }
        }
    }
    found.map_or(DigitSet::empty(), DigitSet::singleton)
}
