//! Layer-0 candidate engine: Plain, Naked Single, Hidden Single, and
//! Combined.
//!
//! These are pure functions of a [`Grid`] and a [`Position`] — no auxiliary
//! propagating structure is maintained, since `Grid` is immutable and `N`
//! is small enough that O(N) recomputation per query is cheap. Determinism
//! (identical `Grid` ⇒ identical sets) falls directly out of that purity.

use crate::{Digit, DigitSet, Grid, Position};

/// `Plain(pos)`: digits not excluded by row, column, or block membership.
///
/// Empty (`DigitSet::empty()`) when `pos` is already filled.
pub(crate) fn plain(grid: &Grid, pos: Position) -> DigitSet {
    if grid.get(pos).is_some() {
        return DigitSet::empty();
    }
    let used = grid
        .row_digit_set(pos.row())
        .union(grid.col_digit_set(pos.col()))
        .union(grid.block_digit_set(grid.block_of(pos)));
    DigitSet::full(grid.side()).difference(used)
}

/// `NakedSingle(pos)`: `Plain(pos)` if it has exactly one member, else empty.
pub(crate) fn naked_single(grid: &Grid, pos: Position) -> DigitSet {
    let plain = plain(grid, pos);
    if plain.len() == 1 { plain } else { DigitSet::empty() }
}

/// `HiddenSingle(pos)`: the subset of `Plain(pos)` not claimed by any other
/// empty house peer's `Plain` set, minus the Naked-Single digit (so Naked
/// and Hidden stay disjoint), kept only if the result is a singleton.
pub(crate) fn hidden_single(grid: &Grid, pos: Position) -> DigitSet {
    let own_plain = plain(grid, pos);
    if own_plain.is_empty() {
        return DigitSet::empty();
    }
    let mut claimed_by_peers = DigitSet::empty();
    for peer in pos.house_peers(grid.side(), grid.block_side()) {
        if grid.get(peer).is_none() {
            claimed_by_peers = claimed_by_peers.union(plain(grid, peer));
        }
    }
    let unclaimed = own_plain.difference(claimed_by_peers);
    let hidden = unclaimed.difference(naked_single(grid, pos));
    if hidden.len() == 1 { hidden } else { DigitSet::empty() }
}

/// `Combined(pos)`: `NakedSingle ∪ HiddenSingle` if either is nonempty, else
/// the full `Plain` set.
pub(crate) fn combined(grid: &Grid, pos: Position) -> DigitSet {
    let naked = naked_single(grid, pos);
    let hidden = hidden_single(grid, pos);
    let singles = naked.union(hidden);
    if singles.is_empty() { plain(grid, pos) } else { singles }
}

/// Applies one round of saturation: repeatedly place the Combined single at
/// any empty cell other than `held_out`, in row-major order, until none
/// remain. Returns the saturated grid and the placements made, in
/// application order. Shared by the Layer-1 consensus engine (and available
/// to any future deeper layer).
///
/// If saturation drives some cell's `Plain` set to empty, that is not an
/// error here: the caller (the consensus engine) treats such a branch as
/// contributing no witness.
pub(crate) fn saturate_except(grid: &Grid, held_out: Position) -> (Grid, Vec<(Position, Digit)>) {
    let mut grid = grid.clone();
    let mut placements = Vec::new();
    loop {
        let side = grid.side();
        let next = Position::all(side)
            .filter(|&p| p != held_out && grid.get(p).is_none())
            .find_map(|p| combined(&grid, p).as_singleton().map(|d| (p, d)));
        let Some((pos, digit)) = next else {
            break;
        };
        grid = grid
            .with(pos.row(), pos.col(), digit.value())
            .expect("pos is in-bounds by construction");
        placements.push((pos, digit));
    }
    (grid, placements)
}
