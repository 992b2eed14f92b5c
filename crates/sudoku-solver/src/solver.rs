//! Backtracking solver with an MRV (minimum-remaining-values) heuristic.
//!
//! `solve` enumerates full completions of a [`Grid`], stopping at an
//! optional cap; an empty result denotes infeasibility (not an error). The
//! only error is [`SolverError::Contradiction`], raised once up front when
//! the input already violates distinctness on its filled cells.

use sudoku_core::{CandidateLayer, Digit, DigitSet, Grid, Position};

use crate::SolverError;

/// Enumerates completions of `grid` satisfying Sudoku's row/column/block
/// distinctness constraints and agreeing with `grid` on every non-zero
/// cell, up to `max_solutions` (unbounded if `None`).
///
/// # Errors
///
/// Returns [`SolverError::Contradiction`] if `grid` already has two equal
/// digits sharing a row, column, or block.
///
/// # Examples
///
/// ```
/// use sudoku_core::Grid;
///
/// let grid = Grid::from_rows(&[vec![0u8; 4]; 4]).unwrap();
/// let solutions: Vec<_> = sudoku_solver::solve(&grid, Some(2))?.collect();
/// assert_eq!(solutions.len(), 2);
/// # Ok::<(), sudoku_solver::SolverError>(())
/// ```
pub fn solve(grid: &Grid, max_solutions: Option<usize>) -> Result<Solutions, SolverError> {
    if !is_consistent(grid) {
        log::debug!("solve: source grid already violates distinctness");
        return Err(SolverError::Contradiction);
    }
    let assumption = find_assumption(grid);
    log::trace!("solve: starting search, cap={max_solutions:?}");
    Ok(Solutions {
        stack: vec![(grid.clone(), assumption)],
        cap: max_solutions,
        emitted: 0,
    })
}

/// Lazy iterator over [`Grid`] completions, produced by [`solve`].
///
/// Implemented as an explicit stack (no recursion): each stack frame holds
/// a `Grid` and the remaining untried digits for its most-constrained empty
/// cell (MRV heuristic).
#[derive(Debug, Clone)]
pub struct Solutions {
    stack: Vec<(Grid, Option<(Position, DigitSet)>)>,
    cap: Option<usize>,
    emitted: usize,
}

impl Iterator for Solutions {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if let Some(cap) = self.cap {
            if self.emitted >= cap {
                return None;
            }
        }
        while let Some((grid, assumption)) = self.stack.pop() {
            let Some((pos, remaining)) = assumption else {
                if is_consistent(&grid) {
                    self.emitted += 1;
                    return Some(grid);
                }
                continue;
            };
            let Some(digit) = remaining.iter().next() else {
                continue;
            };
            let remaining = remaining.removed(digit);
            if !remaining.is_empty() {
                self.stack.push((grid.clone(), Some((pos, remaining))));
            }
            log::trace!("solve: trying {digit} at {pos}");
            let next_grid = grid
                .with(pos.row(), pos.col(), digit.value())
                .expect("pos came from this grid's own position iteration");
            let next_assumption = find_assumption(&next_grid);
            self.stack.push((next_grid, next_assumption));
        }
        None
    }
}

/// Picks the empty cell with the fewest `Plain` candidates (MRV) and
/// returns it with its candidate set; `None` once every cell is filled.
fn find_assumption(grid: &Grid) -> Option<(Position, DigitSet)> {
    Position::all(grid.side())
        .filter(|&p| grid.get(p).is_none())
        .map(|p| {
            (
                p,
                grid.candidates(CandidateLayer::Layer0Plain, p)
                    .expect("Layer0Plain is always answerable"),
            )
        })
        .min_by_key(|(_, set)| set.len())
}

/// Whether every row, column, and block has no repeated digit among its
/// filled cells.
fn is_consistent(grid: &Grid) -> bool {
    let side = grid.side();
    (0..side).all(|i| {
        !has_duplicate(grid.row(i)) && !has_duplicate(grid.col(i)) && !has_duplicate(grid.block(i))
    })
}

fn has_duplicate(cells: Vec<Option<Digit>>) -> bool {
    let mut seen = DigitSet::empty();
    for digit in cells.into_iter().flatten() {
        if seen.contains(digit) {
            return true;
        }
        seen = seen.inserted(digit);
    }
    false
}
