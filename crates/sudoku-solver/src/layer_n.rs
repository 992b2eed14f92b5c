//! The LayerN candidate engine.
//!
//! For each digit, places it at the queried cell and asks the [`solve`]
//! backtracking search for a single completion; the digit belongs to the
//! result iff at least one exists. This is the one candidate layer
//! `sudoku-core` cannot answer on its own (it needs a solver), hence its
//! home in this crate rather than `Grid::candidates`.

use sudoku_core::{Digit, DigitSet, Grid, Position};

use crate::solve;

/// Digits that leave `grid` globally solvable when placed at `pos`.
///
/// Expensive (one bounded solver run per candidate digit): callers should
/// typically invoke this only for small boards or a handful of cells.
#[must_use]
pub fn layer_n_candidates(grid: &Grid, pos: Position) -> DigitSet {
    if grid.get(pos).is_some() || !pos.in_bounds(grid.side()) {
        return DigitSet::empty();
    }
    Digit::all(grid.side())
        .filter(|&digit| {
            let Ok(candidate_grid) = grid.with(pos.row(), pos.col(), digit.value()) else {
                return false;
            };
            matches!(solve(&candidate_grid, Some(1)), Ok(mut solutions) if solutions.next().is_some())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_n_agrees_with_unique_completion() {
        let grid = Grid::from_rows(&[
            vec![0, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ])
        .unwrap();
        let pos = Position::new(0, 0);
        let set = layer_n_candidates(&grid, pos);
        assert_eq!(set.as_singleton(), Some(Digit::new(1).unwrap()));
    }

    #[test]
    fn test_filled_cell_has_no_layer_n_candidates() {
        let grid = Grid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ])
        .unwrap();
        assert!(layer_n_candidates(&grid, Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_consensus_implies_solvability() {
        let rows = vec![
            vec![2, 7, 1, 8, 9, 6, 0, 0, 0],
            vec![9, 4, 3, 5, 2, 7, 6, 8, 1],
            vec![8, 5, 6, 3, 1, 4, 7, 9, 2],
            vec![4, 8, 0, 0, 0, 0, 0, 2, 0],
            vec![6, 3, 0, 0, 0, 0, 0, 0, 0],
            vec![5, 1, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 9, 5, 0, 0, 0, 0, 7, 0],
            vec![7, 2, 4, 0, 3, 8, 5, 0, 9],
            vec![1, 6, 8, 0, 0, 0, 2, 4, 3],
        ];
        let grid = Grid::from_rows(&rows).unwrap();
        let mut checked_any = false;
        for candidate in grid.all_candidates(sudoku_core::CandidateLayer::Layer1Consensus) {
            checked_any = true;
            let with_witness = grid
                .with(candidate.position.row(), candidate.position.col(), candidate.value.value())
                .unwrap();
            let mut solutions = solve(&with_witness, Some(1)).unwrap();
            assert!(
                solutions.next().is_some(),
                "consensus witness at {} should leave the grid solvable",
                candidate.position
            );
        }
        assert!(checked_any, "fixture grid should have at least one consensus candidate");
    }

    mod property_tests {
        use proptest::prelude::*;
        use sudoku_core::CandidateLayer;

        use super::*;

        const BASE_SOLUTION: [[u8; 4]; 4] = [
            [1, 2, 3, 4],
            [3, 4, 1, 2],
            [2, 1, 4, 3],
            [4, 3, 2, 1],
        ];

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(16))]

            #[test]
            fn test_agreement_on_uniquely_solvable_grid(row in 0u8..4, col in 0u8..4) {
                // Clearing exactly one cell from a full valid grid yields a
                // grid with exactly one completion (the original digit);
                // Combined and LayerN must agree on it.
                let solution_digit = BASE_SOLUTION[usize::from(row)][usize::from(col)];
                let mut rows: Vec<Vec<u8>> = BASE_SOLUTION.iter().map(|r| r.to_vec()).collect();
                rows[usize::from(row)][usize::from(col)] = 0;
                let grid = Grid::from_rows(&rows).unwrap();
                let pos = Position::new(row, col);

                let solutions: Vec<_> = solve(&grid, Some(2)).unwrap().collect();
                prop_assert_eq!(solutions.len(), 1);
                prop_assert_eq!(solutions[0].get(pos).unwrap().value(), solution_digit);

                let combined = grid.candidates(CandidateLayer::Layer0Combined, pos).unwrap();
                prop_assert!(!combined.is_empty());
                prop_assert!(combined.contains(Digit::new(solution_digit).unwrap()));

                let layer_n = layer_n_candidates(&grid, pos);
                prop_assert!(layer_n.contains(Digit::new(solution_digit).unwrap()));
            }

            #[test]
            fn test_completion_correctness(row in 0u8..4, col in 0u8..4) {
                let mut rows: Vec<Vec<u8>> = BASE_SOLUTION.iter().map(|r| r.to_vec()).collect();
                rows[usize::from(row)][usize::from(col)] = 0;
                let grid = Grid::from_rows(&rows).unwrap();
                for solution in solve(&grid, Some(4)).unwrap() {
                    prop_assert!(solution.is_full());
                    for p in Position::all(4) {
                        if let Some(d) = grid.get(p) {
                            prop_assert_eq!(solution.get(p), Some(d));
                        }
                    }
                }
            }
        }
    }
}
