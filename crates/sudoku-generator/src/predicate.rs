//! The layer predicates an attempt's working grid must satisfy.

use sudoku_core::{CandidateLayer, Grid};

use crate::PuzzleLayer;

/// Whether `grid` (with `removed_count` cells cleared out of `area` total
/// cells) satisfies `layer`'s predicate.
pub(crate) fn holds(grid: &Grid, layer: PuzzleLayer, removed_count: u32, ratio: f64) -> bool {
    let naked_empty = grid.all_candidates(CandidateLayer::Layer0NakedSingle).is_empty();
    let hidden_empty = grid.all_candidates(CandidateLayer::Layer0HiddenSingle).is_empty();
    match layer {
        PuzzleLayer::NakedSingle => {
            let area = u32::from(grid.area());
            let min_removed = (f64::from(area) * ratio).ceil() as u32;
            removed_count >= min_removed && hidden_empty && !naked_empty
        }
        PuzzleLayer::HiddenSingle => naked_empty && !hidden_empty,
        PuzzleLayer::Consensus => {
            naked_empty
                && hidden_empty
                && !grid.all_candidates(CandidateLayer::Layer1Consensus).is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::Position;

    #[test]
    fn test_naked_single_target_requires_ratio_and_no_hidden() {
        // One naked single, no hidden singles.
        let grid = Grid::from_rows(&[
            vec![0, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ])
        .unwrap();
        // Only one cell removed out of 16: ceil(0.25 * 16) = 4, so this
        // grid does not meet the ratio yet.
        assert!(!holds(&grid, PuzzleLayer::NakedSingle, 1, 0.25));
        assert!(holds(&grid, PuzzleLayer::NakedSingle, 4, 0.25));
    }

    #[test]
    fn test_hidden_single_target_requires_no_naked() {
        let grid = Grid::from_rows(&[
            vec![0, 1, 0, 0],
            vec![2, 0, 0, 1],
            vec![0, 0, 4, 0],
            vec![0, 3, 0, 0],
        ])
        .unwrap();
        let any_naked = Position::all(4)
            .any(|p| !grid.candidates(CandidateLayer::Layer0NakedSingle, p).unwrap().is_empty());
        assert!(!any_naked, "fixture should have no naked singles");
        assert!(holds(&grid, PuzzleLayer::HiddenSingle, 0, 0.25));
    }

    #[test]
    fn test_consensus_target_requires_no_naked_or_hidden() {
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
        assert!(holds(&grid, PuzzleLayer::Consensus, 0, 0.25));
        assert!(!holds(&grid, PuzzleLayer::NakedSingle, 0, 0.25));
        assert!(!holds(&grid, PuzzleLayer::HiddenSingle, 0, 0.25));
    }
}
