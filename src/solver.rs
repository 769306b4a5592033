//! Depth-first pair-removal search.
//!
//! Finds a sequence of legal matches that clears a board, independently of
//! the generator's own witness. Used by the `auto_player` binary and by the
//! tests that confirm generated boards really are solvable by play alone.

use std::collections::HashSet;

use crate::engine::{selectable_positions, Board, Position};

/// A winning removal sequence found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Matched pairs in removal order; replaying them clears the board.
    pub removals: Vec<(Position, Position)>,
}

/// Searches for a sequence of matches clearing `board`.
///
/// The search walks every unordered pair of matching selectable tiles in
/// scan order, depth first, pruning board states it has already explored.
/// An already-empty board yields an empty solution.
///
/// # Returns
/// `Some(Solution)` when the board can be cleared, `None` when no removal
/// order empties it (for generated boards this does not happen).
pub fn solve(board: &Board) -> Option<Solution> {
    let mut board = board.clone();
    let mut visited = HashSet::new();
    let mut removals = Vec::new();
    if search(&mut board, &mut visited, &mut removals) {
        Some(Solution { removals })
    } else {
        None
    }
}

fn search(
    board: &mut Board,
    visited: &mut HashSet<Board>,
    removals: &mut Vec<(Position, Position)>,
) -> bool {
    if board.chip_count() == 0 {
        return true;
    }
    if !visited.insert(board.clone()) {
        // Reached via a different move order; already explored.
        return false;
    }

    let selectable = selectable_positions(board);
    for i in 0..selectable.len() {
        for j in i + 1..selectable.len() {
            let (a, b) = (selectable[i], selectable[j]);
            let (chip_a, chip_b) = match (board.get(a), board.get(b)) {
                (Some(chip_a), Some(chip_b)) => (chip_a, chip_b),
                _ => continue,
            };
            if !chip_a.matches(chip_b) {
                continue;
            }

            board.set(a, None);
            board.set(b, None);
            removals.push((a, b));

            if search(board, visited, removals) {
                return true;
            }

            removals.pop();
            board.set(a, Some(chip_a));
            board.set(b, Some(chip_b));
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Chip, Suit};
    use crate::generator::generate_board;
    use crate::layout::Layout;
    use crate::utils::board_from_heights;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn row_board(ranks: &[u8]) -> Board {
        let mut pattern = String::new();
        for i in 0..ranks.len() {
            if i > 0 {
                pattern.push('.');
            }
            pattern.push('1');
        }
        let mut board = board_from_heights(&[pattern.as_str()]).unwrap();
        for (i, &rank) in ranks.iter().enumerate() {
            board.set(
                Position::new(0, 2 * i as i32, 0),
                Some(Chip::Suit(Suit::Stones, rank)),
            );
        }
        board
    }

    fn replay(board: &Board, removals: &[(Position, Position)]) -> Board {
        let mut board = board.clone();
        for &(a, b) in removals {
            let selectable = selectable_positions(&board);
            assert!(selectable.contains(&a) && selectable.contains(&b));
            board.set(a, None);
            board.set(b, None);
        }
        board
    }

    #[test]
    fn test_empty_board_is_already_solved() {
        let solution = solve(&Board::new_empty()).unwrap();
        assert!(solution.removals.is_empty());
    }

    #[test]
    fn test_solves_simple_row() {
        let board = row_board(&[1, 2, 2, 1]);
        let solution = solve(&board).unwrap();
        assert_eq!(solution.removals.len(), 2);
        assert_eq!(replay(&board, &solution.removals).chip_count(), 0);
    }

    #[test]
    fn test_reports_unsolvable_board() {
        // Only the two ends are ever selectable and they never match.
        let board = row_board(&[1, 2, 1, 2]);
        assert!(solve(&board).is_none());
    }

    #[test]
    fn test_solves_generated_board() {
        let mut rng = SmallRng::seed_from_u64(21);
        let board = generate_board(&Layout::garden(), &mut rng).unwrap();
        let solution = solve(&board).expect("generated board must be solvable");
        assert_eq!(solution.removals.len(), 72);
        assert_eq!(replay(&board, &solution.removals).chip_count(), 0);
    }
}
