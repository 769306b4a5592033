//! Occlusion ordering for rendering.
//!
//! Tiles overlap on screen: a tile one level up is shifted towards the
//! viewer, and same-level tiles on the half-step pitch overlap their
//! neighbours' footprints. `draw_order` produces a sequence in which every
//! tile precedes the tiles it covers; a renderer consumes it in reverse to
//! paint back-to-front.

use crate::engine::Position;

/// Whether the tile at `upper` is painted in front of the tile at `lower`,
/// and therefore must be emitted before it.
///
/// `upper` covers `lower` iff:
/// - `upper` sits at a strictly higher level; or
/// - at the same level, `upper` is at most one row away and to the left
///   (left-hand tiles overlap the step of their right-hand neighbours); or
/// - at the same level, `upper` is exactly two rows up within one column of
///   `lower` (half-step rows overlap the row above them).
///
/// Every same-level edge strictly decreases either the column or the row of
/// the covering tile, so the relation cannot form cycles for any set of
/// distinct positions.
pub fn covers(upper: Position, lower: Position) -> bool {
    if upper.level != lower.level {
        return upper.level > lower.level;
    }
    ((upper.row - lower.row).abs() <= 1 && upper.col < lower.col)
        || (upper.row == lower.row - 2 && (upper.col - lower.col).abs() <= 1)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Generic depth-first topological ordering.
///
/// Emits every item after recursively emitting all items reachable from it
/// through `edge`, where `edge(a, b)` means "b must be emitted before a".
/// Visits items in input order, so the result is deterministic.
///
/// # Returns
/// The ordered items, or an error naming the offending item if `edge`
/// contains a cycle.
pub fn topological_order<T, F>(items: &[T], edge: F) -> Result<Vec<T>, String>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    fn visit<T, F>(
        n: usize,
        items: &[T],
        edge: &F,
        marks: &mut [Mark],
        order: &mut Vec<T>,
    ) -> Result<(), String>
    where
        T: Copy,
        F: Fn(T, T) -> bool,
    {
        match marks[n] {
            Mark::Done => return Ok(()),
            Mark::InProgress => {
                return Err(format!("cycle detected at item index {}", n));
            }
            Mark::Unvisited => {}
        }
        marks[n] = Mark::InProgress;

        for m in 0..items.len() {
            if m != n && edge(items[n], items[m]) {
                visit(m, items, edge, marks, order)?;
            }
        }

        marks[n] = Mark::Done;
        order.push(items[n]);
        Ok(())
    }

    let mut marks = vec![Mark::Unvisited; items.len()];
    let mut order = Vec::with_capacity(items.len());
    for n in 0..items.len() {
        visit(n, items, &edge, &mut marks, &mut order)?;
    }
    Ok(order)
}

/// Computes the draw order for a set of occupied positions: a permutation of
/// the input in which every tile appears before the tiles it covers.
/// Rendering consumes the sequence from last to first to paint back-to-front.
///
/// The covers relation is acyclic for any position set, so this cannot fail;
/// the cycle guard in [`topological_order`] protects against other, possibly
/// inconsistent, relations.
pub fn draw_order(positions: &[Position]) -> Result<Vec<Position>, String> {
    topological_order(positions, |a, b| covers(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_board;
    use crate::layout::Layout;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_higher_level_covers() {
        let below = Position::new(4, 6, 0);
        let above = Position::new(4, 6, 1);
        assert!(covers(above, below));
        assert!(!covers(below, above));
    }

    #[test]
    fn test_left_neighbour_covers_within_one_row() {
        let right = Position::new(4, 8, 0);
        for row in 3..=5 {
            let left = Position::new(row, 6, 0);
            assert!(covers(left, right), "row {}", row);
            assert!(!covers(right, left), "row {}", row);
        }
        // Two rows off, the lateral clause no longer applies.
        assert!(!covers(Position::new(6, 6, 0), right));
    }

    #[test]
    fn test_half_step_row_covers_row_above() {
        let upper = Position::new(5, 8, 0);
        let lower = Position::new(7, 8, 0);
        assert!(covers(upper, lower));
        assert!(!covers(lower, upper));
        // Outside the lateral band there is no overlap.
        assert!(!covers(Position::new(5, 12, 0), lower));
    }

    #[test]
    fn test_stacked_pair_draw_order() {
        let below = Position::new(2, 2, 0);
        let above = Position::new(2, 2, 1);
        let order = draw_order(&[below, above]).unwrap();
        let idx_above = order.iter().position(|&p| p == above).unwrap();
        let idx_below = order.iter().position(|&p| p == below).unwrap();
        assert!(idx_above < idx_below);
    }

    #[test]
    fn test_draw_order_is_consistent_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = generate_board(&Layout::turtle(), &mut rng).unwrap();
        let positions = board.occupied_positions();
        let order = draw_order(&positions).unwrap();

        let input: HashSet<_> = positions.iter().collect();
        let output: HashSet<_> = order.iter().collect();
        assert_eq!(order.len(), positions.len());
        assert_eq!(input, output);

        // No emitted tile is covered by a later one.
        for (i, &earlier) in order.iter().enumerate() {
            for &later in &order[i + 1..] {
                assert!(
                    !covers(later, earlier),
                    "{} covers {} but is emitted after it",
                    later,
                    earlier
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(draw_order(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_cycle_is_reported() {
        // The covers relation itself cannot cycle; feed the generic sort an
        // artificial relation that does.
        let items = [0usize, 1, 2];
        let result = topological_order(&items, |a, b| (a + 1) % 3 == b);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cycle"));
    }
}
