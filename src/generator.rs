//! Board generation.
//!
//! A fresh board is produced by backtracking colorization: the layout's
//! cells are marked as a skeleton of still-occupied slots, and the search
//! repeatedly picks two selectable slots to strip, recursing until the
//! skeleton is consumed. Unwinding from success assigns the pile's value
//! pairs to the stripped slots, so the finished board can always be cleared
//! by replaying the same removals: the search literally is an exhaustive
//! hunt for one full pair-removal order.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::engine::{
    selectable_positions, Board, Chip, Flower, Honor, Occupancy, Position, Suit, MAX_COL_COUNT,
    MAX_HEIGHT, MAX_ROW_COUNT,
};
use crate::layout::{Layout, LAYOUT_SIZE};

/// Number of chips in the standard pile; equals [`LAYOUT_SIZE`].
pub const PILE_SIZE: usize = LAYOUT_SIZE;

/// Default limit on candidate-pair attempts for one generation call. The
/// shipped layouts succeed after a few hundred attempts; the limit exists so
/// a pathological template fails with [`GenerateError::BudgetExhausted`]
/// instead of searching indefinitely.
pub const DEFAULT_SEARCH_BUDGET: u64 = 2_000_000;

/// Why board generation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The pairing space was exhausted: no full pair-removal order exists
    /// for the layout.
    NoPairing,
    /// The attempt budget ran out before the search finished.
    BudgetExhausted,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NoPairing => write!(f, "no solvable pairing exists for this layout"),
            GenerateError::BudgetExhausted => {
                write!(f, "search budget exhausted before a pairing was found")
            }
        }
    }
}

/// A generated board together with the witness removal order the search
/// found: replaying `removals` front to back on `board` clears it, each step
/// removing two selectable, matching chips.
#[derive(Clone, Debug)]
pub struct Deal {
    pub board: Board,
    pub removals: Vec<(Position, Position)>,
}

/// The fixed pile: four copies of every suit rank (stones, bamboos,
/// characters, ranks 1..=9), four copies of each wind and dragon, and the
/// eight distinct flower tiles (four plants, four seasons) once each.
///
/// Copies of a value are adjacent, so the pile splits into 72 matching
/// pairs by taking consecutive chunks of two.
pub fn standard_pile() -> Vec<Chip> {
    let mut pile = Vec::with_capacity(PILE_SIZE);

    for rank in 1..=9 {
        for _ in 0..4 {
            pile.push(Chip::Suit(Suit::Stones, rank));
        }
        for _ in 0..4 {
            pile.push(Chip::Suit(Suit::Bamboos, rank));
        }
        for _ in 0..4 {
            pile.push(Chip::Suit(Suit::Characters, rank));
        }
    }
    for rank in 1..=4 {
        for _ in 0..4 {
            pile.push(Chip::Honor(Honor::Winds, rank));
        }
    }
    for rank in 1..=3 {
        for _ in 0..4 {
            pile.push(Chip::Honor(Honor::Dragons, rank));
        }
    }
    for rank in 1..=4 {
        pile.push(Chip::Flower(Flower::Plants, rank));
    }
    for rank in 1..=4 {
        pile.push(Chip::Flower(Flower::Seasons, rank));
    }

    pile
}

/// Shuffles the pile into the 72 value pairs the generator places.
///
/// The two flower groups are shuffled among themselves first, so the group's
/// two pairs are random members (any two flowers of a group match); the
/// pairs are then shuffled as units, keeping every pair internally matching.
fn prepare_pairs(rng: &mut impl Rng) -> Vec<[Chip; 2]> {
    let mut pile = standard_pile();

    let flowers = PILE_SIZE - 8;
    pile[flowers..flowers + 4].shuffle(rng);
    pile[flowers + 4..].shuffle(rng);

    let mut pairs: Vec<[Chip; 2]> = pile.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
    pairs.shuffle(rng);
    pairs
}

/// The generator's working state: which layout cells still await a value.
/// Pending cells count as occupied, so the accessibility evaluator sees the
/// skeleton exactly as a player would see the finished board mid-game.
struct Skeleton {
    grid: [[[bool; MAX_HEIGHT]; MAX_COL_COUNT]; MAX_ROW_COUNT],
}

impl Skeleton {
    fn from_layout(layout: &Layout) -> Self {
        let mut skeleton = Skeleton {
            grid: [[[false; MAX_HEIGHT]; MAX_COL_COUNT]; MAX_ROW_COUNT],
        };
        for cell in layout.cells() {
            skeleton.grid[cell.row as usize][cell.col as usize][cell.level as usize] = true;
        }
        skeleton
    }

    fn clear(&mut self, pos: Position) {
        self.grid[pos.row as usize][pos.col as usize][pos.level as usize] = false;
    }

    fn restore(&mut self, pos: Position) {
        self.grid[pos.row as usize][pos.col as usize][pos.level as usize] = true;
    }
}

impl Occupancy for Skeleton {
    fn occupied(&self, row: i32, col: i32, level: i32) -> bool {
        if row < 0 || row >= MAX_ROW_COUNT as i32 {
            return false;
        }
        if col < 0 || col >= MAX_COL_COUNT as i32 {
            return false;
        }
        if level < 0 || level >= MAX_HEIGHT as i32 {
            return false;
        }
        self.grid[row as usize][col as usize][level as usize]
    }
}

/// One depth of the backtracking search: strip one selectable pair off the
/// skeleton, recurse for the remaining pairs, and on success write the
/// current value pair into the output board at the stripped positions.
///
/// Each frame restores exactly the two cells it cleared before trying the
/// next candidate, so a failed branch leaves the skeleton untouched.
fn colorize(
    skeleton: &mut Skeleton,
    pairs: &[[Chip; 2]],
    out: &mut Board,
    rng: &mut impl Rng,
    budget: &mut u64,
    trace: &mut Vec<(Position, Position)>,
) -> Result<bool, GenerateError> {
    let (pair, rest) = match pairs.split_first() {
        Some(split) => split,
        None => return Ok(true),
    };

    let mut positions = selectable_positions(skeleton);
    if positions.len() < 2 {
        return Ok(false);
    }
    positions.shuffle(rng);

    if rest.is_empty() {
        // Two values left: any two selectable slots can host them.
        out.set(positions[0], Some(pair[0]));
        out.set(positions[1], Some(pair[1]));
        trace.push((positions[0], positions[1]));
        return Ok(true);
    }

    for i in 0..positions.len() - 1 {
        for j in i + 1..positions.len() {
            if *budget == 0 {
                return Err(GenerateError::BudgetExhausted);
            }
            *budget -= 1;

            let (p1, p2) = (positions[i], positions[j]);
            skeleton.clear(p1);
            skeleton.clear(p2);

            if colorize(skeleton, rest, out, rng, budget, trace)? {
                out.set(p1, Some(pair[0]));
                out.set(p2, Some(pair[1]));
                trace.push((p1, p2));
                return Ok(true);
            }

            skeleton.restore(p1);
            skeleton.restore(p2);
        }
    }

    Ok(false)
}

/// Generates a board for `layout` with an explicit attempt budget.
///
/// # Returns
/// A [`Deal`] holding the fully populated board and the witness removal
/// order, or a [`GenerateError`] if no pairing exists or the budget ran out.
pub fn generate_deal_with_budget(
    layout: &Layout,
    rng: &mut impl Rng,
    budget: u64,
) -> Result<Deal, GenerateError> {
    let pairs = prepare_pairs(rng);

    let mut skeleton = Skeleton::from_layout(layout);
    let mut board = Board::new_empty();
    let mut trace = Vec::with_capacity(pairs.len());
    let mut budget = budget;

    if colorize(&mut skeleton, &pairs, &mut board, rng, &mut budget, &mut trace)? {
        // The trace is built while unwinding, deepest frame first; the
        // removal order starts from the full board.
        trace.reverse();
        Ok(Deal {
            board,
            removals: trace,
        })
    } else {
        Err(GenerateError::NoPairing)
    }
}

/// Generates a board for `layout` with the default attempt budget.
pub fn generate_deal(layout: &Layout, rng: &mut impl Rng) -> Result<Deal, GenerateError> {
    generate_deal_with_budget(layout, rng, DEFAULT_SEARCH_BUDGET)
}

/// One-shot board construction: [`generate_deal`] without the witness.
pub fn generate_board(layout: &Layout, rng: &mut impl Rng) -> Result<Board, GenerateError> {
    generate_deal(layout, rng).map(|deal| deal.board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn chip_counts(chips: impl Iterator<Item = Chip>) -> HashMap<Chip, usize> {
        let mut counts = HashMap::new();
        for chip in chips {
            *counts.entry(chip).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_pile_composition() {
        let pile = standard_pile();
        assert_eq!(pile.len(), PILE_SIZE);

        let counts = chip_counts(pile.into_iter());
        for rank in 1..=9 {
            assert_eq!(counts[&Chip::Suit(Suit::Stones, rank)], 4);
            assert_eq!(counts[&Chip::Suit(Suit::Bamboos, rank)], 4);
            assert_eq!(counts[&Chip::Suit(Suit::Characters, rank)], 4);
        }
        for rank in 1..=4 {
            assert_eq!(counts[&Chip::Honor(Honor::Winds, rank)], 4);
            assert_eq!(counts[&Chip::Flower(Flower::Plants, rank)], 1);
            assert_eq!(counts[&Chip::Flower(Flower::Seasons, rank)], 1);
        }
        for rank in 1..=3 {
            assert_eq!(counts[&Chip::Honor(Honor::Dragons, rank)], 4);
        }
    }

    #[test]
    fn test_prepared_pairs_always_match() {
        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pairs = prepare_pairs(&mut rng);
            assert_eq!(pairs.len(), PILE_SIZE / 2);
            for pair in &pairs {
                assert!(pair[0].matches(pair[1]), "{} vs {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_generated_board_fills_exactly_the_layout() {
        for layout in Layout::all() {
            let mut rng = SmallRng::seed_from_u64(42);
            let board = generate_board(&layout, &mut rng)
                .unwrap_or_else(|e| panic!("layout {} failed: {}", layout.name(), e));

            let mut occupied = board.occupied_positions();
            let mut cells = layout.cells().to_vec();
            occupied.sort_by_key(|p| (p.row, p.col, p.level));
            cells.sort_by_key(|p| (p.row, p.col, p.level));
            assert_eq!(occupied, cells, "layout {}", layout.name());
        }
    }

    #[test]
    fn test_generated_board_uses_the_full_pile() {
        let mut rng = SmallRng::seed_from_u64(3);
        let board = generate_board(&Layout::garden(), &mut rng).unwrap();

        let placed = chip_counts(
            board
                .occupied_positions()
                .into_iter()
                .filter_map(|p| board.get(p)),
        );
        let expected = chip_counts(standard_pile().into_iter());
        assert_eq!(placed, expected);
    }

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        let mut rng_a = SmallRng::seed_from_u64(1234);
        let mut rng_b = SmallRng::seed_from_u64(1234);
        let board_a = generate_board(&Layout::turtle(), &mut rng_a).unwrap();
        let board_b = generate_board(&Layout::turtle(), &mut rng_b).unwrap();
        assert_eq!(board_a, board_b);

        let mut rng_c = SmallRng::seed_from_u64(1235);
        let board_c = generate_board(&Layout::turtle(), &mut rng_c).unwrap();
        assert_ne!(board_a, board_c);
    }

    #[test]
    fn test_witness_removals_clear_the_board() {
        for layout in Layout::all() {
            let mut rng = SmallRng::seed_from_u64(99);
            let deal = generate_deal(&layout, &mut rng)
                .unwrap_or_else(|e| panic!("layout {} failed: {}", layout.name(), e));
            assert_eq!(deal.removals.len(), PILE_SIZE / 2);

            let mut board = deal.board.clone();
            for &(a, b) in &deal.removals {
                let selectable = selectable_positions(&board);
                assert!(selectable.contains(&a), "{} not selectable", a);
                assert!(selectable.contains(&b), "{} not selectable", b);

                let chip_a = board.get(a).expect("removal hit an empty slot");
                let chip_b = board.get(b).expect("removal hit an empty slot");
                assert!(chip_a.matches(chip_b), "{} vs {}", chip_a, chip_b);

                board.set(a, None);
                board.set(b, None);
            }
            assert_eq!(board.chip_count(), 0, "layout {}", layout.name());
        }
    }

    #[test]
    fn test_zero_budget_reports_exhaustion() {
        let mut rng = SmallRng::seed_from_u64(5);
        let result = generate_deal_with_budget(&Layout::garden(), &mut rng, 0);
        assert_eq!(result.unwrap_err(), GenerateError::BudgetExhausted);
    }
}
