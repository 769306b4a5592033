//! Core board model for the stepped tile solitaire.
//!
//! This module defines the game's fundamental components:
//! - `Chip`: the tile values (suits, honors and the two flower groups) and
//!   the pairing predicate `Chip::matches`.
//! - `Position`: a (row, column, level) coordinate triple.
//! - `Board`: the dense 3D grid of tile slots with bounds-silent access.
//! - The accessibility evaluator: `column_height`, `selectable_level` and
//!   `selectable_positions`, which decide which tiles may currently be
//!   picked.
//!
//! Tiles sit on a 2-column/2-row pitch: a tile at `(row, col)` visually
//! spans two grid columns and two grid rows, which is why layouts place
//! same-level tiles two cells apart and why the accessibility rule probes
//! the 3×3 neighbourhood and the columns two to each side.

use std::fmt;

/// Number of rows a board can address.
pub const MAX_ROW_COUNT: usize = 18;
/// Number of columns a board can address.
pub const MAX_COL_COUNT: usize = 32;
/// Number of stacking levels a board can address.
pub const MAX_HEIGHT: usize = 16;

/// One of the three ordinary suits, each ranked 1..=9 with four copies per
/// rank in the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Stones,
    Bamboos,
    Characters,
}

/// Honor tiles: four winds (ranks 1..=4) and three dragons (ranks 1..=3),
/// four copies each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Honor {
    Winds,
    Dragons,
}

/// The two decorative flower groups, four distinct tiles each. Any member of
/// a group pairs with any other member of the same group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flower {
    Plants,
    Seasons,
}

/// A single playable tile value.
///
/// An empty board slot is represented as `Option::<Chip>::None`; there is no
/// reserved "empty" chip value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chip {
    /// Suit tile with rank 1..=9.
    Suit(Suit, u8),
    /// Honor tile; winds rank 1..=4, dragons rank 1..=3.
    Honor(Honor, u8),
    /// Flower tile with rank 1..=4.
    Flower(Flower, u8),
}

impl Chip {
    /// The pairing predicate: decides whether two tiles may be removed
    /// together.
    ///
    /// Suit and honor tiles match only their exact equals. Flower tiles
    /// match any member of the same flower group, regardless of rank. The
    /// predicate is symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use mahjong_solitaire::engine::{Chip, Flower, Suit};
    /// assert!(Chip::Suit(Suit::Stones, 5).matches(Chip::Suit(Suit::Stones, 5)));
    /// assert!(!Chip::Suit(Suit::Stones, 5).matches(Chip::Suit(Suit::Stones, 6)));
    /// assert!(Chip::Flower(Flower::Plants, 1).matches(Chip::Flower(Flower::Plants, 4)));
    /// assert!(!Chip::Flower(Flower::Plants, 1).matches(Chip::Flower(Flower::Seasons, 1)));
    /// ```
    pub fn matches(self, other: Chip) -> bool {
        match (self, other) {
            (Chip::Flower(a, _), Chip::Flower(b, _)) => a == b,
            _ => self == other,
        }
    }

    /// Two-character code used for text display, e.g. `S5` (stones five),
    /// `W2` (second wind), `E3` (third season).
    pub fn code(self) -> String {
        let (letter, rank) = match self {
            Chip::Suit(Suit::Stones, r) => ('S', r),
            Chip::Suit(Suit::Bamboos, r) => ('B', r),
            Chip::Suit(Suit::Characters, r) => ('C', r),
            Chip::Honor(Honor::Winds, r) => ('W', r),
            Chip::Honor(Honor::Dragons, r) => ('D', r),
            Chip::Flower(Flower::Plants, r) => ('P', r),
            Chip::Flower(Flower::Seasons, r) => ('E', r),
        };
        format!("{}{}", letter, rank)
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A board coordinate: row, column and stacking level.
///
/// Coordinates are signed so callers can freely probe out-of-range
/// neighbours; every accessor treats out-of-range coordinates as empty.
/// Two positions are equal iff all three coordinates match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
    pub level: i32,
}

impl Position {
    pub fn new(row: i32, col: i32, level: i32) -> Self {
        Position { row, col, level }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.level)
    }
}

/// Occupancy view of a stacked grid.
///
/// The accessibility evaluator only needs to know which slots hold a tile,
/// so it is written against this trait and works both on a playable `Board`
/// and on the generator's skeleton (where cells awaiting a value count as
/// occupied).
///
/// Implementations must report out-of-range coordinates as unoccupied.
pub trait Occupancy {
    fn occupied(&self, row: i32, col: i32, level: i32) -> bool;
}

/// Returns the 1-based height of the column stack at `(row, col)`: one plus
/// the highest occupied level, found by scanning from the top level
/// downward. An empty or out-of-range column has height 0.
pub fn column_height<O: Occupancy>(occ: &O, row: i32, col: i32) -> i32 {
    for level in (0..MAX_HEIGHT as i32).rev() {
        if occ.occupied(row, col, level) {
            return level + 1;
        }
    }
    0
}

/// Decides whether the tile on top of the column stack at `(row, col)` may
/// currently be picked, returning its level if so.
///
/// With `h` the column height, the top tile is selectable iff:
/// 1. none of the 8 neighbouring columns (the 3×3 block minus the centre)
///    reaches height `h` or above: an equal-or-taller neighbour overlaps
///    the tile's footprint and boxes it in at its own height; and
/// 2. it is not blocked on both lateral sides: `left` holds iff any of the
///    three cells `(row-1..=row+1, col-2)` is occupied at level `h-1`,
///    `right` is the mirror check at `col+2`, and `left && right` blocks
///    the tile. One open side within the 2-column reach suffices.
///
/// # Returns
/// `Some(top_level)` when the tile is selectable, `None` when the column is
/// empty or the tile is blocked.
pub fn selectable_level<O: Occupancy>(occ: &O, row: i32, col: i32) -> Option<i32> {
    let h = column_height(occ, row, col);
    if h == 0 {
        return None;
    }

    for di in -1..=1 {
        for dj in -1..=1 {
            if di == 0 && dj == 0 {
                continue;
            }
            if column_height(occ, row + di, col + dj) >= h {
                return None;
            }
        }
    }

    let level = h - 1;
    let left = (-1..=1).any(|di| occ.occupied(row + di, col - 2, level));
    let right = (-1..=1).any(|di| occ.occupied(row + di, col + 2, level));
    if left && right {
        return None;
    }

    Some(level)
}

/// Computes the full set of currently selectable positions, scanning rows
/// then columns so the result order is deterministic. Each entry carries the
/// resolved top level of its stack. An empty board yields an empty vector.
///
/// # Examples
///
/// ```
/// use mahjong_solitaire::engine::selectable_positions;
/// use mahjong_solitaire::utils::board_from_heights;
///
/// // Two tiles two columns apart: each has one open lateral side.
/// let board = board_from_heights(&["1.1"]).unwrap();
/// assert_eq!(selectable_positions(&board).len(), 2);
/// ```
pub fn selectable_positions<O: Occupancy>(occ: &O) -> Vec<Position> {
    let mut positions = Vec::new();
    for row in 0..MAX_ROW_COUNT as i32 {
        for col in 0..MAX_COL_COUNT as i32 {
            if let Some(level) = selectable_level(occ, row, col) {
                positions.push(Position::new(row, col, level));
            }
        }
    }
    positions
}

/// The playing board: a dense 3D grid of tile slots.
///
/// All access is bounds-silent: reading an out-of-range coordinate yields
/// `None` and writing one is ignored. Callers routinely probe neighbouring
/// out-of-range cells, so this degradation is part of the contract rather
/// than an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[[Option<Chip>; MAX_HEIGHT]; MAX_COL_COUNT]; MAX_ROW_COUNT],
}

impl Board {
    /// Creates a board with every slot empty.
    ///
    /// # Examples
    /// ```
    /// use mahjong_solitaire::engine::{Board, Position};
    /// let board = Board::new_empty();
    /// assert_eq!(board.get(Position::new(0, 0, 0)), None);
    /// ```
    pub fn new_empty() -> Self {
        Board {
            grid: [[[None; MAX_HEIGHT]; MAX_COL_COUNT]; MAX_ROW_COUNT],
        }
    }

    fn in_range(pos: Position) -> bool {
        pos.row >= 0
            && pos.row < MAX_ROW_COUNT as i32
            && pos.col >= 0
            && pos.col < MAX_COL_COUNT as i32
            && pos.level >= 0
            && pos.level < MAX_HEIGHT as i32
    }

    /// Returns the chip at `pos`, or `None` if the slot is empty or any
    /// coordinate is out of range.
    pub fn get(&self, pos: Position) -> Option<Chip> {
        if !Self::in_range(pos) {
            return None;
        }
        self.grid[pos.row as usize][pos.col as usize][pos.level as usize]
    }

    /// Writes `chip` at `pos`. Out-of-range writes are ignored.
    pub fn set(&mut self, pos: Position, chip: Option<Chip>) {
        if !Self::in_range(pos) {
            return;
        }
        self.grid[pos.row as usize][pos.col as usize][pos.level as usize] = chip;
    }

    /// Every occupied position, scanned row-major, then by column, then by
    /// level bottom-up. This is the input the draw orderer expects.
    pub fn occupied_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..MAX_ROW_COUNT as i32 {
            for col in 0..MAX_COL_COUNT as i32 {
                for level in 0..MAX_HEIGHT as i32 {
                    let pos = Position::new(row, col, level);
                    if self.get(pos).is_some() {
                        positions.push(pos);
                    }
                }
            }
        }
        positions
    }

    /// Number of chips currently on the board.
    pub fn chip_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Generates a top-view string representation of the board, trimmed to
    /// the occupied area, with row and column headers. If `highlight` is
    /// `Some((row, col))`, that cell is marked with a `>` in place of the
    /// column separator.
    ///
    /// Each cell shows the code of the chip on top of its stack, or `..`
    /// when the column is empty.
    pub fn to_string_top_view(&self, highlight: Option<(i32, i32)>) -> String {
        let occupied = self.occupied_positions();
        if occupied.is_empty() {
            return String::from("(empty board)");
        }

        let max_row = occupied.iter().map(|p| p.row).max().unwrap_or(0);
        let max_col = occupied.iter().map(|p| p.col).max().unwrap_or(0);

        let mut output = String::new();
        output.push_str("   ");
        for col in 0..=max_col {
            output.push_str(&format!("{:<3}", col % 100));
        }
        output.push('\n');

        for row in 0..=max_row {
            output.push_str(&format!("{:>2} ", row));
            for col in 0..=max_col {
                let marker = if highlight == Some((row, col)) { '>' } else { ' ' };
                let h = column_height(self, row, col);
                if h == 0 {
                    output.push_str(&format!("{}..", marker));
                } else {
                    let top = Position::new(row, col, h - 1);
                    match self.get(top) {
                        Some(chip) => output.push_str(&format!("{}{}", marker, chip.code())),
                        None => output.push_str(&format!("{}??", marker)),
                    }
                }
            }
            if row < max_row {
                output.push('\n');
            }
        }

        output
    }
}

impl Occupancy for Board {
    fn occupied(&self, row: i32, col: i32, level: i32) -> bool {
        self.get(Position::new(row, col, level)).is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_top_view(None))
    }
}
