//! Session state for one game in progress.
//!
//! A `Game` owns the board plus the two pieces of derived state the UI layer
//! needs: the selectable-positions snapshot, recomputed from scratch after
//! every board change, and the undo stack of removed chips. The engine
//! functions themselves stay pure; all mutation funnels through
//! `try_match` and `undo_last_match`.

use rand::Rng;

use crate::engine::{selectable_positions, Board, Chip, Position};
use crate::generator::{generate_board, GenerateError};
use crate::layout::Layout;

/// One removed chip, as pushed on the undo stack. Records are pushed two at
/// a time, one per tile of a committed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub position: Position,
    pub chip: Chip,
}

/// A game session: the board and its derived state.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    selectable: Vec<Position>,
    undo_stack: Vec<UndoRecord>,
}

impl Game {
    /// Starts a new game on a freshly generated board for `layout`.
    ///
    /// The undo stack starts empty and the selectable snapshot reflects the
    /// full board.
    pub fn new(layout: &Layout, rng: &mut impl Rng) -> Result<Self, GenerateError> {
        let board = generate_board(layout, rng)?;
        Ok(Game::with_board(board))
    }

    /// Wraps an existing board in a session. Useful for tests and for
    /// restoring a saved game.
    pub fn with_board(board: Board) -> Self {
        let mut game = Game {
            board,
            selectable: Vec::new(),
            undo_stack: Vec::new(),
        };
        game.refresh_selectable();
        game
    }

    /// Returns an immutable reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current selectable-positions snapshot, in row-major scan order.
    pub fn selectable(&self) -> &[Position] {
        &self.selectable
    }

    /// Resolves a (row, column) pick against the snapshot, returning the
    /// full position (with its top level) if that stack is selectable.
    pub fn selectable_at(&self, row: i32, col: i32) -> Option<Position> {
        self.selectable
            .iter()
            .copied()
            .find(|p| p.row == row && p.col == col)
    }

    /// Number of records currently on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Attempts to commit a match of the tiles at `a` and `b`.
    ///
    /// The move is rejected (returning `false`, with no state change) unless
    /// the positions are distinct, both are in the current selectable
    /// snapshot, and their chips satisfy [`Chip::matches`]. On success both
    /// chips are removed, two [`UndoRecord`]s are pushed, and the snapshot
    /// is recomputed. Reaching a terminal state (a cleared board, or no
    /// matching pair left) clears the undo stack.
    pub fn try_match(&mut self, a: Position, b: Position) -> bool {
        if a == b {
            return false;
        }
        if !self.selectable.contains(&a) || !self.selectable.contains(&b) {
            return false;
        }

        let chip_a = match self.board.get(a) {
            Some(chip) => chip,
            None => return false,
        };
        let chip_b = match self.board.get(b) {
            Some(chip) => chip,
            None => return false,
        };
        if !chip_a.matches(chip_b) {
            return false;
        }

        self.board.set(a, None);
        self.board.set(b, None);
        self.undo_stack.push(UndoRecord {
            position: a,
            chip: chip_a,
        });
        self.undo_stack.push(UndoRecord {
            position: b,
            chip: chip_b,
        });
        self.refresh_selectable();

        if self.is_won() || !self.has_moves() {
            self.undo_stack.clear();
        }

        true
    }

    /// Undoes the most recent committed match, restoring both chips at their
    /// exact positions and recomputing the snapshot.
    ///
    /// # Returns
    /// `false` when there is nothing to undo: no match was committed yet,
    /// or the stack was cleared by a terminal outcome.
    pub fn undo_last_match(&mut self) -> bool {
        if self.undo_stack.len() < 2 {
            return false;
        }
        // Records are pushed in pairs, so two pops restore one match.
        let second = self.undo_stack.pop();
        let first = self.undo_stack.pop();
        if let (Some(second), Some(first)) = (second, first) {
            self.board.set(second.position, Some(second.chip));
            self.board.set(first.position, Some(first.chip));
            self.refresh_selectable();
            true
        } else {
            false
        }
    }

    /// Whether the board has been cleared.
    pub fn is_won(&self) -> bool {
        self.board.chip_count() == 0
    }

    /// Whether at least one matching pair of selectable tiles remains.
    pub fn has_moves(&self) -> bool {
        self.hint().is_some()
    }

    /// The first matching selectable pair in scan order, if any. The UI
    /// uses this both as the hint and as the no-moves-left probe.
    pub fn hint(&self) -> Option<(Position, Position)> {
        for (i, &a) in self.selectable.iter().enumerate() {
            for &b in &self.selectable[i + 1..] {
                if let (Some(chip_a), Some(chip_b)) = (self.board.get(a), self.board.get(b)) {
                    if chip_a.matches(chip_b) {
                        return Some((a, b));
                    }
                }
            }
        }
        None
    }

    fn refresh_selectable(&mut self) {
        self.selectable = selectable_positions(&self.board);
    }
}
