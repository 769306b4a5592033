//! The shipped layout templates.
//!
//! A layout is game content, not engine logic: a named list of exactly 144
//! cells a fresh board must occupy, plus the logical row/column extents a
//! renderer needs. Cells follow the 2-column/2-row pitch convention, with
//! half-step rows used for flanking tiles and the turtle's apex.

use crate::engine::Position;

/// Number of cells every layout template fills.
pub const LAYOUT_SIZE: usize = 144;

/// A named board template.
///
/// Layouts can only be obtained from the preset constructors, so a `Layout`
/// value always holds exactly [`LAYOUT_SIZE`] distinct in-range cells.
#[derive(Clone, Debug)]
pub struct Layout {
    name: &'static str,
    row_count: i32,
    col_count: i32,
    cells: Vec<Position>,
}

impl Layout {
    /// The classic arrangement: eight base rows of 12/8/10/12/12/10/8/12
    /// tiles, one half-row tile on the left flank and two on the right,
    /// then 6×6, 4×4 and 2×2 tiers topped by a single apex tile resting on
    /// a half-step at level 4.
    pub fn turtle() -> Self {
        let mut cells = Vec::with_capacity(LAYOUT_SIZE);

        // Base tier; spans are in tile units (column = 2 * tile index).
        const BASE_SPANS: [(i32, i32); 8] =
            [(1, 12), (3, 10), (2, 11), (1, 12), (1, 12), (2, 11), (3, 10), (1, 12)];
        for (r, &(from, to)) in BASE_SPANS.iter().enumerate() {
            for c in from..=to {
                cells.push(Position::new(2 * r as i32, 2 * c, 0));
            }
        }
        // Half-row flanks: one tile left of the middle rows, two to the right.
        cells.push(Position::new(7, 0, 0));
        cells.push(Position::new(7, 26, 0));
        cells.push(Position::new(7, 28, 0));

        for r in 1..=6 {
            for c in 4..=9 {
                cells.push(Position::new(2 * r, 2 * c, 1));
            }
        }
        for r in 2..=5 {
            for c in 5..=8 {
                cells.push(Position::new(2 * r, 2 * c, 2));
            }
        }
        for r in 3..=4 {
            for c in 6..=7 {
                cells.push(Position::new(2 * r, 2 * c, 3));
            }
        }
        cells.push(Position::new(7, 13, 4));

        Layout {
            name: "turtle",
            row_count: 16,
            col_count: 30,
            cells,
        }
    }

    /// A flat 9×16 field, every tile at level 0. The easiest of the shipped
    /// layouts: each row is eaten from its two ends.
    pub fn garden() -> Self {
        let mut cells = Vec::with_capacity(LAYOUT_SIZE);
        for r in 0..9 {
            for c in 0..16 {
                cells.push(Position::new(2 * r, 2 * c, 0));
            }
        }
        Layout {
            name: "garden",
            row_count: 18,
            col_count: 32,
            cells,
        }
    }

    /// A stepped pyramid: 8×12 base, 6×6 second tier, then a 2×4 slab and a
    /// 2×2 cap.
    pub fn ziggurat() -> Self {
        let mut cells = Vec::with_capacity(LAYOUT_SIZE);
        for r in 0..8 {
            for c in 2..14 {
                cells.push(Position::new(2 * r, 2 * c, 0));
            }
        }
        for r in 1..7 {
            for c in 5..11 {
                cells.push(Position::new(2 * r, 2 * c, 1));
            }
        }
        for r in 3..5 {
            for c in 6..10 {
                cells.push(Position::new(2 * r, 2 * c, 2));
            }
        }
        for r in 3..5 {
            for c in 7..9 {
                cells.push(Position::new(2 * r, 2 * c, 3));
            }
        }
        Layout {
            name: "ziggurat",
            row_count: 16,
            col_count: 28,
            cells,
        }
    }

    /// All shipped layouts.
    pub fn all() -> Vec<Layout> {
        vec![Layout::turtle(), Layout::garden(), Layout::ziggurat()]
    }

    /// Looks up a shipped layout by name.
    pub fn by_name(name: &str) -> Option<Layout> {
        Layout::all().into_iter().find(|layout| layout.name == name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Logical row extent for rendering (tiles span two rows).
    pub fn row_count(&self) -> i32 {
        self.row_count
    }

    /// Logical column extent for rendering (tiles span two columns).
    pub fn col_count(&self) -> i32 {
        self.col_count
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }
}
