//! # Mahjong Solitaire Engine
//!
//! This library provides the rules and layout engine for a tile-matching
//! solitaire game played on a stepped 3D arrangement of tiles: the
//! accessibility rule deciding which tiles may currently be picked, a
//! backtracking generator that fills a layout template with paired tile
//! values so the resulting board is guaranteed solvable, and the occlusion
//! ordering needed to paint overlapping tiles correctly.
//!
//! It is used by three binaries:
//! - `deal`: generates a board for a named layout and prints it.
//! - `play`: interactive gameplay via the command line.
//! - `auto_player`: generates a board and prints a full winning removal
//!   sequence.
//!
//! ## Modules
//! - `engine`: chip values (`Chip`), positions, the 3D `Board`, and the
//!   accessibility evaluator (`selectable_positions`).
//! - `layout`: the shipped layout templates (`Layout`).
//! - `generator`: pile composition and the backtracking board generator.
//! - `draw`: the covers relation and topological draw ordering.
//! - `game`: session state (board, selectable snapshot, undo stack).
//! - `solver`: depth-first pair-removal search used to demonstrate
//!   solvability independently of the generator.
//! - `utils`: utility functions, such as building fixture boards from
//!   strings.

pub mod draw;
pub mod engine;
pub mod game;
pub mod generator;
pub mod layout;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full path,
// e.g. `mahjong_solitaire::engine::selectable_positions()`. This keeps the
// top-level library namespace cleaner.
