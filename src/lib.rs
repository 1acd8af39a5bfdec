//! Cubego: rules engine for Go on a three-dimensional lattice.
//!
//! The board is an `N×N×N` cube where each point touches up to six others
//! (±x, ±y, ±z). The engine validates and applies moves, removes captured
//! groups, rejects suicide, ends the game on two consecutive passes and
//! scores enclosed territory. It never chooses moves.
//!
//! ## Modules
//!
//! - [`constants`] - Lattice geometry, limits and command tokens
//! - [`board`] - Board storage, colors and coordinates
//! - [`notation`] - Move and command token grammar
//! - [`group`] - Connected groups and liberties
//! - [`capture`] - Capture resolution
//! - [`moves`] - Move validation as a single transaction
//! - [`scoring`] - Territory scoring and winner determination
//! - [`game`] - Turn state machine and game session
//! - [`opponent`] - Seam for an automated opponent
//! - [`console`] - Line-oriented play loop and text rendering
//!
//! ## Example
//!
//! ```
//! use cubego::board::{Cell, Coord};
//! use cubego::game::Game;
//!
//! let mut game = Game::new(3).unwrap();
//! let outcome = game.submit_move("B2-2").unwrap();
//! assert!(!outcome.is_capture());
//! assert_eq!(game.board().get(Coord::new(1, 1, 1)), Ok(Cell::Black));
//! ```

pub mod board;
pub mod capture;
pub mod console;
pub mod constants;
pub mod game;
pub mod group;
pub mod moves;
pub mod notation;
pub mod opponent;
pub mod scoring;
