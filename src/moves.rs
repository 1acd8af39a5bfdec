//! Move validation and execution.
//!
//! A move runs as one transaction: parse, bounds check, occupancy check,
//! tentative placement, suicide check, then either roll back and fail or
//! commit and resolve captures. No failure path leaves the board changed.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, BoardError, Cell, Color, Coord};
use crate::capture::{CaptureCounters, dead_neighbor_groups, resolve_captures};
use crate::group::{find_group, has_liberty};
use crate::notation::locate_move;

/// Why a move or command was refused. Every variant is recoverable: the
/// caller re-prompts and nothing has changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid move format {0:?}: use <Letter><Row>-<Layer>, e.g. A1-1")]
    InvalidFormat(String),
    #[error("{token} is outside the {size}x{size}x{size} board")]
    OutOfBounds { token: String, size: usize },
    #[error("{0} is already occupied")]
    CellOccupied(Coord),
    #[error("playing {0} would be suicide")]
    SuicidalMove(Coord),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("the game is over")]
    GameOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { coord, size } => MoveError::OutOfBounds {
                token: coord.to_token(),
                size,
            },
        }
    }
}

/// Result of a successful placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the stone went.
    pub coord: Coord,
    /// Opponent stones removed by this move.
    pub captured: HashSet<Coord>,
}

impl MoveOutcome {
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Place a stone for `player` at `coord`, resolving captures.
///
/// # Errors
/// - `OutOfBounds` if any axis is outside the board
/// - `CellOccupied` if the target already holds a stone
/// - `SuicidalMove` if the new stone's group would have no liberty and
///   nothing is captured
pub fn place_stone(
    board: &mut Board,
    counters: &mut CaptureCounters,
    coord: Coord,
    player: Color,
) -> Result<MoveOutcome, MoveError> {
    if !board.get(coord)?.is_empty() {
        return Err(MoveError::CellOccupied(coord));
    }

    board.set(coord, Cell::from(player))?;
    let captures_opponent = !dead_neighbor_groups(board, coord, player).is_empty();
    let own = find_group(board, coord, player);

    if !captures_opponent && !has_liberty(board, &own) {
        board.clear(coord);
        debug!(%coord, %player, "rejected suicidal move");
        return Err(MoveError::SuicidalMove(coord));
    }

    let captured = resolve_captures(board, counters, coord, player);
    Ok(MoveOutcome { coord, captured })
}

/// Parse `token`, place the stone and append the token to `history`.
///
/// `history` only grows on success.
pub fn apply_move(
    board: &mut Board,
    counters: &mut CaptureCounters,
    history: &mut Vec<String>,
    token: &str,
    player: Color,
) -> Result<MoveOutcome, MoveError> {
    let coord = locate_move(token, board.size())?;
    let outcome = place_stone(board, counters, coord, player)?;
    history.push(token.trim().to_string());
    Ok(outcome)
}
