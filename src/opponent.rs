//! Seam for an automated opponent.
//!
//! The engine never chooses moves. An [`Opponent`] is handed what a human
//! across the table would see and answers with free-form text that should
//! contain a move token. How it arrives at that answer is its own business.

use thiserror::Error;
use tracing::warn;

use crate::board::{Board, Color};
use crate::capture::CaptureCounters;
use crate::constants::MAX_OPPONENT_ATTEMPTS;
use crate::game::Game;
use crate::moves::{MoveError, MoveOutcome};
use crate::notation::parse_move;

/// Everything an opponent gets to look at.
#[derive(Clone, Copy, Debug)]
pub struct OpponentView<'a> {
    /// Color the opponent plays.
    pub color: Color,
    /// The other side's last token, if any.
    pub last_move: Option<&'a str>,
    pub board: &'a Board,
    pub history: &'a [String],
    pub captures: &'a CaptureCounters,
}

pub trait Opponent {
    /// Ask for a move. The reply is searched with [`extract_move_token`].
    fn request_move(&mut self, view: &OpponentView<'_>) -> anyhow::Result<String>;
}

#[derive(Debug, Error)]
pub enum OpponentError {
    #[error("opponent gave no legal move after {attempts} attempts (last: {last})")]
    Exhausted { attempts: usize, last: MoveError },
    #[error(transparent)]
    Request(#[from] anyhow::Error),
    #[error("it is not the opponent's turn")]
    NotItsTurn,
}

/// Pull a move token out of a reply.
///
/// A `move_str:` label takes precedence, e.g. `"I'll go move_str: B2-1"`.
/// Without one, the first whitespace-separated word that parses as a move
/// is used.
pub fn extract_move_token(reply: &str) -> Option<&str> {
    if let Some((_, rest)) = reply.split_once("move_str:") {
        return rest.split_whitespace().next();
    }
    reply
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .find(|word| parse_move(word).is_ok())
}

/// Let `opponent` play one turn of `game` as `color`.
///
/// Replies without a token, or with a token the board refuses, are
/// re-requested up to [`MAX_OPPONENT_ATTEMPTS`] times in total.
pub fn play_opponent_turn(
    game: &mut Game,
    opponent: &mut dyn Opponent,
    color: Color,
) -> Result<MoveOutcome, OpponentError> {
    if game.current_player() != Some(color) {
        return Err(OpponentError::NotItsTurn);
    }

    let mut last = MoveError::InvalidFormat(String::new());
    for attempt in 1..=MAX_OPPONENT_ATTEMPTS {
        let reply = {
            let view = OpponentView {
                color,
                last_move: game.last_move().map(|m| m.token.as_str()),
                board: game.board(),
                history: game.history(),
                captures: game.captures(),
            };
            opponent.request_move(&view)?
        };

        let Some(token) = extract_move_token(&reply) else {
            warn!(attempt, reply = %reply, "opponent reply has no move token");
            last = MoveError::InvalidFormat(reply);
            continue;
        };
        match game.submit_move(token) {
            Ok(outcome) => return Ok(outcome),
            Err(err) => {
                warn!(attempt, token, error = %err, "opponent move refused");
                last = err;
            }
        }
    }
    Err(OpponentError::Exhausted {
        attempts: MAX_OPPONENT_ATTEMPTS,
        last,
    })
}
