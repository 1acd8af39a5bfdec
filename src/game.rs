//! Game session and turn state machine.
//!
//! A [`Game`] owns the board, capture counters and move history, and moves
//! between two phases:
//!
//! - `Playing(color)`: `color` is to move
//! - `GameOver(reason)`: terminal, every further submission is refused
//!
//! Two consecutive passes end the game; so do forfeit and quit. Each terminal
//! transition records a final score snapshot.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Color, PerColor};
use crate::capture::CaptureCounters;
use crate::constants::{
    DEFAULT_BOARD_SIZE, FORFEIT_TOKEN, MAX_BOARD_SIZE, MIN_BOARD_SIZE, PASS_TOKEN, QUIT_TOKEN,
};
use crate::moves::{MoveError, MoveOutcome, apply_move};
use crate::scoring::{Outcome, TerritoryCounters, determine_winner, score};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside the supported range")]
    BoardSize(usize),
}

/// Options fixed at game start. Black always opens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Lattice side.
    pub size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }
}

impl GameConfig {
    pub fn with_size(size: usize) -> Self {
        Self { size }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(ConfigError::BoardSize(self.size))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    DoublePass,
    Forfeit,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing(Color),
    GameOver(GameOverReason),
}

/// The most recent turn, for the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub token: String,
    pub player: Color,
}

/// Scores frozen at the moment the game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FinalScore {
    pub territory: TerritoryCounters,
    pub captures: CaptureCounters,
    pub outcome: Outcome,
    /// The player whose action ended the game.
    pub ended_by: Color,
}

/// Read-only view handed to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub last_move: Option<&'a LastMove>,
}

pub struct Game {
    board: Board,
    captures: CaptureCounters,
    history: Vec<String>,
    phase: Phase,
    passed: PerColor<bool>,
    last_move: Option<LastMove>,
    final_score: Option<FinalScore>,
}

impl Game {
    /// A new game on an empty board of side `size`, Black to move.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::with_size(size))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.size),
            captures: CaptureCounters::default(),
            history: Vec::new(),
            phase: Phase::Playing(Color::Black),
            passed: PerColor::default(),
            last_move: None,
            final_score: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Color> {
        match self.phase {
            Phase::Playing(color) => Some(color),
            Phase::GameOver(_) => None,
        }
    }

    /// Stones captured by each color so far.
    pub fn captures(&self) -> &CaptureCounters {
        &self.captures
    }

    /// Every applied move token and pass/forfeit/quit marker, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    pub fn has_passed(&self, color: Color) -> bool {
        *self.passed.get(color)
    }

    pub fn final_score(&self) -> Option<&FinalScore> {
        self.final_score.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            last_move: self.last_move.as_ref(),
        }
    }

    /// Territory on the current board.
    pub fn score(&self) -> TerritoryCounters {
        score(&self.board)
    }

    fn playing(&self) -> Result<Color, MoveError> {
        self.current_player().ok_or(MoveError::GameOver)
    }

    /// Play `token` for the player to move.
    ///
    /// On success both pass flags are cleared and the turn passes to the
    /// opponent. On failure nothing changes.
    pub fn submit_move(&mut self, token: &str) -> Result<MoveOutcome, MoveError> {
        let player = self.playing()?;
        let outcome = apply_move(
            &mut self.board,
            &mut self.captures,
            &mut self.history,
            token,
            player,
        )?;
        debug!(%player, coord = %outcome.coord, captured = outcome.captured.len(), "move applied");

        self.passed = PerColor::default();
        self.last_move = Some(LastMove {
            token: outcome.coord.to_token(),
            player,
        });
        self.phase = Phase::Playing(player.opposite());
        Ok(outcome)
    }

    /// The player to move passes. A pass answering a pass ends the game.
    pub fn submit_pass(&mut self) -> Result<Phase, MoveError> {
        let player = self.playing()?;
        *self.passed.get_mut(player) = true;
        self.history.push(PASS_TOKEN.to_string());
        self.last_move = Some(LastMove {
            token: PASS_TOKEN.to_string(),
            player,
        });

        if self.passed.black && self.passed.white {
            info!("both players passed");
            self.finish(GameOverReason::DoublePass, player);
        } else {
            debug!(%player, "pass");
            self.phase = Phase::Playing(player.opposite());
        }
        Ok(self.phase)
    }

    /// The player to move forfeits.
    pub fn forfeit(&mut self) -> Result<&FinalScore, MoveError> {
        self.end_with(GameOverReason::Forfeit, FORFEIT_TOKEN)
    }

    /// The player to move quits.
    pub fn quit(&mut self) -> Result<&FinalScore, MoveError> {
        self.end_with(GameOverReason::Quit, QUIT_TOKEN)
    }

    fn end_with(&mut self, reason: GameOverReason, marker: &str) -> Result<&FinalScore, MoveError> {
        let player = self.playing()?;
        self.history.push(marker.to_string());
        info!(%player, ?reason, "game ended early");
        Ok(self.finish(reason, player))
    }

    fn finish(&mut self, reason: GameOverReason, ended_by: Color) -> &FinalScore {
        let territory = self.score();
        let outcome = determine_winner(&territory);
        info!(black = territory.black, white = territory.white, %outcome, "final score");
        self.phase = Phase::GameOver(reason);
        self.final_score.insert(FinalScore {
            territory,
            captures: self.captures,
            outcome,
            ended_by,
        })
    }
}
