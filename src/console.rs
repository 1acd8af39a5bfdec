//! Line-oriented play loop.
//!
//! Reads one command per line, applies it to a [`Game`] and writes the board
//! and a response back. When an [`Opponent`] is attached it plays the color
//! the user did not pick.
//!
//! ## Commands
//!
//! - `<Letter><Row>-<Layer>` - place a stone, e.g. `A1-1`
//! - `p` - pass
//! - `f` - forfeit
//! - `q` - quit
//! - `t` - capture counts
//! - `c` - list commands
//! - `2d` / `3d` - switch the board view
//!
//! ## Example
//!
//! ```
//! use cubego::console::Console;
//! use cubego::game::Game;
//!
//! let mut console = Console::new(Game::new(3).unwrap());
//! let mut out = Vec::new();
//! console.run(&b"A1-1\np\np\np\n"[..], &mut out).unwrap();
//! assert!(console.game().is_over());
//! ```

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::warn;

use crate::board::{Cell, Color};
use crate::game::{Game, GameOverReason, Phase, Snapshot};
use crate::moves::MoveError;
use crate::notation::{COMMAND_HELP, Command, View, parse_command};
use crate::opponent::{Opponent, OpponentError, play_opponent_turn};

/// A game plus the presentation state around it.
pub struct Console {
    game: Game,
    view: View,
    opponent: Option<(Box<dyn Opponent>, Color)>,
}

impl Console {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            view: View::default(),
            opponent: None,
        }
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    /// Let `opponent` play `color`.
    pub fn with_opponent(mut self, opponent: Box<dyn Opponent>, color: Color) -> Self {
        self.opponent = Some((opponent, color));
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Play until the game ends or input runs out.
    ///
    /// # Errors
    /// I/O failures, and an attached opponent that cannot produce a legal
    /// move. The game is left as it was before the opponent's turn.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        let mut lines = input.lines();
        writeln!(output, "{}", render(&self.game.snapshot(), self.view))?;

        while !self.game.is_over() {
            if self.opponent_to_move() {
                let message = self
                    .opponent_turn()
                    .context("opponent could not make a move")?;
                writeln!(output, "{message}")?;
                writeln!(output, "{}", render(&self.game.snapshot(), self.view))?;
                continue;
            }

            if let Some(player) = self.game.current_player() {
                write!(output, "{player} to move (e.g. A1-1, c for commands): ")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let (redraw, message) = match self.execute(&line) {
                Ok(response) => response,
                Err(err) => (false, format!("{err}. Try again.")),
            };
            if !message.is_empty() {
                writeln!(output, "{message}")?;
            }
            if redraw {
                writeln!(output, "{}", render(&self.game.snapshot(), self.view))?;
            }
        }

        if let Some(summary) = self.summary() {
            writeln!(output, "{summary}")?;
        }
        Ok(())
    }

    fn opponent_to_move(&self) -> bool {
        match (&self.opponent, self.game.current_player()) {
            (Some((_, color)), Some(player)) => *color == player,
            _ => false,
        }
    }

    /// Run the attached opponent's turn.
    fn opponent_turn(&mut self) -> Result<String, OpponentError> {
        let Some((opponent, color)) = self.opponent.as_mut() else {
            return Err(OpponentError::NotItsTurn);
        };
        let color = *color;
        let outcome = play_opponent_turn(&mut self.game, &mut **opponent, color).inspect_err(
            |err| warn!(error = %err, %color, "opponent failed to move"),
        )?;
        Ok(format!(
            "{color} plays {}{}",
            outcome.coord,
            capture_note(outcome.captured.len())
        ))
    }

    /// Apply one line of input. Returns whether the board should be redrawn
    /// and the text to show.
    pub fn execute(&mut self, line: &str) -> Result<(bool, String), MoveError> {
        match parse_command(line)? {
            Command::Move(_) => {
                let outcome = self.game.submit_move(line)?;
                let note = capture_note(outcome.captured.len());
                Ok((true, format!("Move at {}{note}", outcome.coord)))
            }
            Command::Pass => match self.game.submit_pass()? {
                Phase::Playing(next) => {
                    Ok((false, format!("{} passes. {next} to move.", next.opposite())))
                }
                Phase::GameOver(_) => Ok((false, "Both players passed.".to_string())),
            },
            Command::Forfeit => {
                self.game.forfeit()?;
                Ok((false, String::new()))
            }
            Command::Quit => {
                self.game.quit()?;
                Ok((false, String::new()))
            }
            Command::Status => {
                let captures = self.game.captures();
                Ok((
                    false,
                    format!(
                        "Captured stones - Black: {}, White: {}",
                        captures.black, captures.white
                    ),
                ))
            }
            Command::Commands => Ok((false, COMMAND_HELP.to_string())),
            Command::View(view) => {
                self.view = view;
                Ok((true, String::new()))
            }
        }
    }

    /// End-of-game report, once the game is over.
    pub fn summary(&self) -> Option<String> {
        let final_score = self.game.final_score()?;
        let Phase::GameOver(reason) = self.game.phase() else {
            return None;
        };
        let headline = match reason {
            GameOverReason::DoublePass => "Game over.".to_string(),
            GameOverReason::Forfeit => format!("{} forfeits.", final_score.ended_by),
            GameOverReason::Quit => format!("Game quit by {}.", final_score.ended_by),
        };
        Some(format!(
            "{headline} Territory - Black: {}, White: {}. Captured - Black: {}, White: {}. {}.",
            final_score.territory.black,
            final_score.territory.white,
            final_score.captures.black,
            final_score.captures.white,
            final_score.outcome
        ))
    }
}

fn capture_note(captured: usize) -> String {
    match captured {
        0 => String::new(),
        n => format!(", capturing {n} stone(s)"),
    }
}

/// Draw a snapshot in the requested view.
///
/// The flat view is the board's layered grids. The cube view lists every
/// node by token with its occupant, one layer per line.
pub fn render(snapshot: &Snapshot<'_>, view: View) -> String {
    let board = snapshot.board;
    let mut out = match view {
        View::Flat => board.to_string(),
        View::Cube => {
            let mut s = String::new();
            for z in 0..board.size() {
                let nodes: Vec<String> = board
                    .coords()
                    .filter(|c| c.z == z)
                    .map(|c| match board.cell(c) {
                        Cell::Empty => c.to_token(),
                        Cell::Black => format!("{c}:B"),
                        Cell::White => format!("{c}:W"),
                    })
                    .collect();
                let _ = writeln!(s, "[{}] {}", z + 1, nodes.join(" "));
            }
            s
        }
    };
    if let Some(last) = snapshot.last_move {
        let _ = write!(out, "Last move: {} by {}", last.token, last.player);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::OpponentView;

    #[test]
    fn test_execute_move_and_status() {
        let mut console = Console::new(Game::new(3).unwrap());
        let (redraw, message) = console.execute("A1-1").unwrap();
        assert!(redraw);
        assert_eq!(message, "Move at A1-1");
        let (_, status) = console.execute("t").unwrap();
        assert_eq!(status, "Captured stones - Black: 0, White: 0");
    }

    #[test]
    fn test_execute_errors() {
        let mut console = Console::new(Game::new(3).unwrap());
        assert!(matches!(console.execute("hello"), Err(MoveError::UnknownCommand(_))));
        assert!(matches!(console.execute("A9-1"), Err(MoveError::OutOfBounds { .. })));
        assert!(console.game().history().is_empty());
    }

    #[test]
    fn test_view_switch() {
        let mut console = Console::new(Game::new(3).unwrap());
        assert_eq!(console.view(), View::Cube);
        console.execute("2d").unwrap();
        assert_eq!(console.view(), View::Flat);
        console.execute("3D").unwrap();
        assert_eq!(console.view(), View::Cube);
    }

    #[test]
    fn test_commands_list() {
        let mut console = Console::new(Game::new(3).unwrap());
        let (_, text) = console.execute("c").unwrap();
        assert!(text.contains("forfeit"));
    }

    #[test]
    fn test_run_double_pass() {
        let mut console = Console::new(Game::new(2).unwrap()).with_view(View::Flat);
        let mut out = Vec::new();
        console.run(&b"A1-1\nbogus\np\np\nB1-1\n"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown command"));
        assert!(text.contains("Both players passed."));
        assert!(text.contains("Black wins by 7 point(s)"));
        assert_eq!(console.game().history(), ["A1-1", "p", "p"]);
    }

    #[test]
    fn test_render_cube() {
        let mut game = Game::new(2).unwrap();
        game.submit_move("B1-2").unwrap();
        let text = render(&game.snapshot(), View::Cube);
        assert_eq!(
            text,
            "[1] A1-1 B1-1 A2-1 B2-1\n[2] A1-2 B1-2:B A2-2 B2-2\nLast move: B1-2 by Black"
        );
    }

    struct Unreachable;

    impl Opponent for Unreachable {
        fn request_move(&mut self, _view: &OpponentView<'_>) -> anyhow::Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    struct Rambles;

    impl Opponent for Rambles {
        fn request_move(&mut self, _view: &OpponentView<'_>) -> anyhow::Result<String> {
            Ok("I resign".to_string())
        }
    }

    #[test]
    fn test_unreachable_opponent_stops_without_passing() {
        let mut console =
            Console::new(Game::new(3).unwrap()).with_opponent(Box::new(Unreachable), Color::White);
        let mut out = Vec::new();
        let err = console.run(&b"p\n"[..], &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("connection refused"));
        assert_eq!(console.game().phase(), Phase::Playing(Color::White));
        assert_eq!(console.game().history(), ["p"]);
        assert!(console.game().final_score().is_none());
    }

    #[test]
    fn test_opponent_without_a_move_leaves_game_alone() {
        let mut console =
            Console::new(Game::new(2).unwrap()).with_opponent(Box::new(Rambles), Color::White);
        let mut out = Vec::new();
        let err = console.run(&b"A1-1\np\n"[..], &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OpponentError>(),
            Some(OpponentError::Exhausted { attempts: 3, .. })
        ));
        assert!(!console.game().is_over());
        assert_eq!(console.game().current_player(), Some(Color::White));
        assert_eq!(console.game().history(), ["A1-1"]);
    }
}
