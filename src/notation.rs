//! Move tokens and command tokens.
//!
//! A move is written `<Letter><Row>-<Layer>`: the letter names x (`A` = 0),
//! the row and layer are 1-based numbers for y and z. Letters are
//! case-insensitive, so `c3-2` and `C3-2` both name (2, 2, 1).
//!
//! [`parse_move`] only checks the grammar. [`locate_move`] also checks the
//! result against a board size, so `A0-1` is well formed but off every board.

use std::fmt;

use crate::board::{Coord, column_letter};
use crate::constants::{
    COMMANDS_TOKEN, CUBE_VIEW_TOKEN, FLAT_VIEW_TOKEN, FORFEIT_TOKEN, PASS_TOKEN, QUIT_TOKEN,
    STATUS_TOKEN,
};
use crate::moves::MoveError;

/// Renderer display mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// One 2D grid per layer.
    Flat,
    /// A listing of every lattice node with its occupant.
    #[default]
    Cube,
}

/// A single line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(RawCoord),
    Pass,
    Forfeit,
    Quit,
    Status,
    Commands,
    View(View),
}

/// The zero-based axes a grammatical token names, before any board is
/// consulted. A row or layer is `None` when its number is `0` or too large
/// for `usize`; such a token names no cell on any board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawCoord {
    pub x: usize,
    pub y: Option<usize>,
    pub z: Option<usize>,
}

impl RawCoord {
    /// The coordinate, if it lies on a board of side `size`.
    pub fn within(&self, size: usize) -> Option<Coord> {
        let (y, z) = (self.y?, self.z?);
        let coord = Coord::new(self.x, y, z);
        [coord.x, coord.y, coord.z]
            .iter()
            .all(|&axis| axis < size)
            .then_some(coord)
    }
}

impl From<Coord> for RawCoord {
    fn from(coord: Coord) -> Self {
        Self {
            x: coord.x,
            y: Some(coord.y),
            z: Some(coord.z),
        }
    }
}

/// Help text shown for the `c` command.
pub const COMMAND_HELP: &str = "\
Commands:
  <Letter><Row>-<Layer>  place a stone (e.g. A1-1)
  p                      pass
  f                      forfeit the game
  q                      quit the game
  t                      show capture counts
  c                      list commands
  2d                     layered 2D board view
  3d                     3D board view";

/// Parse a move token.
///
/// # Errors
/// `MoveError::InvalidFormat` when the token does not match the grammar.
/// Numbers that match the grammar are accepted whatever their value; a row
/// or layer of `0` comes back as a `None` axis.
pub fn parse_move(token: &str) -> Result<RawCoord, MoveError> {
    let invalid = || MoveError::InvalidFormat(token.to_string());
    let trimmed = token.trim();

    let (head, layer) = trimmed.split_once('-').ok_or_else(invalid)?;
    let mut chars = head.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(invalid)?;
    let y = parse_one_based(chars.as_str()).ok_or_else(invalid)?;
    let z = parse_one_based(layer).ok_or_else(invalid)?;

    let x = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    Ok(RawCoord { x, y, z })
}

/// Parse a move token and place it on a board of side `size`.
///
/// # Errors
/// - `InvalidFormat` when the token does not match the grammar
/// - `OutOfBounds` when it names a cell off the board
pub fn locate_move(token: &str, size: usize) -> Result<Coord, MoveError> {
    parse_move(token)?
        .within(size)
        .ok_or_else(|| MoveError::OutOfBounds {
            token: token.trim().to_string(),
            size,
        })
}

/// A non-empty run of ASCII digits, converted to a 0-based index.
///
/// The outer `None` is a grammar failure. The inner one is a `0`, or a
/// number too large to index anything.
fn parse_one_based(s: &str) -> Option<Option<usize>> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
}

/// Parse a line of input into a command.
///
/// Input containing `-` is treated as a move attempt and fails with
/// `InvalidFormat` if malformed; anything else that is not a known command
/// fails with `UnknownCommand`.
pub fn parse_command(input: &str) -> Result<Command, MoveError> {
    let token = input.trim().to_ascii_lowercase();
    let command = match token.as_str() {
        PASS_TOKEN => Command::Pass,
        FORFEIT_TOKEN => Command::Forfeit,
        QUIT_TOKEN => Command::Quit,
        STATUS_TOKEN => Command::Status,
        COMMANDS_TOKEN => Command::Commands,
        FLAT_VIEW_TOKEN => Command::View(View::Flat),
        CUBE_VIEW_TOKEN => Command::View(View::Cube),
        t if t.contains('-') => Command::Move(parse_move(t)?),
        _ => return Err(MoveError::UnknownCommand(input.trim().to_string())),
    };
    Ok(command)
}

impl Coord {
    /// The move token naming this coordinate, e.g. `C3-2` for (2, 2, 1).
    pub fn to_token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", column_letter(self.x), self.y + 1, self.z + 1)
    }
}
