//! Territory scoring.
//!
//! One pass over the board finds every maximal region of empty cells. A
//! region belongs to a color when every stone on its border is that color;
//! regions bordered by both colors, or by no stone at all, are neutral.
//! Lattice walls do not count against ownership.

use std::collections::VecDeque;

use tracing::debug;

use crate::board::{Board, Color, Coord, PerColor};

/// Empty cells attributed to each color.
pub type TerritoryCounters = PerColor<usize>;

/// A maximal connected set of empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub cells: Vec<Coord>,
    /// `Some` when exactly one color borders the region.
    pub owner: Option<Color>,
}

/// Every empty region of `board`, each produced exactly once.
pub fn empty_regions(board: &Board) -> Vec<Region> {
    let mut visited = vec![false; board.size().pow(3)];
    let mut regions = Vec::new();

    for start in board.coords() {
        if visited[board.index(start)] || !board.cell(start).is_empty() {
            continue;
        }
        visited[board.index(start)] = true;

        let mut queue = VecDeque::from([start]);
        let mut cells = Vec::new();
        let mut borders = PerColor::<bool>::default();

        while let Some(pt) = queue.pop_front() {
            cells.push(pt);
            for n in board.neighbors6(pt) {
                match board.cell(n).color() {
                    Some(color) => *borders.get_mut(color) = true,
                    None => {
                        let i = board.index(n);
                        if !visited[i] {
                            visited[i] = true;
                            queue.push_back(n);
                        }
                    }
                }
            }
        }

        let owner = match (borders.black, borders.white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        };
        regions.push(Region { cells, owner });
    }
    regions
}

/// Count territory for both colors from scratch.
pub fn score(board: &Board) -> TerritoryCounters {
    let mut territory = TerritoryCounters::default();
    for region in empty_regions(board) {
        if let Some(owner) = region.owner {
            *territory.get_mut(owner) += region.cells.len();
        }
    }
    debug!(black = territory.black, white = territory.white, "territory scored");
    territory
}

/// Who won, by territory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner { color: Color, margin: usize },
    Tie,
}

pub fn determine_winner(territory: &TerritoryCounters) -> Outcome {
    let (black, white) = (territory.black, territory.white);
    if black > white {
        Outcome::Winner {
            color: Color::Black,
            margin: black - white,
        }
    } else if white > black {
        Outcome::Winner {
            color: Color::White,
            margin: white - black,
        }
    } else {
        Outcome::Tie
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { color, margin } => write!(f, "{color} wins by {margin} point(s)"),
            Outcome::Tie => write!(f, "It's a tie"),
        }
    }
}
