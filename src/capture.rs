//! Capture resolution.
//!
//! After a stone is placed, every opponent group touching it is checked; the
//! ones left without a liberty come off the board and are credited to the
//! player who made the move.

use std::collections::HashSet;

use tracing::debug;

use crate::board::{Board, Cell, Color, Coord, PerColor};
use crate::group::{StoneGroup, find_group, has_liberty};

/// Stones removed by each color over the whole game.
pub type CaptureCounters = PerColor<usize>;

/// Opponent groups adjacent to `placed` that currently have no liberty.
///
/// Each group appears once even when it touches `placed` from several
/// directions.
pub fn dead_neighbor_groups(board: &Board, placed: Coord, player: Color) -> Vec<StoneGroup> {
    let opponent = player.opposite();
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut dead = Vec::new();

    for n in board.neighbors6(placed) {
        if board.cell(n) != Cell::from(opponent) || seen.contains(&n) {
            continue;
        }
        let group = find_group(board, n, opponent);
        seen.extend(group.iter().copied());
        if !has_liberty(board, &group) {
            dead.push(group);
        }
    }
    dead
}

/// Remove every opponent group that `placed` left without liberties.
///
/// Returns the removed coordinates and adds their count to `player`'s
/// capture counter.
pub fn resolve_captures(
    board: &mut Board,
    counters: &mut CaptureCounters,
    placed: Coord,
    player: Color,
) -> HashSet<Coord> {
    let mut captured = HashSet::new();
    for group in dead_neighbor_groups(board, placed, player) {
        debug!(size = group.len(), %placed, %player, "capturing group");
        for &stone in &group {
            board.clear(stone);
        }
        captured.extend(group);
    }
    *counters.get_mut(player) += captured.len();
    captured
}
