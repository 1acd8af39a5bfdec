//! Connected groups and liberties.
//!
//! Groups are never cached: the board changes on every move, so callers
//! recompute them from the current state each time they are needed.

use std::collections::HashSet;

use crate::board::{Board, Cell, Color, Coord};

/// A maximal set of same-colored stones connected through the six
/// orthogonal directions.
pub type StoneGroup = HashSet<Coord>;

/// Collect the group of `color` containing `seed`.
///
/// Uses an explicit stack flood-fill. A seed that is out of bounds or does
/// not hold `color` yields an empty group.
pub fn find_group(board: &Board, seed: Coord, color: Color) -> StoneGroup {
    let target = Cell::from(color);
    let mut group = StoneGroup::new();
    if board.get(seed) != Ok(target) {
        return group;
    }

    let mut stack = vec![seed];
    while let Some(pt) = stack.pop() {
        if !group.insert(pt) {
            continue;
        }
        for n in board.neighbors6(pt) {
            if board.cell(n) == target && !group.contains(&n) {
                stack.push(n);
            }
        }
    }
    group
}

/// Whether any stone of `group` touches an empty cell.
///
/// An empty group has no liberty.
pub fn has_liberty(board: &Board, group: &StoneGroup) -> bool {
    group
        .iter()
        .any(|&stone| board.neighbors6(stone).any(|n| board.cell(n).is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distinct empty cells adjacent to `group`.
    fn liberties(board: &Board, group: &StoneGroup) -> usize {
        group
            .iter()
            .flat_map(|&stone| board.neighbors6(stone))
            .filter(|&n| board.cell(n).is_empty())
            .collect::<HashSet<_>>()
            .len()
    }

    fn place(board: &mut Board, stones: &[(usize, usize, usize)], color: Color) {
        for &(x, y, z) in stones {
            board.set(Coord::new(x, y, z), color.into()).unwrap();
        }
    }

    #[test]
    fn test_single_stone_group() {
        let mut board = Board::new(3);
        place(&mut board, &[(1, 1, 1)], Color::Black);
        let group = find_group(&board, Coord::new(1, 1, 1), Color::Black);
        assert_eq!(group.len(), 1);
        assert_eq!(liberties(&board, &group), 6);
        assert!(has_liberty(&board, &group));
    }

    #[test]
    fn test_group_follows_all_three_axes() {
        let mut board = Board::new(3);
        place(
            &mut board,
            &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1), (1, 1, 2)],
            Color::White,
        );
        // Diagonal contact does not connect.
        place(&mut board, &[(2, 2, 2)], Color::White);

        let group = find_group(&board, Coord::new(0, 0, 0), Color::White);
        assert_eq!(group.len(), 5);
        assert!(group.contains(&Coord::new(1, 1, 2)));
        assert!(!group.contains(&Coord::new(2, 2, 2)));
    }

    #[test]
    fn test_group_stops_at_other_color() {
        let mut board = Board::new(3);
        place(&mut board, &[(0, 0, 0), (2, 0, 0)], Color::Black);
        place(&mut board, &[(1, 0, 0)], Color::White);
        let group = find_group(&board, Coord::new(0, 0, 0), Color::Black);
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_mismatched_seed_gives_empty_group() {
        let mut board = Board::new(3);
        place(&mut board, &[(0, 0, 0)], Color::Black);
        assert!(find_group(&board, Coord::new(0, 0, 0), Color::White).is_empty());
        assert!(find_group(&board, Coord::new(1, 1, 1), Color::Black).is_empty());
        assert!(find_group(&board, Coord::new(5, 0, 0), Color::Black).is_empty());
    }

    #[test]
    fn test_empty_group_has_no_liberty() {
        let board = Board::new(3);
        assert!(!has_liberty(&board, &StoneGroup::new()));
        assert_eq!(liberties(&board, &StoneGroup::new()), 0);
    }

    #[test]
    fn test_corner_stone_surrounded() {
        let mut board = Board::new(3);
        place(&mut board, &[(0, 0, 0)], Color::Black);
        place(&mut board, &[(1, 0, 0), (0, 1, 0)], Color::White);
        let group = find_group(&board, Coord::new(0, 0, 0), Color::Black);
        assert_eq!(liberties(&board, &group), 1);

        place(&mut board, &[(0, 0, 1)], Color::White);
        assert!(!has_liberty(&board, &group), "walls and stones leave no liberty");
    }

    #[test]
    fn test_shared_liberties_counted_once() {
        let mut board = Board::new(3);
        place(&mut board, &[(0, 0, 0), (1, 0, 0), (1, 1, 0)], Color::Black);
        let group = find_group(&board, Coord::new(0, 0, 0), Color::Black);
        // (0,1,0) borders both (0,0,0) and (1,1,0).
        let libs = liberties(&board, &group);
        let expected: HashSet<Coord> = [
            Coord::new(0, 1, 0),
            Coord::new(2, 0, 0),
            Coord::new(2, 1, 0),
            Coord::new(1, 2, 0),
            Coord::new(0, 0, 1),
            Coord::new(1, 0, 1),
            Coord::new(1, 1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(libs, expected.len());
    }
}
