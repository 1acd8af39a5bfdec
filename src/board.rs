//! Lattice storage: colors, cells, coordinates and the cubic board.
//!
//! The board owns an `N×N×N` grid of cells stored in a flat `Vec`, indexed
//! `z * N * N + y * N + x`. All public accessors are bounds-checked; the
//! neighbor iterator only ever yields in-bounds coordinates.

use std::fmt;

use thiserror::Error;

use crate::constants::DIRECTIONS;

/// Stone color, which is also the player identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-letter symbol used in board drawings.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Occupancy of a single lattice point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Color of the stone on this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A point of the lattice, 0-indexed on every axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Step by a signed offset. `None` when any axis would go below zero.
    pub fn offset(self, dx: isize, dy: isize, dz: isize) -> Option<Coord> {
        Some(Coord {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
            z: self.z.checked_add_signed(dz)?,
        })
    }
}

/// A value kept once per color: capture counters, territory counters,
/// pass flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerColor<T> {
    pub black: T,
    pub white: T,
}

impl<T> PerColor<T> {
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate {coord:?} is outside the {size}x{size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },
}

/// The cubic lattice. Its side is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// An all-empty board of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether every axis of `coord` lies in `[0, N)`.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size && coord.z < self.size
    }

    /// Flat index of an in-bounds coordinate.
    pub(crate) fn index(&self, coord: Coord) -> usize {
        (coord.z * self.size + coord.y) * self.size + coord.x
    }

    fn check(&self, coord: Coord) -> Result<usize, BoardError> {
        if self.contains(coord) {
            Ok(self.index(coord))
        } else {
            Err(BoardError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.check(coord).map(|i| self.cells[i])
    }

    /// Overwrite a cell. No occupancy check: callers decide whether the
    /// cell may be replaced.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), BoardError> {
        let i = self.check(coord)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Read a cell known to be in bounds, such as one produced by
    /// [`Board::neighbors6`] or [`Board::coords`].
    pub(crate) fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    pub(crate) fn clear(&mut self, coord: Coord) {
        let i = self.index(coord);
        self.cells[i] = Cell::Empty;
    }

    /// The in-bounds orthogonal neighbors of `coord`: six in the interior,
    /// three at a corner.
    pub fn neighbors6(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy, dz)| coord.offset(dx, dy, dz))
            .filter(move |&n| self.contains(n))
    }

    /// Every coordinate of the lattice, x fastest, then y, then z.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let n = self.size;
        (0..n).flat_map(move |z| (0..n).flat_map(move |y| (0..n).map(move |x| Coord::new(x, y, z))))
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

/// Layer-by-layer drawing: one grid per z, columns lettered, rows numbered
/// from 1.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.size {
            writeln!(f, "Layer {}:", z + 1)?;
            write!(f, "   ")?;
            for x in 0..self.size {
                write!(f, " {}", column_letter(x))?;
            }
            writeln!(f)?;
            for y in 0..self.size {
                write!(f, "{:2} ", y + 1)?;
                for x in 0..self.size {
                    let ch = match self.cell(Coord::new(x, y, z)).color() {
                        Some(color) => color.symbol(),
                        None => '.',
                    };
                    write!(f, " {ch}")?;
                }
                writeln!(f)?;
            }
            if z + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Letter naming the x column, `A` for 0.
pub(crate) fn column_letter(x: usize) -> char {
    u8::try_from(x)
        .ok()
        .and_then(|x| b'A'.checked_add(x))
        .map_or('?', char::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.size(), 3);
        assert_eq!(board.count(Cell::Empty), 27);
        assert!(board.coords().all(|c| board.get(c) == Ok(Cell::Empty)));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new(3);
        let inside = Coord::new(2, 1, 0);
        board.set(inside, Cell::White).unwrap();
        assert_eq!(board.get(inside), Ok(Cell::White));

        for outside in [Coord::new(3, 0, 0), Coord::new(0, 3, 0), Coord::new(0, 0, 3)] {
            assert!(matches!(
                board.get(outside),
                Err(BoardError::OutOfBounds { size: 3, .. })
            ));
            assert!(board.set(outside, Cell::Black).is_err());
        }
        assert_eq!(board.count(Cell::Black), 0);
    }

    #[test]
    fn test_neighbor_counts() {
        let board = Board::new(3);
        assert_eq!(board.neighbors6(Coord::new(1, 1, 1)).count(), 6, "center");
        assert_eq!(board.neighbors6(Coord::new(1, 1, 0)).count(), 5, "face");
        assert_eq!(board.neighbors6(Coord::new(1, 0, 0)).count(), 4, "edge");
        assert_eq!(board.neighbors6(Coord::new(0, 0, 0)).count(), 3, "corner");
        assert_eq!(board.neighbors6(Coord::new(2, 2, 2)).count(), 3, "far corner");
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let board = Board::new(4);
        let c = Coord::new(1, 2, 3);
        for n in board.neighbors6(c) {
            let dist = n.x.abs_diff(c.x) + n.y.abs_diff(c.y) + n.z.abs_diff(c.z);
            assert_eq!(dist, 1, "{n:?} is not adjacent to {c:?}");
        }
    }

    #[test]
    fn test_coords_cover_board_once() {
        let board = Board::new(3);
        let mut indices: Vec<usize> = board.coords().map(|c| board.index(c)).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..27).collect::<Vec<_>>());
    }

    #[test]
    fn test_display_layers() {
        let mut board = Board::new(2);
        board.set(Coord::new(1, 0, 0), Cell::Black).unwrap();
        board.set(Coord::new(0, 1, 1), Cell::White).unwrap();
        let text = board.to_string();
        assert_eq!(
            text,
            "Layer 1:\n    A B\n 1  . B\n 2  . .\n\nLayer 2:\n    A B\n 1  . .\n 2  W .\n"
        );
    }

    #[test]
    fn test_opposite_color() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
    }
}
