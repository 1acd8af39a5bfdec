//! Lattice geometry, limits and command tokens.
//!
//! The lattice is a cube of side `N`. Every point has up to six neighbors,
//! one step along each axis in either direction. Points on faces, edges and
//! corners of the cube have fewer (5, 4 and 3 respectively).

// =============================================================================
// Lattice Geometry
// =============================================================================

/// Offsets to the six orthogonal neighbors of a point.
/// Order: +x, -x, +y, -y, +z, -z
pub const DIRECTIONS: [(isize, isize, isize); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Smallest playable lattice side.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest playable lattice side. The x axis is written as a single letter,
/// so `A..=Z` caps it at 26.
pub const MAX_BOARD_SIZE: usize = 26;

/// Lattice side used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 3;

// =============================================================================
// Command Tokens
// =============================================================================

/// Pass the turn. Also recorded in the move history as the pass marker.
pub const PASS_TOKEN: &str = "p";

/// Forfeit the game. Also recorded as the forfeit marker.
pub const FORFEIT_TOKEN: &str = "f";

/// Quit the game. Also recorded as the quit marker.
pub const QUIT_TOKEN: &str = "q";

/// Report capture counters.
pub const STATUS_TOKEN: &str = "t";

/// List the available commands.
pub const COMMANDS_TOKEN: &str = "c";

/// Switch the renderer to the layered 2D view.
pub const FLAT_VIEW_TOKEN: &str = "2d";

/// Switch the renderer to the 3D view.
pub const CUBE_VIEW_TOKEN: &str = "3d";

// =============================================================================
// Opponent Seam
// =============================================================================

/// How many replies an automated opponent gets before its turn fails.
pub const MAX_OPPONENT_ATTEMPTS: usize = 3;
