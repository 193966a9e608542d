/// Width and height of the square board.
pub const BOARD_SIZE: usize = 10;

/// Longest ship in the fleet; placement rejects anything longer.
pub const MAX_SHIP_LENGTH: usize = 4;

/// Fleet composition as `(length, count)` pairs, largest ship first.
pub const FLEET: [(usize, usize); MAX_SHIP_LENGTH] = [(4, 1), (3, 2), (2, 3), (1, 4)];

/// Total number of ships in the fleet.
pub const NUM_SHIPS: usize = 1 + 2 + 3 + 4;

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Random attempts allowed per ship during automatic placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;
