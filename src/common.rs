//! Common types for the rules engine: game errors and attack outcomes.

use crate::game::Phase;

/// Result of a single shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub x: usize,
    pub y: usize,
    /// The shot landed on a ship segment.
    pub hit: bool,
    /// The ship that was hit is now sunk.
    pub sunk: bool,
}

/// Errors returned by ship, board, player and controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship length must be a positive integer.
    InvalidLength,
    /// Malformed placement input, e.g. a vessel longer than any fleet ship.
    InvalidArgument,
    /// Attack coordinates outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Ship would leave the board or overlap another ship.
    InvalidPlacement,
    /// Cell already holds a ship.
    CellOccupied,
    /// Cell was already attacked.
    AlreadyAttacked,
    /// Operation is not valid in the current phase.
    PhaseError { phase: Phase },
    /// No ships of this length are left to place.
    PlacementQuotaExceeded { length: usize },
    /// Play cannot begin before the whole fleet is placed.
    FleetIncomplete,
    /// The computer has attacked every coordinate.
    NoMovesLeft,
    /// Random placement gave up on a ship of this length.
    AutoPlacementFailed { length: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidLength => write!(f, "Ship length must be a positive integer"),
            GameError::InvalidArgument => write!(
                f,
                "Placement expects a ship of length 1 to {}",
                crate::config::MAX_SHIP_LENGTH
            ),
            GameError::OutOfBounds { x, y } => {
                write!(f, "Invalid attack: ({}, {}) is out of bounds", x, y)
            }
            GameError::InvalidPlacement => write!(
                f,
                "Invalid placement: ships must be within board bounds and non-overlapping"
            ),
            GameError::CellOccupied => write!(f, "Cell already occupied"),
            GameError::AlreadyAttacked => write!(f, "Cell already attacked"),
            GameError::PhaseError { phase } => {
                write!(f, "Operation not allowed while {}", phase)
            }
            GameError::PlacementQuotaExceeded { length } => {
                write!(f, "No ships of length {} left to place", length)
            }
            GameError::FleetIncomplete => write!(f, "Place the whole fleet before starting"),
            GameError::NoMovesLeft => write!(f, "No moves left for random attack"),
            GameError::AutoPlacementFailed { length } => {
                write!(f, "Unable to place ship of length {} randomly", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
