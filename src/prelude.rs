//! Commonly used types and utilities for ease of import.

pub use crate::{
    GameController, GameError, Orientation, Phase, Position, PublicState, Seat, Ship, TurnEvent,
    BOARD_SIZE,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
