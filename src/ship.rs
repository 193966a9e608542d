//! Ship definitions: the `Vessel` capability set and the stock `Ship`.

use crate::common::GameError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along +x from the origin.
    Horizontal,
    /// Extends along +y from the origin.
    Vertical,
}

/// Anything a board can carry: it has a length, takes hits and reports sinking.
pub trait Vessel {
    /// Number of segments.
    fn length(&self) -> usize;

    /// Register one hit.
    fn hit(&mut self);

    /// Whether the vessel has taken enough hits to go down.
    fn is_sunk(&self) -> bool;
}

/// A ship that counts hits against its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hit_count: usize,
}

impl Ship {
    /// Create a new ship. Fails with `InvalidLength` for a zero length.
    pub fn new(length: usize) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidLength);
        }
        Ok(Ship {
            length,
            hit_count: 0,
        })
    }

    /// Hits taken so far; may exceed the length.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }
}

impl Vessel for Ship {
    fn length(&self) -> usize {
        self.length
    }

    fn hit(&mut self) {
        self.hit_count += 1;
    }

    fn is_sunk(&self) -> bool {
        self.hit_count >= self.length
    }
}
