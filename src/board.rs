//! Game board state: a grid of cells plus the fleet placed on it.

use alloc::vec::Vec;
use core::array;

use crate::common::{AttackOutcome, GameError};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, MAX_SHIP_LENGTH};
use crate::ship::{Orientation, Ship, Vessel};
use rand::Rng;

/// A `BOARD_SIZE`×`BOARD_SIZE` matrix indexed as `grid[y][x]`.
pub type Grid<T> = [[T; BOARD_SIZE]; BOARD_SIZE];

/// Identifier handed out to each ship placed on a board, starting at 1.
pub type ShipId = u32;

/// Board coordinate of a ship's first segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// What a single cell attack produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub hit: bool,
    pub sunk: bool,
}

impl Strike {
    const MISS: Strike = Strike {
        hit: false,
        sunk: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Occupant {
    /// Index into the owning board's fleet.
    slot: usize,
    id: ShipId,
}

/// One square of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    occupant: Option<Occupant>,
    attacked: bool,
}

impl Cell {
    /// An empty, unattacked cell.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_ship(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_attacked(&self) -> bool {
        self.attacked
    }

    pub fn ship_id(&self) -> Option<ShipId> {
        self.occupant.map(|o| o.id)
    }

    /// Whether the ship on this cell has gone down. `fleet` is the owning board's fleet.
    pub fn is_ship_sunk<S: Vessel>(&self, fleet: &[S]) -> bool {
        self.occupant
            .and_then(|o| fleet.get(o.slot))
            .is_some_and(|ship| ship.is_sunk())
    }

    /// Bind the ship at `slot` of the fleet to this cell. There is no way to unbind it.
    pub fn place_ship(&mut self, slot: usize, id: ShipId) -> Result<(), GameError> {
        if self.occupant.is_some() {
            return Err(GameError::CellOccupied);
        }
        self.occupant = Some(Occupant { slot, id });
        Ok(())
    }

    /// Mark the cell attacked and forward a hit to its ship, if any.
    pub fn attack<S: Vessel>(&mut self, fleet: &mut [S]) -> Result<Strike, GameError> {
        if self.attacked {
            return Err(GameError::AlreadyAttacked);
        }
        let ship = match self.occupant {
            Some(o) => Some(fleet.get_mut(o.slot).ok_or(GameError::InvalidArgument)?),
            None => None,
        };
        self.attacked = true;
        Ok(match ship {
            Some(ship) => {
                ship.hit();
                Strike {
                    hit: true,
                    sunk: ship.is_sunk(),
                }
            }
            None => Strike::MISS,
        })
    }
}

/// Fog-of-war projection of a cell: ships only show once attacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicCell {
    pub ship: bool,
    pub attacked: bool,
}

/// Full-information projection of a cell for the board's owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerCell {
    pub ship: bool,
    pub attacked: bool,
    pub ship_id: Option<ShipId>,
    pub sunk: bool,
}

/// A 10×10 board holding the ships placed on it.
#[derive(Debug, Clone)]
pub struct Gameboard<S = Ship> {
    cells: Grid<Cell>,
    fleet: Vec<S>,
    next_ship_id: ShipId,
}

impl<S> Default for Gameboard<S> {
    fn default() -> Self {
        Gameboard {
            cells: [[Cell::new(); BOARD_SIZE]; BOARD_SIZE],
            fleet: Vec::new(),
            next_ship_id: 1,
        }
    }
}

impl Gameboard {
    /// Create an empty board for stock ships.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the standard fleet at random positions and orientations.
    ///
    /// All or nothing: if any ship cannot be placed the board is left as it was.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let mut staged = self.clone();
        for (length, count) in FLEET {
            for _ in 0..count {
                staged.place_randomly(rng, length)?;
            }
        }
        *self = staged;
        Ok(())
    }

    /// Try random spots for a single ship until one fits.
    fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<ShipId, GameError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let ship = Ship::new(length)?;
            let pos = Position::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match self.place_ship(ship, pos, orient) {
                Ok(id) => return Ok(id),
                Err(GameError::InvalidPlacement) => continue,
                Err(e) => return Err(e),
            }
        }
        log::warn!(
            "gave up placing ship of length {} after {} attempts",
            length,
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(GameError::AutoPlacementFailed { length })
    }
}

fn in_bounds(x: usize, y: usize) -> bool {
    x < BOARD_SIZE && y < BOARD_SIZE
}

/// Coordinates covered by a ship of `len` starting at `pos`.
fn footprint(
    pos: Position,
    len: usize,
    orientation: Orientation,
) -> impl Iterator<Item = (usize, usize)> + Clone {
    (0..len).map(move |i| match orientation {
        Orientation::Horizontal => (pos.x + i, pos.y),
        Orientation::Vertical => (pos.x, pos.y + i),
    })
}

impl<S: Vessel> Gameboard<S> {
    /// Place `ship` with its first segment at `pos`, returning the id it was given.
    ///
    /// The ship is moved into the board, so one instance can never be placed
    /// twice. Nothing is mutated when placement fails.
    pub fn place_ship(
        &mut self,
        ship: S,
        pos: Position,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        let len = ship.length();
        if len == 0 || len > MAX_SHIP_LENGTH {
            return Err(GameError::InvalidArgument);
        }

        // The last segment decides whether the whole ship fits.
        let last = match orientation {
            Orientation::Horizontal => pos.x.checked_add(len - 1).map(|x| (x, pos.y)),
            Orientation::Vertical => pos.y.checked_add(len - 1).map(|y| (pos.x, y)),
        };
        match last {
            Some((x, y)) if in_bounds(x, y) => {}
            _ => return Err(GameError::InvalidPlacement),
        }

        let targets = footprint(pos, len, orientation);
        if targets.clone().any(|(x, y)| self.cells[y][x].has_ship()) {
            return Err(GameError::InvalidPlacement);
        }

        let id = self.next_ship_id;
        let slot = self.fleet.len();
        for (x, y) in targets {
            self.cells[y][x].place_ship(slot, id)?;
        }
        self.next_ship_id += 1;
        self.fleet.push(ship);
        log::debug!(
            "placed ship #{} (length {}) at ({}, {}) {:?}",
            id,
            len,
            pos.x,
            pos.y,
            orientation
        );
        Ok(id)
    }

    /// Process an attack at (x, y).
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<AttackOutcome, GameError> {
        if !in_bounds(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        let strike = self.cells[y][x].attack(&mut self.fleet)?;
        Ok(AttackOutcome {
            x,
            y,
            hit: strike.hit,
            sunk: strike.sunk,
        })
    }

    /// Snapshot for the opponent. Unattacked ships stay hidden.
    pub fn public_view(&self) -> Grid<PublicCell> {
        array::from_fn(|y| {
            array::from_fn(|x| {
                let cell = &self.cells[y][x];
                PublicCell {
                    ship: cell.is_attacked() && cell.has_ship(),
                    attacked: cell.is_attacked(),
                }
            })
        })
    }

    /// Snapshot for the owner, revealing the whole layout.
    pub fn owner_view(&self) -> Grid<OwnerCell> {
        array::from_fn(|y| {
            array::from_fn(|x| {
                let cell = &self.cells[y][x];
                OwnerCell {
                    ship: cell.has_ship(),
                    attacked: cell.is_attacked(),
                    ship_id: cell.ship_id(),
                    sunk: cell.is_ship_sunk(&self.fleet),
                }
            })
        })
    }

    /// Returns `true` when every placed ship is sunk, including when none are placed.
    pub fn all_sunk(&self) -> bool {
        self.fleet.iter().all(|ship| ship.is_sunk())
    }

    /// Number of ships placed so far.
    pub fn ship_count(&self) -> usize {
        self.fleet.len()
    }

    /// Number of cells covered by ships.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.has_ship()).count()
    }

    /// Borrow the cell at (x, y), if it is on the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }
}
