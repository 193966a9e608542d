//! Game orchestration: placement quotas, phases, turn sequencing and snapshots.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::{Gameboard, Grid, OwnerCell, Position, PublicCell, ShipId},
    common::{AttackOutcome, GameError},
    config::{FLEET, MAX_SHIP_LENGTH},
    player::{ComputerPlayer, HumanPlayer, Player, Seat},
    ship::{Orientation, Ship, Vessel},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Phase {
    /// The human is arranging the fleet.
    Placing,
    /// Shots are being exchanged.
    Playing,
    /// A fleet has been sunk. Only a reset leaves this phase.
    Over,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Placing => "placing",
            Phase::Playing => "playing",
            Phase::Over => "over",
        };
        f.write_str(name)
    }
}

/// Ships of each length still to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Quota {
    /// `counts[len - 1]` is the allowance for ships of length `len`.
    counts: [usize; MAX_SHIP_LENGTH],
}

impl Quota {
    /// The whole fleet, nothing placed yet.
    pub fn full() -> Self {
        let mut counts = [0; MAX_SHIP_LENGTH];
        for (length, count) in FLEET {
            counts[length - 1] = count;
        }
        Quota { counts }
    }

    /// Nothing left to place.
    pub fn empty() -> Self {
        Quota {
            counts: [0; MAX_SHIP_LENGTH],
        }
    }

    /// Remaining allowance for `length`, or `None` if no fleet ship has that length.
    pub fn get(&self, length: usize) -> Option<usize> {
        length
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
    }

    /// `true` once every count has reached zero.
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Ships still to be placed, over all lengths.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(length, remaining)` pairs, longest ship first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &count)| (i + 1, count))
    }

    fn take(&mut self, length: usize) {
        if let Some(count) = length.checked_sub(1).and_then(|i| self.counts.get_mut(i)) {
            *count = count.saturating_sub(1);
        }
    }
}

/// Placement progress as published to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementState {
    pub complete: bool,
    pub remaining: Quota,
}

/// One shot taken during `resolve_turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEvent {
    pub by: Seat,
    pub x: usize,
    pub y: usize,
    pub hit: bool,
    pub sunk: bool,
}

impl TurnEvent {
    fn new(by: Seat, shot: AttackOutcome) -> Self {
        TurnEvent {
            by,
            x: shot.x,
            y: shot.y,
            hit: shot.hit,
            sunk: shot.sunk,
        }
    }
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicState {
    pub phase: Phase,
    /// The human's own board, fully revealed.
    pub human_view: Grid<OwnerCell>,
    /// The computer's board under fog of war.
    pub cpu_view: Grid<PublicCell>,
    pub over: bool,
    pub winner: Option<Seat>,
}

impl PublicState {
    /// 0 if the human won, 1 if the computer won.
    pub fn winner_index(&self) -> Option<usize> {
        self.winner.map(Seat::index)
    }
}

/// Runs a human vs. computer game from placement to the last sinking.
///
/// The random source drives the computer's target deck and every automatic
/// fleet placement; seed it for reproducible games.
pub struct GameController<R = SmallRng> {
    rng: R,
    human: HumanPlayer,
    computer: ComputerPlayer,
    phase: Phase,
    winner: Option<Seat>,
    remaining: Quota,
}

#[cfg(feature = "std")]
impl GameController {
    /// Create a game seeded from the thread RNG.
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }
}

#[cfg(feature = "std")]
impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Create a reproducible game.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameController<R> {
    /// Create a game drawing randomness from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let computer = ComputerPlayer::new(&mut rng);
        GameController {
            rng,
            human: HumanPlayer::new(),
            computer,
            phase: Phase::Placing,
            winner: None,
            remaining: Quota::full(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn human(&self) -> &HumanPlayer {
        &self.human
    }

    pub fn computer(&self) -> &ComputerPlayer {
        &self.computer
    }

    fn require(&self, phase: Phase) -> Result<(), GameError> {
        if self.phase != phase {
            return Err(GameError::PhaseError { phase: self.phase });
        }
        Ok(())
    }

    /// Place one of the human's ships by hand.
    pub fn manual_place(
        &mut self,
        ship: Ship,
        pos: Position,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        self.require(Phase::Placing)?;
        let length = ship.length();
        if self.remaining.get(length) == Some(0) {
            return Err(GameError::PlacementQuotaExceeded { length });
        }
        let id = self.human.board_mut().place_ship(ship, pos, orientation)?;
        self.remaining.take(length);
        Ok(id)
    }

    /// Throw away the human's layout and place the whole fleet at random.
    ///
    /// On failure the previous layout and quota are kept.
    pub fn randomize_placement(&mut self) -> Result<(), GameError> {
        self.require(Phase::Placing)?;
        let mut human = HumanPlayer::new();
        human.board_mut().place_fleet_randomly(&mut self.rng)?;
        self.human = human;
        self.remaining = Quota::empty();
        log::debug!("human fleet placed at random");
        Ok(())
    }

    /// Start placement over with an empty board and the full quota.
    pub fn reset_placement(&mut self) -> Result<(), GameError> {
        self.require(Phase::Placing)?;
        self.human = HumanPlayer::new();
        self.remaining = Quota::full();
        Ok(())
    }

    /// Place the computer's fleet and start shooting.
    ///
    /// The computer gets a fresh board each time, so a failed attempt leaves
    /// nothing behind and can simply be retried.
    pub fn begin_game(&mut self) -> Result<(), GameError> {
        self.require(Phase::Placing)?;
        if !self.remaining.is_exhausted() {
            return Err(GameError::FleetIncomplete);
        }
        let mut board = Gameboard::new();
        board.place_fleet_randomly(&mut self.rng)?;
        *self.computer.board_mut() = board;
        self.winner = None;
        self.phase = Phase::Playing;
        log::info!("game started");
        Ok(())
    }

    /// Fresh players and quotas, back to placing. Allowed in any phase.
    pub fn reset_game(&mut self) {
        self.human = HumanPlayer::new();
        self.computer = ComputerPlayer::new(&mut self.rng);
        self.winner = None;
        self.phase = Phase::Placing;
        self.remaining = Quota::full();
        log::info!("game reset");
    }

    /// Fire the human's shot at (x, y) and, if it missed, let the computer
    /// shoot until it misses too.
    ///
    /// A hit earns the shooter another turn, so a human hit returns right
    /// away. The first human event is always present; the game ending stops
    /// the sequence immediately.
    pub fn resolve_turn(&mut self, x: usize, y: usize) -> Result<Vec<TurnEvent>, GameError> {
        self.require(Phase::Playing)?;
        let mut events = Vec::new();

        let shot = self.human.attack(self.computer.board_mut(), x, y)?;
        self.update_outcome();
        events.push(TurnEvent::new(Seat::Human, shot));
        log::debug!("human fires at ({}, {}): hit={} sunk={}", x, y, shot.hit, shot.sunk);
        if self.winner.is_some() || shot.hit {
            return Ok(events);
        }

        loop {
            let shot = self.computer.random_attack(self.human.board_mut())?;
            self.update_outcome();
            events.push(TurnEvent::new(Seat::Computer, shot));
            log::debug!(
                "computer fires at ({}, {}): hit={} sunk={}",
                shot.x,
                shot.y,
                shot.hit,
                shot.sunk
            );
            if self.winner.is_some() || !shot.hit {
                break;
            }
        }
        Ok(events)
    }

    fn update_outcome(&mut self) {
        let winner = if self.computer.board().all_sunk() {
            Seat::Human
        } else if self.human.board().all_sunk() {
            Seat::Computer
        } else {
            return;
        };
        self.winner = Some(winner);
        self.phase = Phase::Over;
        log::info!("game over, {:?} wins", winner);
    }

    pub fn placement_state(&self) -> PlacementState {
        PlacementState {
            complete: self.remaining.is_exhausted(),
            remaining: self.remaining,
        }
    }

    pub fn public_state(&self) -> PublicState {
        PublicState {
            phase: self.phase,
            human_view: self.human.board().owner_view(),
            cpu_view: self.computer.board().public_view(),
            over: self.phase == Phase::Over,
            winner: self.winner,
        }
    }
}
