use alloc::vec::Vec;

use crate::{
    board::Gameboard,
    common::{AttackOutcome, GameError},
    config::BOARD_SIZE,
    ship::Vessel,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    /// 0 for the human, 1 for the computer.
    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }
}

/// Interface shared by every player type: each one owns a board.
pub trait Player {
    /// The player's own board.
    fn board(&self) -> &Gameboard;

    /// Mutable access for ship placement.
    fn board_mut(&mut self) -> &mut Gameboard;

    /// Where this player sits.
    fn seat(&self) -> Seat;
}

/// Player that fires at coordinates chosen from outside.
#[derive(Debug, Clone, Default)]
pub struct HumanPlayer {
    board: Gameboard,
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire at (x, y) on `opponent`.
    pub fn attack<S: Vessel>(
        &self,
        opponent: &mut Gameboard<S>,
        x: usize,
        y: usize,
    ) -> Result<AttackOutcome, GameError> {
        opponent.receive_attack(x, y)
    }
}

impl Player for HumanPlayer {
    fn board(&self) -> &Gameboard {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Gameboard {
        &mut self.board
    }

    fn seat(&self) -> Seat {
        Seat::Human
    }
}

/// Player that fires at uniformly random, never repeated coordinates.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    board: Gameboard,
    deck: Vec<(usize, usize)>,
}

impl ComputerPlayer {
    /// Create a player whose target deck is a shuffled permutation of every coordinate.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck: Vec<(usize, usize)> = (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
            .collect();
        deck.shuffle(rng);
        Self {
            board: Gameboard::new(),
            deck,
        }
    }

    /// Coordinates not yet fired at.
    pub fn remaining_moves(&self) -> usize {
        self.deck.len()
    }

    /// Fire at the next coordinate of the deck.
    pub fn random_attack<S: Vessel>(
        &mut self,
        opponent: &mut Gameboard<S>,
    ) -> Result<AttackOutcome, GameError> {
        let (x, y) = self.deck.pop().ok_or(GameError::NoMovesLeft)?;
        opponent.receive_attack(x, y)
    }
}

impl Player for ComputerPlayer {
    fn board(&self) -> &Gameboard {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Gameboard {
        &mut self.board
    }

    fn seat(&self) -> Seat {
        Seat::Computer
    }
}
