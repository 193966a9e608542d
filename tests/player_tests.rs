use std::collections::HashSet;

use battleship_rules::{
    ComputerPlayer, GameError, Gameboard, HumanPlayer, Orientation, Player, Position, Seat, Ship,
    BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_players_own_fresh_boards() {
    let mut rng = SmallRng::seed_from_u64(1);
    let human = HumanPlayer::new();
    let computer = ComputerPlayer::new(&mut rng);
    assert_eq!(human.seat(), Seat::Human);
    assert_eq!(computer.seat(), Seat::Computer);
    assert_eq!(human.board().ship_count(), 0);
    assert_eq!(computer.board().ship_count(), 0);
    assert_eq!(computer.remaining_moves(), BOARD_SIZE * BOARD_SIZE);
}

#[test]
fn test_human_attack_delegates_to_opponent_board() {
    let human = HumanPlayer::new();
    let mut opponent = Gameboard::new();
    opponent
        .place_ship(Ship::new(1).unwrap(), Position::new(3, 4), Orientation::Horizontal)
        .unwrap();
    let shot = human.attack(&mut opponent, 3, 4).unwrap();
    assert!(shot.hit && shot.sunk);
    assert_eq!(
        human.attack(&mut opponent, 3, 4).unwrap_err(),
        GameError::AlreadyAttacked
    );
}

#[test]
fn test_random_attack_covers_every_cell_once() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut computer = ComputerPlayer::new(&mut rng);
    let mut opponent = Gameboard::new();

    let mut seen = HashSet::new();
    for expected_left in (0..BOARD_SIZE * BOARD_SIZE).rev() {
        let shot = computer.random_attack(&mut opponent).unwrap();
        assert!(seen.insert((shot.x, shot.y)), "coordinate fired twice");
        assert_eq!(computer.remaining_moves(), expected_left);
    }
    assert_eq!(seen.len(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(
        computer.random_attack(&mut opponent).unwrap_err(),
        GameError::NoMovesLeft
    );
}

#[test]
fn test_deck_order_depends_on_seed() {
    let fire_order = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut computer = ComputerPlayer::new(&mut rng);
        let mut opponent = Gameboard::new();
        (0..10)
            .map(|_| {
                let shot = computer.random_attack(&mut opponent).unwrap();
                (shot.x, shot.y)
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(fire_order(3), fire_order(3));
    assert_ne!(fire_order(3), fire_order(4));
}

#[test]
fn test_board_mut_allows_placement() {
    let mut human = HumanPlayer::new();
    human
        .board_mut()
        .place_ship(Ship::new(2).unwrap(), Position::new(0, 0), Orientation::Vertical)
        .unwrap();
    assert_eq!(human.board().occupied_cells(), 2);
}
