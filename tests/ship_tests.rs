use battleship_rules::{GameError, Ship, Vessel};

#[test]
fn test_new_rejects_zero_length() {
    assert_eq!(Ship::new(0).unwrap_err(), GameError::InvalidLength);
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), GameError> {
    let mut ship = Ship::new(2)?;
    assert_eq!(ship.length(), 2);
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_hits_past_sunk_keep_counting() -> Result<(), GameError> {
    let mut ship = Ship::new(1)?;
    ship.hit();
    ship.hit();
    ship.hit();
    assert_eq!(ship.hit_count(), 3);
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_lengths_beyond_fleet_are_valid_ships() {
    // Only the board enforces the fleet's size limit.
    assert!(Ship::new(7).is_ok());
}
