use battleship_rules::{init_logging, GameController, Phase, Seat, BOARD_SIZE};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let mut args = std::env::args().skip(1);
    let seed: u64 = match (args.next(), args.next()) {
        (Some(seed), None) => seed.parse()?,
        _ => {
            eprintln!("Usage: {} <seed>", env!("CARGO_BIN_NAME"));
            std::process::exit(1);
        }
    };

    let mut game = GameController::with_seed(seed);
    game.randomize_placement()?;
    let placement = serde_json::to_value(game.placement_state())?;
    game.begin_game()?;

    // The human side sweeps the board in its own shuffled order.
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut targets: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
        .collect();
    targets.shuffle(&mut rng);

    let mut turns = 0usize;
    let mut events = Vec::new();
    for (x, y) in targets {
        if game.phase() == Phase::Over {
            break;
        }
        turns += 1;
        events.extend(game.resolve_turn(x, y)?);
    }
    let human_shots = events.iter().filter(|e| e.by == Seat::Human).count();
    let cpu_shots = events.len() - human_shots;

    let result = json!({
        "seed": seed,
        "turns": turns,
        "human": {"shots": human_shots},
        "computer": {"shots": cpu_shots, "moves_left": game.computer().remaining_moves()},
        "winner": serde_json::to_value(game.winner())?,
        "placement": placement,
        "events": serde_json::to_value(&events)?,
        "final_state": serde_json::to_value(game.public_state())?,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
