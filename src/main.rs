#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use anyhow::{anyhow, bail, Context};
#[cfg(feature = "std")]
use battleship_rules::prelude::*;
#[cfg(feature = "std")]
use battleship_rules::ui::{
    describe_event, describe_placement, parse_coord, parse_orientation, render_owner_view,
    render_public_view,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Skip manual placement and arrange your fleet at random")]
        random_fleet: bool,
    },
}

#[cfg(feature = "std")]
enum Flow {
    Continue,
    Quit,
}

#[cfg(feature = "std")]
const HELP: &str = "\
Placing:  place <length> <coord> <h|v>   e.g. place 4 A1 h
          random | reset | start
Playing:  <coord>                        e.g. B7
Any time: new | help | quit";

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, random_fleet } => {
            let mut game = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    GameController::with_seed(s)
                }
                None => GameController::new(),
            };
            if random_fleet {
                game.randomize_placement()?;
            }
            println!("{}", HELP);
            print_state(&game);
            run(&mut game)?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run(game: &mut GameController) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", game.phase());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match handle(game, &words) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn handle(game: &mut GameController, words: &[&str]) -> anyhow::Result<Flow> {
    match (game.phase(), words) {
        (_, []) => {}
        (_, ["quit" | "q"]) => return Ok(Flow::Quit),
        (_, ["help"]) => println!("{}", HELP),
        (_, ["new"]) => {
            game.reset_game();
            print_state(game);
        }
        (Phase::Placing, ["place", length, at, orient]) => {
            let length: usize = length
                .parse()
                .with_context(|| format!("bad ship length `{}`", length))?;
            let (x, y) = parse_coord(at).ok_or_else(|| anyhow!("bad coordinate `{}`", at))?;
            let orientation = parse_orientation(orient)
                .ok_or_else(|| anyhow!("orientation must be h or v, got `{}`", orient))?;
            game.manual_place(Ship::new(length)?, Position::new(x, y), orientation)?;
            print_state(game);
        }
        (Phase::Placing, ["random"]) => {
            game.randomize_placement()?;
            print_state(game);
        }
        (Phase::Placing, ["reset"]) => {
            game.reset_placement()?;
            print_state(game);
        }
        (Phase::Placing, ["start"]) => {
            game.begin_game()?;
            println!("Enemy fleet deployed. Fire away!");
            print_state(game);
        }
        (Phase::Playing, [target]) => {
            let (x, y) =
                parse_coord(target).ok_or_else(|| anyhow!("bad coordinate `{}`", target))?;
            for event in game.resolve_turn(x, y)? {
                println!("{}", describe_event(&event));
            }
            print_state(game);
        }
        _ => bail!("Unknown command, type `help`"),
    }
    Ok(Flow::Continue)
}

#[cfg(feature = "std")]
fn print_state(game: &GameController) {
    let state = game.public_state();
    match state.phase {
        Phase::Placing => {
            println!("\nYour board:\n{}", render_owner_view(&state.human_view));
            println!("{}", describe_placement(&game.placement_state()));
        }
        Phase::Playing | Phase::Over => {
            println!("\nEnemy waters:\n{}", render_public_view(&state.cpu_view));
            println!("Your board:\n{}", render_owner_view(&state.human_view));
        }
    }
    match state.winner {
        Some(Seat::Human) => println!("VICTORY! You have sunk all enemy ships. Type `new` to play again."),
        Some(Seat::Computer) => println!("DEFEAT. All your ships have been destroyed. Type `new` to play again."),
        None => {}
    }
}
