use std::io;

use armada::{
    init_logging, AutoPilot, Board, Game, StdinConsole, TurnEngine, BOARD_HEIGHT, BOARD_WIDTH,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Two players sharing this terminal, hot-seat style.
    Duel {
        #[arg(long, help = "Fix RNG seed for reproducible random placements")]
        seed: Option<u64>,
    },
    /// Play against the automated opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible random placements")]
        seed: Option<u64>,
    },
    /// Watch two automated players fight (demo).
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (seed, a, b): (Option<u64>, TurnEngine<io::Stdout>, TurnEngine<io::Stdout>) =
        match cli.command {
            Commands::Duel { seed } => (
                seed,
                TurnEngine::new("A", Board::new(), Box::new(StdinConsole), io::stdout()),
                TurnEngine::new("B", Board::new(), Box::new(StdinConsole), io::stdout()),
            ),
            Commands::Play { seed } => (
                seed,
                TurnEngine::new("A", Board::new(), Box::new(StdinConsole), io::stdout()),
                TurnEngine::new(
                    "B",
                    Board::new(),
                    Box::new(AutoPilot::new(BOARD_WIDTH, BOARD_HEIGHT)),
                    io::stdout(),
                ),
            ),
            Commands::Auto { seed } => (
                seed,
                TurnEngine::new(
                    "A",
                    Board::new(),
                    Box::new(AutoPilot::new(BOARD_WIDTH, BOARD_HEIGHT)),
                    io::stdout(),
                ),
                TurnEngine::new(
                    "B",
                    Board::new(),
                    Box::new(AutoPilot::new(BOARD_WIDTH, BOARD_HEIGHT)),
                    io::stdout(),
                ),
            ),
        };

    let mut rng = make_rng(seed);
    if let Some(s) = seed {
        println!("Using fixed seed: {s} (game will be reproducible)");
    }
    let winner = Game::new(a, b).run(&mut rng)?;
    println!("Winner: Player {winner}");
    Ok(())
}
