use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rust_2048::core::{Direction, EngineConfig, DEFAULT_FOUR_PROBABILITY};
use rust_2048::session::Game;

#[derive(Debug, Parser)]
#[command(name = "play_cli", about = "Play 2048 in the terminal with w/a/s/d")]
struct Args {
    /// RNG seed; a random one is picked when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Chance that a new tile is a 4
    #[arg(long, default_value_t = DEFAULT_FOUR_PROBABILITY)]
    four_probability: f64,
}

fn direction_for(key: char) -> Option<Direction> {
    match key.to_ascii_lowercase() {
        'w' => Some(Direction::Up),
        'a' => Some(Direction::Left),
        's' => Some(Direction::Down),
        'd' => Some(Direction::Right),
        _ => None,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if !(0.0..=1.0).contains(&args.four_probability) {
        bail!("--four-probability must be within [0, 1], got {}", args.four_probability);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting game with seed {seed}");
    let config = EngineConfig::default()
        .with_seed(seed)
        .with_four_probability(args.four_probability);
    let mut game = Game::new(config).context("failed to start game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while !game.is_over() {
        println!("{}", game.current_score());
        print!("{}", game.board());
        stdout.flush().context("failed to flush stdout")?;

        let direction = loop {
            let Some(line) = lines.next() else {
                println!("You scored: {}", game.current_score());
                return Ok(());
            };
            let line = line.context("failed to read from stdin")?;
            if let Some(dir) = line.trim().chars().next().and_then(direction_for) {
                break dir;
            }
        };

        game.make_move(direction);
    }

    print!("{}", game.board());
    println!("You scored: {}", game.current_score());
    Ok(())
}
