//! Paddle Arcade entry point
//!
//! Parses the command line, builds the configuration and runs the chosen game
//! in a native window.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use paddle_arcade::platform::NativePlatform;
use paddle_arcade::sim::seeded;
use paddle_arcade::{Game, GameConfig, Variant};

#[derive(Parser, Debug)]
#[command(name = "paddle-arcade", version, about = "Pong and Tennis in a window")]
struct Args {
    /// Game to play: pong or tennis
    #[arg(default_value = "pong")]
    variant: Variant,

    /// JSON file overriding the variant's default configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for ball serves (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(args.variant, path)?,
        None => GameConfig::for_variant(args.variant),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Paddle Arcade starting {} with seed {}", config.variant, seed);

    let mut platform = NativePlatform::new(&config)?;
    let mut game = Game::new(config, Box::new(seeded(seed)));
    let summary = game.run(&mut platform);
    log::info!("Run summary: {:?}", summary);

    Ok(())
}
