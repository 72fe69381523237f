mod game;
mod textures;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sprite2d::SpriteConfig;

use game::BounceGame;

/// Headless Sprite2D demo: a wrapping ship fires short-lived bullets at
/// spinning rocks that bounce off the screen edges.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seed for rock placement and headings.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// JSON file with sprite defaults (see `SpriteConfig`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 640.0)]
    width: f32,

    #[arg(long, default_value_t = 480.0)]
    height: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading sprite config {}", path.display()))?;
            SpriteConfig::from_json_str(&text)?
        }
        None => SpriteConfig::default(),
    };

    let mut game = BounceGame::new(config, cli.width, cli.height, cli.seed)?;
    // 60 ticks per second of simulated time
    for tick in 0..cli.ticks {
        game.update(u64::from(tick) * 1000 / 60)?;
    }

    let summary = game.summary();
    log::info!(
        "finished {} ticks: {} hits, {} rocks left, {} bullets in flight",
        cli.ticks,
        summary.hits,
        summary.rocks_left,
        summary.bullets_in_flight
    );
    Ok(())
}
