use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use snake_arcade::game::{GameConfig, GameRng, GameSession};
use snake_arcade::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake-arcade")]
#[command(version, about = "Terminal snake with power-ups, obstacles and high scores")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "30")]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: i32,

    /// Base game tick in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Random seed; omit for a different board every run
    #[arg(long)]
    seed: Option<u64>,

    /// High-score file
    #[arg(long, default_value = "highscores.json")]
    scores: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.base_tick_ms = cli.tick_ms;

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let session = GameSession::new(config, rng, Some(cli.scores))?;
    HumanMode::new(session).run().await
}
