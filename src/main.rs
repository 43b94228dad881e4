use anyhow::Result;
use clap::Parser;
use log::info;
use simplelog::LevelFilter;
use snake_game::game::GameConfig;
use snake_game::logging;
use snake_game::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Classic snake on a 32x24 grid")]
struct Cli {
    /// File to write the log to (the terminal is taken by the game)
    #[arg(long, default_value = "snake_game.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else; the game runs without it if need be
    if let Err(e) = logging::init(&cli.log_file, cli.log_level) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let mut human_mode = HumanMode::new(GameConfig::default());
    human_mode.run().await?;

    info!("Goodbye");
    Ok(())
}
