use anyhow::Result;
use clap::Parser;
use tictactoe::config::CliConfig;
use tictactoe::{Config, GameEngine, GameInterface, GameSession, APP_NAME, VERSION};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Color theme (default, dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Keep previous boards on screen instead of clearing
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    config.merge_with_cli(CliConfig {
        debug: cli.debug,
        theme: cli.theme,
        no_clear: cli.no_clear,
        ..Default::default()
    });
    config.validate()?;

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(format!("{}={},warn", APP_NAME, config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} v{}", APP_NAME, VERSION);

    let mut session = GameSession::new(GameEngine::new(), GameInterface::new(&config));

    match session.run() {
        Ok(tally) => {
            session.presenter().show_farewell(&tally)?;
        }
        Err(e) => {
            error!("Game error: {}", e);
            eprintln!("An error occurred: {}", e);
            std::process::exit(1);
        }
    }

    info!("Game session ended");
    Ok(())
}
