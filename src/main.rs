use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use console_connect_four::config::{AppConfig, ConfigSource, LoggingConfig};
use console_connect_four::console::{Console, Outcome};
use console_connect_four::game::{Game, Piece};
use console_connect_four::ui::App;

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the full-screen terminal UI instead of the line prompt
    #[arg(long)]
    tui: bool,

    /// Override the first player's name
    #[arg(long)]
    player1: Option<String>,

    /// Override the second player's name
    #[arg(long)]
    player2: Option<String>,

    /// Piece for the first player (red or yellow); the second gets the other
    #[arg(long)]
    first_piece: Option<Piece>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration
    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.player1 {
        config.players[0].name = name;
    }
    if let Some(name) = cli.player2 {
        config.players[1].name = name;
    }
    if let Some(piece) = cli.first_piece {
        config.assign_first_piece(piece);
    }

    init_logging(&config.logging, cli.tui)?;
    if source == ConfigSource::Defaults {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let mut game = config.new_game().context("setting up players")?;
    info!(
        first = %game.players()[0],
        second = %game.players()[1],
        tui = cli.tui,
        "starting game"
    );

    if cli.tui {
        run_tui(game)?;
    } else {
        run_console(&mut game)?;
    }
    Ok(())
}

/// Install the tracing subscriber. The TUI owns the screen, so it always logs
/// to a file.
fn init_logging(logging: &LoggingConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let file = logging
        .file
        .clone()
        .or_else(|| tui.then(|| PathBuf::from(LoggingConfig::DEFAULT_TUI_FILE)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match file {
        Some(path) => {
            let log_file = File::create(&path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn run_console(game: &mut Game) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    match console.run(game).context("console session")? {
        Outcome::Finished(status) => info!(?status, moves = game.moves().len(), "game finished"),
        Outcome::Abandoned => info!(moves = game.moves().len(), "game abandoned"),
    }
    Ok(())
}

fn run_tui(game: Game) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI")
}
