//! podplayer - drives the playback state from the command line.
//!
//! Reads one command per line from stdin (`<category> <command> [args...]`)
//! and prints each command's output. Run `help` for the list of commands.

use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
    sync::Arc,
};

use clap::Parser;
use futures::StreamExt;
use tracing::{Level, error, info, span};

use podplayer::{
    cli::{CliService, formatting::format_error},
    config::Config,
    services::{EpisodeCatalog, PlayerSnapshot, PlayerState},
    tracing_config,
};

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "podplayer", version, about = "Podcast playback state driver")]
struct Args {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/podplayer/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Episode catalog to play from (JSON array or TOML with [[episodes]])
    #[arg(long)]
    episodes: Option<PathBuf>,

    /// Seed for reproducible shuffle order
    #[arg(long)]
    seed: Option<u64>,

    /// Also write logs to the podplayer log directory
    #[arg(long)]
    log_file: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let _log_guard = if args.log_file {
        Some(tracing_config::init_with_file(config.general.log_level)?)
    } else {
        tracing_config::init(config.general.log_level)?;
        None
    };
    let _span = span!(Level::INFO, "podplayer").entered();

    let catalog = match &args.episodes {
        Some(path) => EpisodeCatalog::load(path)?,
        None => EpisodeCatalog::default(),
    };

    let player = Arc::new(match args.seed {
        Some(seed) => PlayerState::with_seed(config.player.clone(), seed),
        None => PlayerState::new(config.player.clone()),
    });
    info!(episodes = catalog.len(), "Player ready");

    let now_playing = tokio::spawn(log_now_playing(player.watch()));

    let cli_service = CliService::new(Arc::clone(&player), Arc::new(catalog), Arc::new(config));
    let failed = tokio::task::spawn_blocking(move || run_commands(&cli_service)).await??;

    now_playing.abort();

    if failed {
        process::exit(1);
    }
    Ok(())
}

/// Executes stdin lines until EOF or `quit`.
///
/// Returns whether any command failed.
fn run_commands(cli_service: &CliService) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut failed = false;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        match cli_service.execute_line(trimmed) {
            Ok(output) => {
                if !output.trim().is_empty() {
                    writeln!(stdout, "{output}")?;
                }
            }
            Err(e) => {
                failed = true;
                error!(command = trimmed, "Command failed: {e}");
                eprintln!("{}", format_error(&e.to_string()));
            }
        }
        stdout.flush()?;
    }

    Ok(failed)
}

async fn log_now_playing(snapshots: impl futures::Stream<Item = PlayerSnapshot>) {
    let mut snapshots = Box::pin(snapshots);
    let mut last_url: Option<String> = None;

    while let Some(snapshot) = snapshots.next().await {
        let url = snapshot.current_episode().map(|episode| episode.url.clone());
        if url != last_url {
            match snapshot.current_episode() {
                Some(episode) => info!(title = %episode.title, url = %episode.url, "Now playing"),
                None => info!("Queue is empty"),
            }
            last_url = url;
        }
    }
}
