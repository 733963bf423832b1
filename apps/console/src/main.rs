mod commands;
mod config;
mod presenter;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{TokioScheduler, UiController, UiEvent};
use storage::{KeyValueStore, MemoryKvStore, SessionStore, SqliteKvStore};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{describe_file, parse_command, Command, CommandError, HELP};
use config::{load_settings, normalize_database_url};
use presenter::ConsolePresenter;

#[derive(Parser, Debug)]
#[command(about = "Auction listing scanner landing flow")]
struct Args {
    /// SQLite URL or path for the persisted session.
    #[arg(long)]
    database_url: Option<String>,
    /// Keep the session in memory only.
    #[arg(long)]
    memory: bool,
    #[arg(long, default_value = "landing.toml")]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if let Some(raw) = args.database_url.as_deref() {
        settings.database_url = normalize_database_url(raw);
    }

    let kv: Arc<dyn KeyValueStore> = if args.memory {
        info!("using in-memory session store");
        Arc::new(MemoryKvStore::new())
    } else {
        info!(database_url = %settings.database_url, "opening session store");
        Arc::new(SqliteKvStore::new(&settings.database_url).await?)
    };

    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<UiEvent>();
    let mut controller = UiController::new(
        SessionStore::new(kv),
        settings.flow,
        ConsolePresenter::stdout(),
        TokioScheduler::new(events_tx),
    );
    controller.start().await;
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::State) => println!(
                        "state: {} | signed in: {}",
                        controller.flow_state().label(),
                        controller
                            .current_user()
                            .map(|user| user.email.as_str())
                            .unwrap_or("no"),
                    ),
                    Ok(Command::Event(event)) => controller.handle(event).await,
                    Ok(Command::ChooseFile(path)) => match describe_file(&path).await {
                        Ok(candidate) => {
                            controller.handle(UiEvent::FileChosen(Some(candidate))).await
                        }
                        Err(err) => warn!(error = %err, "file not chosen"),
                    },
                    Err(CommandError::Empty) => {}
                    Err(err) => println!("{err}"),
                }
            }
            Some(event) = events_rx.recv() => controller.handle(event).await,
        }
    }

    info!("bye");
    Ok(())
}
