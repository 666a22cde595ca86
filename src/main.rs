use anyhow::Context;
use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{error, info, warn};
use wellbeing_companion::commands::badges::{run::drain_toasts, ui::toast};
use wellbeing_companion::{AppState, Config, config, handler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = config::log_filter(std::env::var("RUST_LOG").ok().as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(target = "app", config = %config.describe(), "starting");
    let mut state = AppState::load(&config).await?;

    // Unlocks that happened while nobody was listening.
    for line in drain_toasts(&mut state.engine) {
        println!("{line}");
    }
    let mut toasts = state.engine.subscribe();
    state.persist().await.context("could not save the store")?;

    println!("Type `help` for a list of commands, `quit` to leave.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }
        let reply = handler::dispatch(&mut state.engine, line, Local::now().naive_local());
        if !reply.is_empty() {
            println!("{reply}");
        }
        loop {
            match toasts.try_recv() {
                Ok(notification) => println!("{}", toast(&notification)),
                Err(TryRecvError::Lagged(missed)) => {
                    warn!(target = "app", missed, "toast listener fell behind");
                }
                Err(_) => break,
            }
        }
        if let Err(e) = state.persist().await {
            error!(target = "app", error = %e, "failed to save the store");
        }
    }
    state.persist().await.context("could not save the store")?;
    info!(target = "app", "bye");
    Ok(())
}
