use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use formflow::config::Config;
use formflow::form::FormStore;
use formflow::logging::init_tracing;
use formflow::ui;

#[derive(Parser)]
#[command(name = "formflow", version, about = "Form state via a store and reducer")]
struct Args {
    /// Path to the config file (default: ~/.config/formflow/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    let store = FormStore::with_initial(config.initial_details());

    // Log every state change; the receiver keeps the subscription alive
    // for the life of the session.
    let changes = store.subscribe();
    thread::spawn(move || {
        while let Ok(details) = changes.recv() {
            debug!(?details, "state changed");
        }
    });

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    ui::run(store, tick_rate).context("terminal UI failed")?;
    Ok(())
}
