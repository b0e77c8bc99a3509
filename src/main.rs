//! LinkStart - open a saved set of URLs across browser windows.
//!
//! Main entry point for the LinkStart CLI.

mod cli;
mod cmd_entries;
mod cmd_open;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use linkstart_config::{Config, ConfigError, ConfigLoader, ConfigValidator, default_config_path, linkstart_dir};
use linkstart_core::LifecycleEvent;
use linkstart_protocols::{EntryStore, Group};
use linkstart_store::FileEntryStore;

use crate::cli::{Cli, Commands};

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = linkstart_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("linkstart")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes the file writer on drop; keep it for the whole run.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Load the configuration file, or defaults when it does not exist.
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let config = ConfigLoader::load_or_default(&path)?;

    let result = ConfigValidator::validate(&config);
    for warning in &result.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    if let Some(error) = result.errors.into_iter().next() {
        return Err(ConfigError::invalid(error.path, error.message));
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    let store: Arc<dyn EntryStore> = Arc::new(FileEntryStore::new(config.store.resolved_path()));

    match cli.command {
        Commands::Open { dry_run } => cmd_open::open(&config, store, dry_run).await,
        Commands::Startup => cmd_open::lifecycle(&config, store, LifecycleEvent::Startup).await,
        Commands::Installed => cmd_open::lifecycle(&config, store, LifecycleEvent::Installed).await,
        Commands::Send { message } => cmd_open::send(&config, store, &message).await,
        Commands::List => cmd_entries::list(&config, store.as_ref()).await,
        Commands::Add { url, group } => {
            cmd_entries::add(&config, store.as_ref(), &url, Group::from(group)).await
        }
        Commands::Remove { url } => cmd_entries::remove(&config, store.as_ref(), &url).await,
        Commands::Move { url, index } => cmd_entries::move_to(&config, store.as_ref(), &url, index).await,
        Commands::Group { url, group } => {
            cmd_entries::set_group(&config, store.as_ref(), &url, Group::from(group)).await
        }
        Commands::Pin { url, off } => cmd_entries::set_pinned(&config, store.as_ref(), &url, !off).await,
        Commands::Fetch { url } => cmd_entries::fetch(&config, &url).await,
    }
}
