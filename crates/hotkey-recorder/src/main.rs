//! Hotkey Recorder: capture, store and activate global hotkeys.

mod capture_window;
mod cli;
mod config;
mod error;
mod hotkey_listener;
mod listen_app;
mod listener_event;
mod notifier;
mod recorder_app;
mod registry_store;
#[cfg(test)]
mod tests;

pub(crate) use {
    capture_window::CaptureWindow,
    error::{AppError, Result as AppResult},
    hotkey_listener::HotkeyListener,
    listener_event::ListenerEvent,
    notifier::Notifier,
    registry_store::FileRegistry,
};

use crate::{
    cli::{Cli, Commands},
    config::Config,
};

use hotkey_recorder_core::{HotkeyDescriptor, PersistenceGateway};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "hotkey_recorder=debug,hotkey_recorder_core=debug";

/// Application entry point.
fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Record { target } => recorder_app::run(&config, target),
        Commands::Bind { target, hotkey } => {
            let descriptor = HotkeyDescriptor::parse_display(&hotkey)?;
            let mut registry = FileRegistry::open(&config.registry_path()?)?;
            registry.save(&target, Some(&descriptor))?;
            info!(target_id = %target, descriptor = %descriptor, "Hotkey bound");
            println!("{}\t{}", target, descriptor);
            Ok(())
        }
        Commands::Clear { target } => {
            let mut registry = FileRegistry::open(&config.registry_path()?)?;
            registry.save(&target, None)?;
            info!(target_id = %target, "Hotkey cleared");
            Ok(())
        }
        Commands::List => {
            let registry = FileRegistry::open(&config.registry_path()?)?;
            for (target, descriptor) in registry.registry().iter() {
                println!("{}\t{}", target, descriptor);
            }
            Ok(())
        }
        Commands::Listen => listen_app::run(&config),
    }
}
