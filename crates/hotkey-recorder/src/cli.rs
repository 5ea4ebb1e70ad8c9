use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hotkey-recorder")]
#[command(about = "Record global hotkeys for applications, plugins and actions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a hotkey for a target by pressing it
    Record {
        /// Target scope: application path, plugin id or action name
        target: String,
    },
    /// Bind a hotkey typed as text, e.g. "Ctrl + Shift + K" or "Meta"
    Bind {
        /// Target scope: application path, plugin id or action name
        target: String,
        /// Hotkey in display form
        hotkey: String,
    },
    /// Remove the hotkey bound to a target
    Clear {
        /// Target scope to unbind
        target: String,
    },
    /// List all bound hotkeys
    List,
    /// Register bound hotkeys globally and open targets when they fire
    Listen,
}
