//! CLI definitions for LinkStart.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// LinkStart CLI.
#[derive(Parser)]
#[command(name = "linkstart")]
#[command(about = "Open a saved set of URLs across your browser windows")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.linkstart/config.toml)
    #[arg(short, long, global = true, env = "LINKSTART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Open all stored entries now
    Open {
        /// Place into a simulated browser and print the resulting layout
        #[arg(long)]
        dry_run: bool,
    },

    /// Run the browser-startup trigger
    Startup,

    /// Run the install/update trigger
    Installed,

    /// Handle one JSON request message and print the JSON response
    Send {
        /// e.g. '{"action":"openTabs"}'
        message: String,
    },

    /// List stored entries
    List,

    /// Add an entry
    Add {
        /// URL; the https:// prefix may be omitted
        url: String,

        /// Group: 1 opens in the focused window, 2 in a side window
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        group: u8,
    },

    /// Remove an entry
    Remove {
        url: String,
    },

    /// Move an entry to a position in the list
    Move {
        url: String,

        /// Zero-based target position
        index: usize,
    },

    /// Change the group of an entry
    Group {
        url: String,

        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        group: u8,
    },

    /// Pin an entry when opened
    Pin {
        url: String,

        /// Unpin instead
        #[arg(long)]
        off: bool,
    },

    /// Look up the title of a URL
    Fetch {
        url: String,
    },
}
