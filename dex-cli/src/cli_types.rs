//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use dex_core::EntryRef;

#[derive(Parser)]
#[command(name = "dex")]
#[command(about = "Browse the creature catalog and keep a saved collection", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Directory holding the saved collection (overrides settings and $DEX_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page window arguments shared by listing commands.
#[derive(Args, Clone)]
pub(crate) struct PageArgs {
    /// Entries per page (default: display.page_size setting, or 20)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Number of entries to skip
    #[arg(short, long, default_value_t = 0)]
    pub offset: usize,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List catalog entries, optionally searching by name or filtering by category
    List {
        /// Case-insensitive name substring (overrides --category)
        #[arg(short, long)]
        search: Option<String>,

        /// Only entries of this category (e.g., fire, water); "all" for no filter
        #[arg(short, long)]
        category: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show full details for one entry
    Show {
        /// Entry id (e.g., 25 or #025) or name (e.g., pikachu)
        entry: EntryRef,
    },

    /// Add an entry to the saved collection
    Save {
        /// Entry id or name
        entry: EntryRef,
    },

    /// Remove an entry from the saved collection
    Unsave {
        /// Entry id or saved name
        entry: EntryRef,
    },

    /// Manage the saved collection
    Collection {
        #[command(subcommand)]
        action: CollectionAction,
    },

    /// List known categories and their colors
    Categories,

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CollectionAction {
    /// List saved entries, newest first
    List,

    /// Remove every saved entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show whether an entry is saved and when
    Status {
        /// Entry id or saved name
        entry: EntryRef,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and their sources
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the current values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
