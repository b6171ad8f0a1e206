//! dex CLI
//!
//! Command-line front end for browsing the creature catalog and managing a
//! saved collection.

mod cli_types;
mod commands;
mod context;
mod error;
mod logging;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dex_core::Settings;

use cli_types::{Cli, CollectionAction, Commands, ConfigAction};
use context::AppContext;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let ctx = AppContext::new(Settings::load(), cli.quiet, cli.json, cli.data_dir);

    if let Err(e) = run(&ctx, cli.command) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        if e.is_retryable() {
            log::error!("The catalog may be temporarily unavailable; try again shortly.");
        }
        std::process::exit(e.exit_code());
    }
}

fn run(ctx: &AppContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List {
            search,
            category,
            page,
        } => commands::browse::run_list(ctx, search, category, page),
        Commands::Show { entry } => commands::show::run_show(ctx, entry),
        Commands::Save { entry } => commands::show::run_save(ctx, entry),
        Commands::Unsave { entry } => commands::collection::run_unsave(ctx, entry),
        Commands::Collection { action } => match action {
            CollectionAction::List => commands::collection::run_collection_list(ctx),
            CollectionAction::Clear { yes } => commands::collection::run_collection_clear(ctx, yes),
            CollectionAction::Status { entry } => {
                commands::collection::run_collection_status(ctx, entry)
            }
        },
        Commands::Categories => commands::categories::run_categories(ctx),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(ctx),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Init { force } => commands::config::run_config_init(ctx, force),
        },
    }
}
