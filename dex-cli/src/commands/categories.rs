use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde_json::json;

use dex_core::{KNOWN_CATEGORIES, category_color, category_rgb};

use super::print_json;
use crate::context::AppContext;
use crate::error::CliError;

/// List the known categories with their palette colors.
pub(crate) fn run_categories(ctx: &AppContext) -> Result<(), CliError> {
    if ctx.json {
        let list: Vec<_> = KNOWN_CATEGORIES
            .iter()
            .map(|c| json!({ "name": c, "color": category_color(c) }))
            .collect();
        return print_json(&list);
    }

    log::info!("{}", "Categories:".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    for category in KNOWN_CATEGORIES {
        let (r, g, b) = category_rgb(category);
        log::info!(
            "  {} {}",
            format!("{:<10}", category).if_supports_color(Stdout, |t| t.truecolor(r, g, b)),
            category_color(category).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");
    log::info!("Filter with 'dex list --category <name>'.");
    Ok(())
}
