pub(crate) mod browse;
pub(crate) mod categories;
pub(crate) mod collection;
pub(crate) mod config;
pub(crate) mod show;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use dex_core::category_rgb;

use crate::error::CliError;

/// Print `value` as pretty JSON on stdout, bypassing the logger so `--quiet`
/// never swallows machine-readable output.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One category name in its palette color.
fn paint_category(category: &str) -> String {
    let (r, g, b) = category_rgb(category);
    category
        .if_supports_color(Stdout, |t| t.truecolor(r, g, b))
        .to_string()
}

/// Categories joined with `/`, each in its palette color.
pub(crate) fn paint_categories(categories: &[String]) -> String {
    categories
        .iter()
        .map(|c| paint_category(c))
        .collect::<Vec<_>>()
        .join("/")
}
