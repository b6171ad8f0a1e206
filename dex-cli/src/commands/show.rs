use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use dex_core::display::{format_id, format_name, format_saved_at};
use dex_core::{CatalogEntryDetail, EntryRef};

use super::{paint_categories, print_json};
use crate::context::AppContext;
use crate::error::CliError;
use crate::spinner;

/// Base stats top out at 255.
const STAT_MAX: u32 = 255;
const STAT_BAR_WIDTH: u32 = 20;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailOutput<'a> {
    #[serde(flatten)]
    detail: &'a CatalogEntryDetail,
    saved_at: Option<&'a str>,
}

fn stat_label(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        other => format_name(other),
    }
}

fn stat_bar(value: u32) -> String {
    let filled = (value.min(STAT_MAX) * STAT_BAR_WIDTH).div_ceil(STAT_MAX);
    "\u{2588}".repeat(filled as usize)
}

/// Show the detail view for one entry.
pub(crate) fn run_show(ctx: &AppContext, entry: EntryRef) -> Result<(), CliError> {
    let service = ctx.service()?;
    let rt = ctx.runtime()?;
    let pb = spinner::start(ctx.hide_progress(), format!("Fetching {}...", entry));
    let result = rt.block_on(service.detail(&entry));
    pb.finish_and_clear();
    let detail = result?;

    let store = ctx.open_store()?;
    let saved_at = store.saved_at(detail.id);

    if ctx.json {
        return print_json(&DetailOutput {
            detail: &detail,
            saved_at,
        });
    }

    log::info!(
        "{} {}",
        format!("#{}", format_id(detail.id)).if_supports_color(Stdout, |t| t.dimmed()),
        format_name(&detail.name).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Categories: {}", paint_categories(&detail.categories));
    log::info!(
        "  Height: {:.1} m   Weight: {:.1} kg",
        detail.height_m(),
        detail.weight_kg()
    );
    if !detail.abilities.is_empty() {
        let abilities: Vec<String> = detail.abilities.iter().map(|a| format_name(a)).collect();
        log::info!("  Abilities: {}", abilities.join(", "));
    }

    if !detail.stats.is_empty() {
        log::info!("");
        log::info!("  {}", "Base stats".if_supports_color(Stdout, |t| t.bold()));
        for stat in &detail.stats {
            log::info!(
                "    {:<16} {:>3}  {}",
                stat_label(&stat.name),
                stat.value,
                stat_bar(stat.value).if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        log::info!("    {:<16} {:>3}", "Total", detail.stat_total());
    }

    log::info!("");
    log::info!(
        "  Image: {}",
        detail.image_url.if_supports_color(Stdout, |t| t.cyan())
    );
    match saved_at {
        Some(ts) => log::info!(
            "  {} Saved {}",
            "\u{2605}".if_supports_color(Stdout, |t| t.yellow()),
            format_saved_at(ts),
        ),
        None => log::info!(
            "  {}",
            "Not in your collection".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
    Ok(())
}

/// Fetch an entry's summary and add it to the collection.
pub(crate) fn run_save(ctx: &AppContext, entry: EntryRef) -> Result<(), CliError> {
    let service = ctx.service()?;
    let rt = ctx.runtime()?;
    let pb = spinner::start(ctx.hide_progress(), format!("Fetching {}...", entry));
    let result = rt.block_on(service.client().fetch_summary(&entry));
    pb.finish_and_clear();
    let summary = result?;

    let mut store = ctx.open_store()?;
    let added = store.add(&summary);

    if ctx.json {
        return print_json(&store.get(summary.id));
    }

    let label = format!("#{} {}", format_id(summary.id), format_name(&summary.name));
    if added {
        log::info!(
            "{} Saved {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            label.if_supports_color(Stdout, |t| t.bold()),
        );
    } else if let Some(ts) = store.saved_at(summary.id) {
        log::info!(
            "{} already saved on {}",
            label.if_supports_color(Stdout, |t| t.bold()),
            format_saved_at(ts),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_labels() {
        assert_eq!(stat_label("hp"), "HP");
        assert_eq!(stat_label("special-attack"), "Special Attack");
    }

    #[test]
    fn stat_bar_scales_to_width() {
        assert_eq!(stat_bar(0), "");
        assert_eq!(stat_bar(255).chars().count(), 20);
        assert_eq!(stat_bar(300).chars().count(), 20);
        assert_eq!(stat_bar(1).chars().count(), 1);
    }
}
