use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use dex_api::QueryMode;
use dex_core::category::is_known_category;
use dex_core::display::{format_id, format_name, truncate};
use dex_core::{CatalogEntrySummary, PageResult};

use super::{paint_categories, print_json};
use crate::cli_types::PageArgs;
use crate::context::AppContext;
use crate::error::CliError;
use crate::spinner;

const NAME_WIDTH: usize = 18;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedEntry<'a> {
    #[serde(flatten)]
    entry: &'a CatalogEntrySummary,
    saved: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput<'a> {
    mode: String,
    count: usize,
    next: Option<&'a str>,
    previous: Option<&'a str>,
    results: Vec<ListedEntry<'a>>,
}

/// List one page in whichever mode the flags select.
pub(crate) fn run_list(
    ctx: &AppContext,
    search: Option<String>,
    category: Option<String>,
    page: PageArgs,
) -> Result<(), CliError> {
    if QueryMode::search_overrides_filter(search.as_deref(), category.as_deref()) {
        log::warn!("Searching by name; --category is ignored");
    }
    let mode = QueryMode::resolve(search.as_deref(), category.as_deref());
    if let QueryMode::Filter(c) = &mode {
        if !is_known_category(c) {
            log::warn!("'{}' is not a known category; see 'dex categories'", c);
        }
    }
    let limit = page.limit.unwrap_or_else(|| ctx.page_size().value);
    let offset = page.offset;

    let service = ctx.service()?;
    let rt = ctx.runtime()?;
    let pb = spinner::start(ctx.hide_progress(), format!("Loading ({})...", mode));
    let result = rt.block_on(service.query(&mode, limit, offset));
    pb.finish_and_clear();
    let result = result?;

    let store = ctx.open_store()?;

    if ctx.json {
        let output = ListOutput {
            mode: mode.to_string(),
            count: result.count,
            next: result.next.as_deref(),
            previous: result.previous.as_deref(),
            results: result
                .results
                .iter()
                .map(|entry| ListedEntry {
                    entry,
                    saved: store.is_saved(entry.id),
                })
                .collect(),
        };
        return print_json(&output);
    }

    log::info!("{}", mode.if_supports_color(Stdout, |t| t.bold()));
    print_page(&result, offset, |id| store.is_saved(id));
    Ok(())
}

fn print_page(page: &PageResult<CatalogEntrySummary>, offset: usize, is_saved: impl Fn(u32) -> bool) {
    let Some((first, last)) = page.display_range(offset) else {
        log::info!(
            "{}",
            "No entries found.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        if page.count > 0 {
            log::info!("Offset {} is past the last of {} matches.", offset, page.count);
        }
        return;
    };

    log::info!("Showing {} - {} of {}", first, last, page.count);
    log::info!("");

    for entry in &page.results {
        let id = format!("#{}", format_id(entry.id));
        let name = format!(
            "{:<width$}",
            truncate(&format_name(&entry.name), NAME_WIDTH, "..."),
            width = NAME_WIDTH
        );
        let marker = if is_saved(entry.id) {
            format!(" {}", "\u{2605}".if_supports_color(Stdout, |t| t.yellow()))
        } else {
            String::new()
        };
        log::info!(
            "  {} {} {}{}",
            id.if_supports_color(Stdout, |t| t.dimmed()),
            name.if_supports_color(Stdout, |t| t.bold()),
            paint_categories(&entry.categories),
            marker,
        );
    }

    let mut nav = Vec::new();
    if let Some(prev) = page.previous_offset() {
        nav.push(format!("previous: --offset {}", prev));
    }
    if let Some(next) = page.next_offset() {
        nav.push(format!("next: --offset {}", next));
    }
    if !nav.is_empty() {
        log::info!("");
        log::info!("{}", nav.join("  ").if_supports_color(Stdout, |t| t.dimmed()));
    }
}
