use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde_json::json;

use dex_collection::{CollectionStore, KeyValueStorage};
use dex_core::EntryRef;
use dex_core::display::{format_id, format_name, format_saved_at, format_saved_date};

use super::print_json;
use crate::context::AppContext;
use crate::error::CliError;

/// Map an id or a saved name to an id. Names only resolve against the
/// collection, so an unsaved name yields `None`.
fn saved_id<S: KeyValueStorage>(store: &CollectionStore<S>, entry: &EntryRef) -> Option<u32> {
    match entry {
        EntryRef::Id(id) => Some(*id),
        EntryRef::Name(name) => store
            .entries()
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.id),
    }
}

pub(crate) fn run_unsave(ctx: &AppContext, entry: EntryRef) -> Result<(), CliError> {
    let mut store = ctx.open_store()?;
    let removed = saved_id(&store, &entry).is_some_and(|id| store.remove(id));

    if ctx.json {
        return print_json(&json!({ "entry": entry.to_string(), "removed": removed }));
    }
    if removed {
        log::info!(
            "{} Removed {} from your collection",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            entry,
        );
    } else {
        log::info!(
            "{}",
            format!("{} is not in your collection", entry).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

pub(crate) fn run_collection_list(ctx: &AppContext) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let entries = store.entries_by_recent();

    if ctx.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        log::info!(
            "{}",
            "Your collection is empty.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Run 'dex save <id|name>' to add entries.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("Saved collection ({})", entries.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    for entry in entries {
        log::info!(
            "  {} {:<18} {}",
            format!("#{}", format_id(entry.id)).if_supports_color(Stdout, |t| t.dimmed()),
            format_name(&entry.name),
            format!("Saved {}", format_saved_date(&entry.saved_at))
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} [y/N]: ", prompt);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub(crate) fn run_collection_clear(ctx: &AppContext, yes: bool) -> Result<(), CliError> {
    let mut store = ctx.open_store()?;
    let count = store.len();

    if count == 0 {
        log::info!("Your collection is already empty.");
        return Ok(());
    }
    if !yes && !confirm(&format!("Remove all {} saved entries?", count))? {
        log::info!("Cancelled.");
        return Ok(());
    }

    store.clear();
    log::info!(
        "{} Removed {} saved entries",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        count,
    );
    Ok(())
}

pub(crate) fn run_collection_status(ctx: &AppContext, entry: EntryRef) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let saved = saved_id(&store, &entry).and_then(|id| store.get(id));

    if ctx.json {
        return print_json(&json!({
            "entry": entry.to_string(),
            "saved": saved.is_some(),
            "savedAt": saved.map(|e| e.saved_at.as_str()),
        }));
    }
    match saved {
        Some(e) => log::info!(
            "{} #{} {} saved {}",
            "\u{2605}".if_supports_color(Stdout, |t| t.yellow()),
            format_id(e.id),
            format_name(&e.name),
            format_saved_at(&e.saved_at),
        ),
        None => log::info!("{} is not saved", entry),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_collection::{CollectionItem, MemoryStorage};

    #[test]
    fn saved_id_resolves_names_against_collection() {
        let mut store = CollectionStore::open(MemoryStorage::new());
        store.add(CollectionItem::new(25, "pikachu", "25.png"));

        assert_eq!(saved_id(&store, &EntryRef::name("Pikachu")), Some(25));
        assert_eq!(saved_id(&store, &EntryRef::name("eevee")), None);
        assert_eq!(saved_id(&store, &EntryRef::Id(133)), Some(133));
    }
}
