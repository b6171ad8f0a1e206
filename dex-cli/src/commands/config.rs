use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde_json::json;

use dex_api::ResolvedApiConfig;
use dex_core::settings::{ApiSettings, CollectionSettings, DisplaySettings, settings_path};
use dex_core::{ConfigSource, Settings, SettingsError};

use super::print_json;
use crate::context::AppContext;
use crate::error::CliError;

/// Show every resolved setting and where it came from.
pub(crate) fn run_config_show(ctx: &AppContext) -> Result<(), CliError> {
    let path = settings_path();
    let api = ResolvedApiConfig::resolve(&ctx.settings);
    let page_size = ctx.page_size();
    let data_dir = ctx.data_dir();

    let mut fields: Vec<(&str, String, ConfigSource)> = vec![
        ("api.base_url", api.base_url.value.clone(), api.base_url.source.clone()),
        (
            "api.timeout_secs",
            api.timeout_secs.value.to_string(),
            api.timeout_secs.source.clone(),
        ),
        (
            "api.search_corpus_limit",
            api.search_corpus_limit.value.to_string(),
            api.search_corpus_limit.source.clone(),
        ),
    ];
    if let Ok(dir) = &data_dir {
        fields.push((
            "collection.data_dir",
            dir.value.display().to_string(),
            dir.source.clone(),
        ));
    }
    fields.push((
        "display.page_size",
        page_size.value.to_string(),
        page_size.source.clone(),
    ));

    if ctx.json {
        let map: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|(name, value, source)| {
                (
                    name.to_string(),
                    json!({ "value": value, "source": source.to_string() }),
                )
            })
            .collect();
        return print_json(&json!({
            "settingsFile": path.as_ref().map(|p| p.display().to_string()),
            "values": map,
        }));
    }

    log::info!(
        "{}",
        "dex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Settings file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Settings file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Settings file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    for (name, value, source) in &fields {
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if let Err(e) = data_dir {
        log::info!(
            "  {} {}",
            "collection.data_dir:".if_supports_color(Stdout, |t| t.cyan()),
            e.to_string().if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    log::info!("{}", path.display());
    Ok(())
}

/// Write a settings file holding the currently resolved values.
pub(crate) fn run_config_init(ctx: &AppContext, force: bool) -> Result<(), CliError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let api = ResolvedApiConfig::resolve(&ctx.settings);
    let settings = Settings {
        api: ApiSettings {
            base_url: Some(api.base_url.value),
            timeout_secs: Some(api.timeout_secs.value),
            search_corpus_limit: Some(api.search_corpus_limit.value),
        },
        collection: CollectionSettings {
            data_dir: ctx.data_dir().ok().map(|d| d.value),
        },
        display: DisplaySettings {
            page_size: Some(ctx.page_size().value),
        },
    };
    settings.save_to(&path)?;

    log::info!(
        "{} Settings written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
