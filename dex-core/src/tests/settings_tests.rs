use super::*;

#[test]
fn env_value_wins() {
    let r = resolve("DEX_PAGE_SIZE", Some("50".to_string()), Some(30usize), 20);
    assert_eq!(r.value, 50);
    assert_eq!(r.source, ConfigSource::EnvVar("DEX_PAGE_SIZE"));
}

#[test]
fn invalid_env_value_falls_back_to_file() {
    let r = resolve("DEX_PAGE_SIZE", Some("lots".to_string()), Some(30usize), 20);
    assert_eq!(r.value, 30);
    assert_eq!(r.source, ConfigSource::SettingsFile);
}

#[test]
fn default_used_when_nothing_set() {
    let r: Resolved<usize> = resolve("DEX_PAGE_SIZE", None, None, 20);
    assert_eq!(r.value, 20);
    assert_eq!(r.source, ConfigSource::Default);
}

#[test]
fn parses_partial_settings_file() {
    let settings: Settings = toml::from_str(
        r#"
        [api]
        timeout_secs = 5
        "#,
    )
    .unwrap();
    assert_eq!(settings.api.timeout_secs, Some(5));
    assert_eq!(settings.api.base_url, None);
    assert_eq!(settings.collection, CollectionSettings::default());
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.api.base_url = Some("http://localhost:8080/api/v2".to_string());
    settings.display.page_size = Some(12);
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn broken_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[api\nbase_url = ").unwrap();
    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn config_source_display() {
    assert_eq!(ConfigSource::EnvVar("DEX_DATA_DIR").to_string(), "env $DEX_DATA_DIR");
    assert_eq!(ConfigSource::SettingsFile.to_string(), "settings file");
}
