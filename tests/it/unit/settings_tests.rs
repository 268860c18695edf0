//! Settings persistence tests

use cyoc_playground::settings::PlaygroundSettings;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = PlaygroundSettings {
        editor_debounce_ms: 250,
        sdk_base_url: "https://cdn.example.com".to_string(),
        ..Default::default()
    };
    settings.save(&path).unwrap();

    assert_eq!(PlaygroundSettings::load(&path).unwrap(), settings);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(PlaygroundSettings::load(&path).is_err());
    assert_eq!(PlaygroundSettings::load_or_default(&path), PlaygroundSettings::default());
}

#[test]
fn test_settings_file_uses_camel_case() {
    let json = serde_json::to_value(PlaygroundSettings::default()).unwrap();

    assert_eq!(json["editorDebounceMs"], 500);
    assert_eq!(json["resizeThrottleMs"], 300);
    assert_eq!(json["querySize"], 20_000);
}

#[test]
fn test_default_path_is_in_config_dir() {
    if let Some(path) = cyoc_playground::settings::default_settings_path() {
        assert!(path.ends_with("cyoc-playground/settings.json"));
    }
}
