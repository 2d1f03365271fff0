// Configuration and content loading from disk

use std::fs;
use std::time::Duration;

use pixelfolio::config::Config;
use pixelfolio::content::Content;
use pixelfolio::errors::{ConfigError, ContentError};
use pixelfolio::view::ViewSettings;

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [timing]
        tick_ms = 50
        startup_cap_ms = 2500

        [layout]
        compact_width = 120
        "#,
    )
    .expect("write config");

    let config = Config::load(Some(&path)).expect("config loads");
    assert_eq!(config.timing.tick(), Duration::from_millis(50));
    assert_eq!(config.timing.startup_cap(), Some(Duration::from_millis(2500)));
    assert_eq!(config.timing.completion_delay(), Duration::from_millis(500));
    assert_eq!(config.layout.compact_width, 120);
    assert_eq!(config.layout.probe_line, 4);

    let settings = ViewSettings::from_config(&config);
    assert_eq!(settings.tick, Duration::from_millis(50));
    assert_eq!(settings.portfolio.scroll_throttle, Duration::from_millis(100));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load(Some(&path)),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_invalid_config_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[timing]\ntick_ms = \"fast\"\n").expect("write config");

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_content_file_overrides_builtin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("content.toml");
    let mut document = include_str!("../assets/content.toml").to_string();
    document = document.replace("AIYVAN'S PORTFOLIO", "TEST PORTFOLIO");
    fs::write(&path, document).expect("write content");

    let content = Content::load(&path).expect("content loads");
    assert_eq!(content.start.title, "TEST PORTFOLIO");
}

#[test]
fn test_missing_content_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Content::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
}
