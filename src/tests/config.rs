use super::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_from(&dir.path().join("mdoutline.toml"));

    assert_eq!(config, Config::default());
    assert_eq!(config.max_level, 6);
    assert_eq!(config.file_extensions, vec!["md".to_string()]);
    assert!(!config.sort);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_level = 2\nsort = true").unwrap();

    let config = Config::load_from(file.path());

    assert_eq!(config.max_level, 2);
    assert!(config.sort);
    assert_eq!(config.file_extensions, vec!["md".to_string()]);
}

#[test]
fn test_malformed_file_falls_back() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_level = [[[").unwrap();

    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_outline_options_clamp_level() {
    let config = Config {
        max_level: 0,
        ..Config::default()
    };
    assert_eq!(config.outline_options().max_level, 1);

    let config = Config {
        max_level: 9,
        ..Config::default()
    };
    assert_eq!(config.outline_options().max_level, 6);
}
