//! Configuration loading and graceful degradation tests
//!
//! Tests that change XDG_CONFIG_HOME are marked with #[serial] so they do
//! not race each other.

use serial_test::serial;
use std::env;
use std::fs;
use wflow_common::config::{ConfigLoader, ConfigOverrides, TomlConfig};
use wflow_common::Error;

#[test]
fn test_explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("service.toml");
    fs::write(
        &path,
        "host = \"127.0.0.1\"\nport = 8100\n\n[logging]\nlevel = \"debug\"\nfile = \"/tmp/wflow.log\"\n",
    )
    .unwrap();

    let loaded = ConfigLoader::new("wflow").load(Some(&path)).unwrap();
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    let config = loaded.config;

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8100);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/wflow.log"))
    );
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = ConfigLoader::new("wflow").load(Some(&path));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "port = [1, 2").unwrap();

    let result = ConfigLoader::new("wflow").load(Some(&path));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_user_config_dir_is_searched_first() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("wflow-test-app");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "port = 8200\n").unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let loader = ConfigLoader::new("wflow-test-app");
    let located = loader.locate();
    let config = loader.load(None);

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    #[cfg(target_os = "linux")]
    {
        assert_eq!(located, Some(app_dir.join("config.toml")));
        let loaded = config.unwrap();
        assert_eq!(loaded.config.port, 8200);
        assert_eq!(loaded.source, Some(app_dir.join("config.toml")));
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = (located, config);
    }
}

#[test]
#[serial]
fn test_missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    // An application directory nobody has created
    let loader = ConfigLoader::new("wflow-test-no-such-app");
    let config = loader.load(None);

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    // A system-wide file would legitimately take over here
    if !std::path::Path::new("/etc/wflow-test-no-such-app/config.toml").exists() {
        let loaded = config.unwrap();
        assert_eq!(loaded.config, TomlConfig::default());
        assert!(loaded.source.is_none());
    }
}

#[test]
fn test_candidate_paths_end_with_config_toml() {
    let loader = ConfigLoader::new("wflow");
    let paths = loader.candidate_paths();

    assert!(!paths.is_empty());
    for path in paths {
        assert!(path.ends_with("wflow/config.toml"));
    }
}

#[test]
fn test_overrides_on_defaults() {
    let config = TomlConfig::default().with_overrides(ConfigOverrides {
        host: Some("127.0.0.1".to_string()),
        port: Some(8300),
        log_level: None,
        log_file: None,
    });

    assert_eq!(config.bind_address().unwrap().to_string(), "127.0.0.1:8300");
    assert_eq!(config.logging.level, "info");
}
