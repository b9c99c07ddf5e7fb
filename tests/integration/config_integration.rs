//! Configuration Integration Tests
//!
//! Verifies config files and environment variables reach the run settings.

use cidls::cli::{Cli, RunContext};
use cidls::config::{ConfigLoader, OutputFormat, OutputOrder};
use cidls::listing::palette::ColorMode;
use cidls::listing::CidVersion;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    fs::write(
        &config_file,
        r#"
[listing]
cid_version = 0
color = "always"
order = "completion"
format = "json"
"#,
    )
    .unwrap();

    let context = RunContext::new(Some(&config_file)).unwrap();
    let cli = Cli::try_parse_from(["cidls"]).unwrap();
    let settings = context.settings(&cli).unwrap();

    assert_eq!(settings.cid_version, CidVersion::V0);
    assert_eq!(settings.color, ColorMode::Always);
    assert_eq!(settings.order, OutputOrder::Completion);
    assert_eq!(settings.format, OutputFormat::Json);
}

#[test]
fn test_invalid_config_value_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "[listing]\ncid_version = 5\n").unwrap();

    assert!(RunContext::new(Some(&config_file)).is_err());
}

#[test]
fn test_unknown_color_mode_in_file_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "[listing]\ncolor = \"rainbow\"\n").unwrap();

    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}
