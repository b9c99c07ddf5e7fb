//! Global config file source: $XDG_CONFIG_HOME/cidls/config.toml or the
//! platform config directory.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::{File, FileFormat};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("cidls")
                .join("config.toml"),
        );
    }

    ProjectDirs::from("", "", "cidls").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match global_config_path() {
        Some(path) if path.exists() => {
            debug!(config_path = %path.display(), "Loading global configuration");
            builder.add_source(File::from(path.as_path()).required(false))
        }
        _ => builder,
    }
}

/// Add an explicitly requested config file; it must exist and is read as
/// TOML whatever its extension.
pub fn add_explicit_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    debug!(config_path = %path.display(), "Loading configuration file");
    builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
}
