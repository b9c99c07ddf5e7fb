//! Config loader: assembles sources in precedence order and deserializes.

use super::merge::merge_policy;
use super::sources::{environment, global_file};
use super::CidlsConfig;
use crate::error::ListingError;
use std::path::{Path, PathBuf};

/// Loads [`CidlsConfig`] from defaults, files, and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the global config file (if any) and the environment.
    pub fn load() -> Result<CidlsConfig, ListingError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load from an explicit file, skipping the global config file.
    pub fn load_from_file(path: &Path) -> Result<CidlsConfig, ListingError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_explicit_to_builder(builder, path);
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load from `path` when given, otherwise from the default locations.
    pub fn load_optional(path: Option<&Path>) -> Result<CidlsConfig, ListingError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Location of the global config file, if one can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
