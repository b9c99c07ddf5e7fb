//! Path resolution for the directory argument

use crate::error::ListingError;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Resolve the directory to list
///
/// Falls back to the current working directory when no argument is given,
/// then expands a leading tilde.
pub fn resolve_directory(arg: Option<&Path>) -> Result<PathBuf, ListingError> {
    match arg {
        Some(path) => expand_tilde(path),
        None => std::env::current_dir().map_err(ListingError::CurrentDir),
    }
}

/// Expand a leading `~` to the current user's home directory
///
/// Only `~` on its own or followed by a separator is expanded. `~user` forms
/// are left alone.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, ListingError> {
    let Some(raw) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(std::path::is_separator) => rest,
        _ => return Ok(path.to_path_buf()),
    };

    let home = home_dir().ok_or(ListingError::HomeDirUnavailable)?;
    let rest = rest.trim_start_matches(std::path::is_separator);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Canonical form of a path for display and logging, or the path itself if it
/// cannot be resolved
pub fn canonical_or_original(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
