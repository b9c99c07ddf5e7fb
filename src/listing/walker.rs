//! Single-level directory reader

use crate::error::ListingError;
use crate::listing::entry::{Entry, EntryKind, Listing};
use std::fs::{self, DirEntry};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

/// Read and classify the entries of `dir`
///
/// The directory is checked for existence and access first so those cases get
/// a clear message. Entries are sorted directories-first, then by name, and
/// the name column width is fixed before any hashing starts.
pub fn read_listing(dir: &Path) -> Result<Listing, ListingError> {
    match fs::metadata(dir) {
        Ok(metadata) if !metadata.is_dir() => {
            return Err(ListingError::NotADirectory(dir.to_path_buf()));
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ListingError::DirectoryNotFound(dir.to_path_buf()));
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(ListingError::PermissionDenied(dir.to_path_buf()));
        }
        Err(e) => {
            return Err(ListingError::ReadDir {
                path: dir.to_path_buf(),
                source: e,
            });
        }
    }

    let read_dir = fs::read_dir(dir).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => ListingError::PermissionDenied(dir.to_path_buf()),
        _ => ListingError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        },
    })?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| ListingError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        match classify(&dir_entry) {
            Some(entry) => entries.push(entry),
            None => warn!(
                entry = %dir_entry.file_name().to_string_lossy(),
                "Entry vanished before it could be classified"
            ),
        }
    }

    sort_entries(&mut entries);
    let width = name_width(&entries);

    debug!(dir = %dir.display(), entries = entries.len(), width, "Directory read");

    Ok(Listing {
        dir: dir.to_path_buf(),
        entries,
        width,
    })
}

/// Sort entries: directories first, then by name
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.kind
            .is_dir()
            .cmp(&a.kind.is_dir())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Width of the name column: the widest name, in terminal cells
pub fn name_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(0)
}

fn classify(dir_entry: &DirEntry) -> Option<Entry> {
    let name = dir_entry.file_name().to_string_lossy().into_owned();
    let file_type = dir_entry.file_type().ok()?;

    if file_type.is_dir() {
        return Some(Entry::new(name, EntryKind::Directory, mode_of(dir_entry)));
    }
    if file_type.is_symlink() {
        return Some(Entry::new(name, EntryKind::Symlink, 0));
    }

    let mode = mode_of(dir_entry);
    let kind = if mode & 0o111 != 0 {
        EntryKind::Executable
    } else {
        EntryKind::Regular
    };
    Some(Entry::new(name, kind, mode))
}

#[cfg(unix)]
fn mode_of(dir_entry: &DirEntry) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    dir_entry
        .metadata()
        .map(|m| m.permissions().mode() & 0o7777)
        .unwrap_or(0)
}

#[cfg(not(unix))]
fn mode_of(_dir_entry: &DirEntry) -> u32 {
    0
}
