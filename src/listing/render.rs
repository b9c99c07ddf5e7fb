//! Line formatting for a single listing entry

use crate::listing::entry::{Entry, EntryKind, EntryOutcome};
use crate::listing::palette::{Palette, Role};
use unicode_width::UnicodeWidthStr;

/// Color role for an entry's name, if it gets one
///
/// Regular files are printed uncolored. Dotfiles take precedence over the
/// symlink and executable colors; dot-directories stay directory-colored.
pub fn name_role(entry: &Entry) -> Option<Role> {
    match entry.kind {
        EntryKind::Directory => Some(Role::Directory),
        _ if entry.is_dotfile() => Some(Role::DotFile),
        EntryKind::Symlink => Some(Role::Symlink),
        EntryKind::Executable => Some(Role::Executable),
        EntryKind::Regular => None,
    }
}

/// Format one output line
///
/// The name is left-aligned and padded to `width` terminal cells so the CID
/// column lines up across entries, whatever order they finish in.
pub fn render_line(entry: &Entry, outcome: &EntryOutcome, width: usize, palette: &Palette) -> String {
    let padded = pad_name(&entry.name, width);
    let name = match name_role(entry) {
        Some(role) => palette.paint(role, &padded),
        None => padded,
    };

    let detail = match outcome {
        EntryOutcome::Skipped => String::new(),
        EntryOutcome::Cid(cid) => palette.paint(Role::Cid, cid),
        EntryOutcome::Error(err) if entry.is_dotfile() => format!("ERROR: {}", err),
        EntryOutcome::Error(err) if err.is_access_error() => palette.error(&err.to_string()),
        EntryOutcome::Error(err) => palette.error(&format!("ERROR: {}", err)),
    };

    format!("{}\t{}", name, detail)
}

/// Pad `name` with spaces up to `width` display cells
///
/// `format!("{:<w$}")` counts chars, which misaligns double-width names.
pub fn pad_name(name: &str, width: usize) -> String {
    let fill = width.saturating_sub(name.width());
    let mut padded = String::with_capacity(name.len() + fill);
    padded.push_str(name);
    padded.extend(std::iter::repeat(' ').take(fill));
    padded
}
