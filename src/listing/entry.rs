//! Entry and result types shared by the listing pipeline.

use crate::error::{HashError, ListingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What kind of filesystem object an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    Symlink,
    Executable,
    Regular,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// A single directory entry, captured once from `read_dir`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Permission bits (0 where the platform does not expose them)
    pub mode: u32,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind, mode: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            mode,
        }
    }

    pub fn is_dotfile(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// CID version used to encode digests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CidVersion {
    /// base58btc, implicit dag-pb codec
    V0,
    /// base32 lower, raw codec
    #[default]
    V1,
}

impl TryFrom<u8> for CidVersion {
    type Error = ListingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CidVersion::V0),
            1 => Ok(CidVersion::V1),
            other => Err(ListingError::InvalidCidVersion(other.to_string())),
        }
    }
}

impl FromStr for CidVersion {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(CidVersion::V0),
            "1" => Ok(CidVersion::V1),
            other => Err(ListingError::InvalidCidVersion(other.to_string())),
        }
    }
}

impl fmt::Display for CidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CidVersion::V0 => write!(f, "0"),
            CidVersion::V1 => write!(f, "1"),
        }
    }
}

/// A directory read, sorted and measured before any hashing starts
#[derive(Debug, Clone)]
pub struct Listing {
    pub dir: PathBuf,
    pub entries: Vec<Entry>,
    /// Width of the name column, in characters
    pub width: usize,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of processing one entry
#[derive(Debug)]
pub enum EntryOutcome {
    Cid(String),
    Error(HashError),
    /// Directories (and links to them) carry no CID
    Skipped,
}

impl EntryOutcome {
    pub fn cid(&self) -> Option<&str> {
        match self {
            EntryOutcome::Cid(cid) => Some(cid),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&HashError> {
        match self {
            EntryOutcome::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// A finished entry, ready to print
#[derive(Debug)]
pub struct Rendered {
    /// Position in the sorted listing
    pub index: usize,
    pub entry: Entry,
    pub outcome: EntryOutcome,
    pub line: String,
}
