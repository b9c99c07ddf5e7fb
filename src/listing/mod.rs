//! Directory Listing
//!
//! Reads a single directory, classifies and sorts its entries, and computes a
//! content identifier for every non-directory entry in parallel.

pub mod entry;
pub mod fanout;
pub mod hasher;
pub mod palette;
pub mod path;
pub mod render;
pub mod walker;

pub use entry::{CidVersion, Entry, EntryKind, EntryOutcome, Listing, Rendered};
