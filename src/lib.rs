//! cidls: Directory Listing with Content Identifiers
//!
//! Lists a directory the way `ls` does and prints the content identifier (CID)
//! of every file next to its name. Files are hashed in parallel, one worker per
//! entry, while output stays aligned and deterministic.

pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
