//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ListingError;

/// Map listing errors to the message printed on stderr.
pub fn map_error(e: &ListingError) -> String {
    format!("Error: {}", e)
}
