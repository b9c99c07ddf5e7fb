//! CLI presentation: text and json formatters for listing results.

use crate::error::ListingError;
use crate::listing::entry::{EntryKind, Rendered};
use serde::Serialize;

/// One entry in the json output
#[derive(Debug, Serialize)]
pub struct EntryRecord<'a> {
    pub name: &'a str,
    pub kind: EntryKind,
    pub cid: Option<&'a str>,
    pub error: Option<String>,
}

impl<'a> From<&'a Rendered> for EntryRecord<'a> {
    fn from(rendered: &'a Rendered) -> Self {
        Self {
            name: &rendered.entry.name,
            kind: rendered.entry.kind,
            cid: rendered.outcome.cid(),
            error: rendered.outcome.error().map(|e| e.to_string()),
        }
    }
}

/// Text output: one pre-rendered line per entry
pub fn format_text(results: &[Rendered]) -> String {
    results
        .iter()
        .map(|r| r.line.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON output: an array of entry records, in the order given
pub fn format_json(results: &[Rendered]) -> Result<String, ListingError> {
    let records: Vec<EntryRecord<'_>> = results.iter().map(EntryRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
