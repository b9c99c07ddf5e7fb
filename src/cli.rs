//! CLI domain: parse, route, help, output, and presentation only.
//! The listing pipeline lives in `crate::listing`; this layer wires flags and
//! config into it and formats the results.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{version_string, BUILD};
pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_json, format_text, EntryRecord};
pub use route::{RunContext, RunSummary, Settings};
