//! CLI route: run context that merges settings and drives the listing.

use crate::cli::parse::Cli;
use crate::cli::presentation::{format_json, format_text};
use crate::config::{CidlsConfig, ConfigLoader, OutputFormat, OutputOrder};
use crate::error::ListingError;
use crate::listing::entry::{CidVersion, EntryOutcome, Rendered};
use crate::listing::fanout::{collect_sorted, hash_entries};
use crate::listing::palette::{ColorMode, Palette};
use crate::listing::path::{canonical_or_original, resolve_directory};
use crate::listing::walker::read_listing;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Effective settings after merging config and CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub cid_version: CidVersion,
    pub color: ColorMode,
    pub order: OutputOrder,
    pub format: OutputFormat,
}

/// Counts reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub hashed: usize,
    pub errors: usize,
}

impl RunSummary {
    fn record(&mut self, rendered: &Rendered) {
        self.entries += 1;
        match rendered.outcome {
            EntryOutcome::Cid(_) => self.hashed += 1,
            EntryOutcome::Error(_) => self.errors += 1,
            EntryOutcome::Skipped => {}
        }
    }
}

/// Runtime context for CLI execution: the loaded configuration.
pub struct RunContext {
    config: CidlsConfig,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<&Path>) -> Result<Self, ListingError> {
        let config = ConfigLoader::load_optional(config_path)?;
        Self::from_config(config)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(config: CidlsConfig) -> Result<Self, ListingError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ListingError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CidlsConfig {
        &self.config
    }

    /// Merge CLI flags over the configuration.
    pub fn settings(&self, cli: &Cli) -> Result<Settings, ListingError> {
        let listing = &self.config.listing;

        let cid_version = match cli.requested_cid_version() {
            Some(version) => version,
            None => listing.cid_version()?,
        };
        let color = match cli.color.as_deref() {
            Some(mode) => mode.parse::<ColorMode>().map_err(ListingError::ConfigError)?,
            None => listing.color,
        };
        let order = match cli.order.as_deref() {
            Some(order) => order.parse::<OutputOrder>()?,
            None => listing.order,
        };
        let format = match cli.format.as_deref() {
            Some(format) => format.parse::<OutputFormat>()?,
            None => listing.format,
        };

        Ok(Settings {
            cid_version,
            color,
            order,
            format,
        })
    }

    /// List the requested directory and write the result to `out`.
    pub fn execute(&self, cli: &Cli, out: &mut dyn Write) -> Result<RunSummary, ListingError> {
        let settings = self.settings(cli)?;
        let dir = resolve_directory(cli.directory.as_deref())?;
        self.list(&dir, settings, out)
    }

    /// List `dir` with explicit settings.
    pub fn list(
        &self,
        dir: &Path,
        settings: Settings,
        out: &mut dyn Write,
    ) -> Result<RunSummary, ListingError> {
        let started = Instant::now();
        let listing = read_listing(dir)?;

        info!(
            dir = %canonical_or_original(dir).display(),
            entries = listing.len(),
            cid_version = %settings.cid_version,
            order = ?settings.order,
            "Listing directory"
        );

        let palette = match settings.format {
            OutputFormat::Json => Palette::plain(),
            OutputFormat::Text => Palette::from_env(settings.color.enabled()),
        };

        let mut summary = RunSummary::default();
        match (settings.format, settings.order) {
            (OutputFormat::Text, OutputOrder::Completion) => {
                hash_entries(&listing, settings.cid_version, &palette, |rendered| {
                    summary.record(&rendered);
                    writeln!(out, "{}", rendered.line)?;
                    Ok(())
                })?;
            }
            (OutputFormat::Text, OutputOrder::Sorted) => {
                let results = collect_sorted(&listing, settings.cid_version, &palette)?;
                results.iter().for_each(|r| summary.record(r));
                if !results.is_empty() {
                    writeln!(out, "{}", format_text(&results))?;
                }
            }
            (OutputFormat::Json, _) => {
                let results = collect_sorted(&listing, settings.cid_version, &palette)?;
                results.iter().for_each(|r| summary.record(r));
                writeln!(out, "{}", format_json(&results)?)?;
            }
        }
        out.flush()?;

        info!(
            entries = summary.entries,
            hashed = summary.hashed,
            errors = summary.errors,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Listing complete"
        );

        Ok(summary)
    }
}
