//! CLI parse: clap types for cidls. No behavior; definitions only.

use crate::listing::entry::CidVersion;
use clap::Parser;
use std::path::PathBuf;

/// cidls - list a directory with the content identifier of every file
#[derive(Parser, Debug)]
#[command(name = "cidls")]
#[command(about = "List information about the files in DIRECTORY (the current directory by default), with the CID of each file")]
#[command(override_usage = "cidls [OPTIONS] [DIRECTORY] [CID_VERSION]")]
#[command(disable_version_flag = true)]
#[command(after_help = crate::cli::help::AFTER_HELP)]
pub struct Cli {
    /// Directory to list; a leading ~ is expanded to the home directory
    pub directory: Option<PathBuf>,

    /// CID version to print (0 or 1, default 1)
    #[arg(value_name = "CID_VERSION", value_parser = parse_cid_version)]
    pub cid_version: Option<CidVersion>,

    /// CID version to print; the positional argument wins if both are given
    #[arg(long = "cid-version", value_name = "N", value_parser = parse_cid_version)]
    pub cid_version_flag: Option<CidVersion>,

    /// Display version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// When to use colors
    #[arg(long, value_parser = ["auto", "always", "never"])]
    pub color: Option<String>,

    /// Print lines in listing order or as each file finishes hashing
    #[arg(long, value_parser = ["sorted", "completion"])]
    pub order: Option<String>,

    /// Output format (text or json)
    #[arg(long, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// CID version requested on the command line, if any
    pub fn requested_cid_version(&self) -> Option<CidVersion> {
        self.cid_version.or(self.cid_version_flag)
    }
}

fn parse_cid_version(value: &str) -> Result<CidVersion, String> {
    value.parse::<CidVersion>().map_err(|e| e.to_string())
}
