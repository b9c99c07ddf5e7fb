//! cidls CLI Binary
//!
//! Command-line interface for listing a directory with content identifiers.

use cidls::cli::{map_error, version_string, Cli, RunContext};
use cidls::config::CidlsConfig;
use cidls::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}\n", version_string());
        return;
    }

    // Configuration errors are reported before logging exists
    let context = match RunContext::new(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, context.config());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("cidls starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match context.execute(&cli, &mut out) {
        Ok(summary) => {
            info!(entries = summary.entries, "Command completed successfully");
        }
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &CidlsConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
