//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("listing.cid_version", 1)?
        .set_default("listing.color", "auto")?
        .set_default("listing.order", "sorted")?
        .set_default("listing.format", "text")?
        .set_default("logging.enabled", false)?
        .set_default("logging.level", "info")?
        .set_default("logging.output", "stderr")
}
