//! CLI help text and version reporting.

/// Build identifier baked in at compile time from `CIDLS_BUILD`
pub const BUILD: &str = match option_env!("CIDLS_BUILD") {
    Some(build) => build,
    None => "dev",
};

pub(crate) const AFTER_HELP: &str = "\
Colors follow LS_COLORS (keys: di, ln, ex, cid). Set NO_COLOR or use --color never to disable them.

Configuration is read from $XDG_CONFIG_HOME/cidls/config.toml (or --config), then from
CIDLS__LISTING__<KEY> environment variables. CIDLS_LOG sets the log filter.";

/// Text printed for `-v`
pub fn version_string() -> String {
    format!("Version: {}, Build: {}", env!("CARGO_PKG_VERSION"), BUILD)
}
