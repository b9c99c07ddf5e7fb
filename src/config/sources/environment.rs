//! Environment source: CIDLS__LISTING__CID_VERSION=0 and friends.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix shared by every configuration variable
pub const ENV_PREFIX: &str = "CIDLS";

/// Add the environment source to builder.
///
/// Keys are `CIDLS__<SECTION>__<KEY>`; the double separator keeps them apart
/// from the single-underscore `CIDLS_LOG*` logging variables.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
