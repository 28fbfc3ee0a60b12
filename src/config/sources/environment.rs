//! Environment variable source: MODELMAP__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses MODELMAP__ prefix and __ as separator for nested keys,
/// e.g. `MODELMAP__BACKEND__BASE_URL`. The logging variables (`MODELMAP_LOG*`,
/// single underscore) are read by the logging module and never reach this source.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("MODELMAP")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
