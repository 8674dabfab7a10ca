//! Environment variable source: EXPLORER prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `EXPLORER__BACKEND__USE_MOCK=true` sets `backend.use_mock`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("EXPLORER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    ))
}
