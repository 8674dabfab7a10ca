//! Configuration
//!
//! Layered configuration for the explorer: built-in defaults, the global
//! config file, an explicit `--config` file and `EXPLORER__*` environment
//! variables, in increasing order of precedence.

mod facade;
mod merge;
pub mod paths;
mod sources;

use crate::logging::LoggingConfig;
use crate::provider::BackendConfig;
use serde::{Deserialize, Serialize};

pub use facade::ConfigLoader;

/// Top-level explorer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
