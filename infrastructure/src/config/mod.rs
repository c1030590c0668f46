//! Configuration file loading for debate-flows
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEBATE_FLOWS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./debate-flows.toml` or `./.debate-flows.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/debate-flows/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDirectConfig, FileFlowsConfig, FileGatewayConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileRedTeamConfig, GatewayProvider,
};
pub use loader::ConfigLoader;
