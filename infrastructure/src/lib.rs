//! Infrastructure layer for debate-flows
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod context;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileFlowsConfig, FileGatewayConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, GatewayProvider,
};
pub use context::{ContextLoadError, TranscriptContextLoader};
pub use logging::JsonlFlowLogger;
pub use providers::{EchoGateway, OpenAiCompatibleGateway, build_gateway};
