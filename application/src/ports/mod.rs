//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod flow_logger;
pub mod model_gateway;
pub mod progress;
