//! Application-level configuration.
//!
//! - [`FlowDefaults`]: deployment defaults layered beneath each request

pub mod flow_defaults;

pub use flow_defaults::FlowDefaults;
