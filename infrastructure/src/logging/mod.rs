//! Logging infrastructure: structured flow transcripts.
//!
//! Provides [`JsonlFlowLogger`], a JSONL file writer that implements
//! the [`FlowLogger`](flows_application::FlowLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlFlowLogger;
