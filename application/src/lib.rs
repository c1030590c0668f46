//! Application layer for debate-flows
//!
//! This crate contains the flow processors, the dispatcher, use cases and
//! port definitions. It depends only on the domain layer.

pub mod config;
pub mod flows;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FlowDefaults;
pub use flows::{
    direct::DirectProcessor,
    dispatcher::{FlowDispatcher, FlowRequest},
    error::FlowError,
    processor::FlowProcessor,
    red_team::MultiAgentRedTeamProcessor,
};
pub use ports::{
    flow_logger::{FlowEvent, FlowLogger, NoFlowLogger},
    model_gateway::{GatewayError, ModelGateway, ModelReply},
    progress::{FlowProgressNotifier, NoFlowProgress},
};
pub use use_cases::run_flow::{RunFlowInput, RunFlowUseCase};
