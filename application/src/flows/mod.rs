//! Flow processors and the dispatcher that selects between them.
//!
//! - [`processor::FlowProcessor`]: the strategy contract
//! - [`red_team::MultiAgentRedTeamProcessor`]: Architect → Skeptic → Judge
//! - [`direct::DirectProcessor`]: one plain model call
//! - [`dispatcher::FlowDispatcher`]: flow type → processor registry

pub mod direct;
pub mod dispatcher;
pub mod error;
pub mod processor;
pub mod red_team;

#[cfg(test)]
pub(crate) mod testing;
