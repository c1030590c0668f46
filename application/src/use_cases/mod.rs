//! Use cases (application services)
//!
//! Use cases orchestrate flow processors through the dispatcher and the
//! ports, without knowing which adapters sit behind them.

pub mod run_flow;
