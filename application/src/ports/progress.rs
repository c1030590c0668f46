//! Progress notification port
//!
//! Defines the interface for reporting progress while a flow runs.

use flows_domain::FlowType;

/// Callback for progress updates during flow execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait FlowProgressNotifier: Send + Sync {
    /// Called once before the first step
    fn on_flow_start(&self, flow: FlowType, total_steps: usize);

    /// Called before a step's model call
    fn on_step_start(&self, flow: FlowType, step_name: &str, order: u32);

    /// Called after a step's model call returned (or failed)
    fn on_step_complete(&self, flow: FlowType, step_name: &str, order: u32, success: bool);

    /// Called once after the last step, or after the failing one
    fn on_flow_complete(&self, _flow: FlowType, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoFlowProgress;

impl FlowProgressNotifier for NoFlowProgress {
    fn on_flow_start(&self, _flow: FlowType, _total_steps: usize) {}
    fn on_step_start(&self, _flow: FlowType, _step_name: &str, _order: u32) {}
    fn on_step_complete(&self, _flow: FlowType, _step_name: &str, _order: u32, _success: bool) {}
}
