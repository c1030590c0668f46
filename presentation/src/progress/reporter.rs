//! Progress reporting for flow execution

use colored::Colorize;
use flows_application::FlowProgressNotifier;
use flows_domain::FlowType;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during flow execution with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    flow_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            flow_bar: Mutex::new(None),
        }
    }

    fn flow_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.flow_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowProgressNotifier for ProgressReporter {
    fn on_flow_start(&self, flow: FlowType, total_steps: usize) {
        let pb = self.multi.add(ProgressBar::new(total_steps as u64));
        pb.set_style(Self::flow_style());
        pb.set_prefix(flow.display_name().to_string());
        pb.set_message("Starting...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut guard) = self.flow_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_step_start(&self, _flow: FlowType, step_name: &str, _order: u32) {
        self.with_bar(|pb| pb.set_message(format!("{}...", step_name)));
    }

    fn on_step_complete(&self, _flow: FlowType, step_name: &str, _order: u32, success: bool) {
        self.with_bar(|pb| {
            let status = if success {
                format!("{} {}", "v".green(), step_name)
            } else {
                format!("{} {}", "x".red(), step_name)
            };
            pb.set_message(status);
            if success {
                pb.inc(1);
            }
        });
    }

    fn on_flow_complete(&self, flow: FlowType, success: bool) {
        let Ok(mut guard) = self.flow_bar.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            if success {
                pb.finish_with_message(format!("{} complete!", flow.display_name().green()));
            } else {
                pb.abandon_with_message(format!("{} failed", flow.display_name().red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl FlowProgressNotifier for SimpleProgress {
    fn on_flow_start(&self, flow: FlowType, total_steps: usize) {
        println!(
            "{} {} ({} steps)",
            "->".cyan(),
            flow.display_name().bold(),
            total_steps
        );
    }

    fn on_step_start(&self, _flow: FlowType, _step_name: &str, _order: u32) {}

    fn on_step_complete(&self, _flow: FlowType, step_name: &str, order: u32, success: bool) {
        if success {
            println!("  {} {}. {}", "v".green(), order, step_name);
        } else {
            println!("  {} {}. {} (failed)", "x".red(), order, step_name);
        }
    }

    fn on_flow_complete(&self, _flow: FlowType, _success: bool) {
        println!();
    }
}
