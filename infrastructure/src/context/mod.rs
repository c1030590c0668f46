//! Context loading infrastructure
//!
//! Reads prior debate turns from disk into a
//! [`PromptContext`](flows_domain::PromptContext).
//!
//! # Usage
//!
//! ```no_run
//! use flows_infrastructure::TranscriptContextLoader;
//!
//! let context = TranscriptContextLoader::new().load("transcript.jsonl")?;
//! println!("{} prior turns", context.len());
//! # Ok::<(), flows_infrastructure::ContextLoadError>(())
//! ```

mod loader;

pub use loader::{ContextLoadError, TranscriptContextLoader};
