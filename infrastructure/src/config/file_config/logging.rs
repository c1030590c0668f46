//! Transcript logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for JSONL flow transcripts; transcripts are off when unset
    pub transcript_dir: Option<String>,
}

impl FileLoggingConfig {
    /// Path of the transcript file for a run started at `stamp`.
    pub fn transcript_path(&self, stamp: &str) -> Option<PathBuf> {
        self.transcript_dir
            .as_ref()
            .map(|dir| PathBuf::from(dir).join(format!("flow-{}.jsonl", stamp)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_path() {
        let config = FileLoggingConfig {
            transcript_dir: Some("/tmp/flows".to_string()),
        };
        assert_eq!(
            config.transcript_path("20260101T000000"),
            Some(PathBuf::from("/tmp/flows/flow-20260101T000000.jsonl"))
        );
        assert_eq!(FileLoggingConfig::default().transcript_path("x"), None);
    }
}
