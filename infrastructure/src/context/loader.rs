//! Transcript file loader
//!
//! Accepts either a JSON array of `{speaker, content}` objects or JSONL
//! with one such object per line. Blank lines in JSONL are skipped.

use flows_domain::{ContextTurn, PromptContext};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a transcript file
#[derive(Error, Debug)]
pub enum ContextLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid transcript at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a [`PromptContext`] from a transcript file.
#[derive(Debug, Clone, Default)]
pub struct TranscriptContextLoader;

impl TranscriptContextLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the file at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<PromptContext, ContextLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContextLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let context = self.parse(&raw)?;
        debug!("Loaded {} context turns from {}", context.len(), path.display());
        Ok(context)
    }

    /// Parse transcript text (JSON array or JSONL).
    pub fn parse(&self, raw: &str) -> Result<PromptContext, ContextLoadError> {
        let trimmed = raw.trim_start();

        if trimmed.starts_with('[') {
            let turns: Vec<ContextTurn> = serde_json::from_str(trimmed)
                .map_err(|source| ContextLoadError::Parse { line: source.line(), source })?;
            return Ok(PromptContext::new(turns));
        }

        raw.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str::<ContextTurn>(line)
                    .map_err(|source| ContextLoadError::Parse { line: idx + 1, source })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let raw = r#"[
            {"speaker": "alice", "content": "Remote work saves commute time."},
            {"speaker": "bob", "content": "But collaboration suffers."}
        ]"#;

        let context = TranscriptContextLoader::new().parse(raw).unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context.turns()[1].speaker, "bob");
    }

    #[test]
    fn test_parse_jsonl_skips_blank_lines() {
        let raw = "{\"speaker\":\"alice\",\"content\":\"first\"}\n\n{\"speaker\":\"bob\",\"content\":\"second\"}\n";

        let context = TranscriptContextLoader::new().parse(raw).unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context.turns()[0].content, "first");
    }

    #[test]
    fn test_parse_empty_is_empty_context() {
        let context = TranscriptContextLoader::new().parse("   \n").unwrap();
        assert!(context.is_empty());
    }

    #[test]
    fn test_parse_reports_failing_line() {
        let raw = "{\"speaker\":\"alice\",\"content\":\"ok\"}\n{\"speaker\":\"bob\"}\n";

        let err = TranscriptContextLoader::new().parse(raw).unwrap_err();
        assert!(matches!(err, ContextLoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        std::fs::write(&path, r#"[{"speaker": "moderator", "content": "Opening."}]"#).unwrap();

        let context = TranscriptContextLoader::new().load(&path).unwrap();
        assert_eq!(context.turns()[0].speaker, "moderator");
    }

    #[test]
    fn test_load_missing_file() {
        let err = TranscriptContextLoader::new()
            .load("/definitely/not/here.jsonl")
            .unwrap_err();
        assert!(matches!(err, ContextLoadError::Io { .. }));
    }
}
