//! CLI command definitions

use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

/// Output format for flow results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every step followed by the final response
    Full,
    /// Only the final response
    Final,
    /// JSON output
    Json,
}

impl From<OutputFormat> for flows_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Final => Self::Final,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for debate-flows
#[derive(Parser, Debug)]
#[command(name = "debate-flows")]
#[command(author, version, about = "Run a prompt through a multi-step reasoning flow")]
#[command(long_about = r#"
debate-flows runs a prompt through a reasoning strategy ("flow").

The default flow, multi_agent_red_team, has three stages:
1. Architect: proposes a solution
2. Skeptic:   critiques the solution
3. Judge:     weighs both and states a conclusion

Configuration files are loaded from (in priority order):
1. DEBATE_FLOWS_* environment variables
2. --config <path>          Explicit config file
3. ./debate-flows.toml      Project-level config
4. ~/.config/debate-flows/config.toml   Global config

Example:
  debate-flows "Should our team adopt remote work?"
  debate-flows --flow direct --set temperature=0.2 "Summarize the CAP theorem"
  debate-flows --context transcript.jsonl -o full "What did we miss?"
"#)]
pub struct Cli {
    /// The prompt to process
    pub prompt: Option<String>,

    /// Flow type to run (defaults to `flows.default` from config)
    #[arg(short, long, value_name = "FLOW")]
    pub flow: Option<String>,

    /// Configuration entry for this run (repeatable), e.g. `temperature=0.2`
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, Value)>,

    /// Transcript of prior turns (JSON array or JSONL of {speaker, content})
    #[arg(long, value_name = "PATH")]
    pub context: Option<PathBuf>,

    /// Output format (defaults to `output.format` from config, then `final`)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the available flows and exit
    #[arg(long)]
    pub list_flows: bool,

    /// Use the offline echo gateway instead of the configured provider
    #[arg(long)]
    pub dry_run: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Parse a `key=value` pair.
///
/// The value is read as JSON when it parses (`0.2`, `true`, `[1,2]`),
/// otherwise it is kept as a plain string.
pub fn parse_key_value(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_key_value_json() {
        assert_eq!(
            parse_key_value("temperature=0.2").unwrap(),
            ("temperature".to_string(), json!(0.2))
        );
        assert_eq!(
            parse_key_value("stop=[\"END\"]").unwrap(),
            ("stop".to_string(), json!(["END"]))
        );
    }

    #[test]
    fn test_parse_key_value_plain_string() {
        assert_eq!(
            parse_key_value("judge_prompt=Decide: {prompt}").unwrap(),
            ("judge_prompt".to_string(), json!("Decide: {prompt}"))
        );
    }

    #[test]
    fn test_parse_key_value_splits_on_first_equals() {
        let (key, value) = parse_key_value("direct_prompt=a=b").unwrap();
        assert_eq!(key, "direct_prompt");
        assert_eq!(value, json!("a=b"));
    }

    #[test]
    fn test_parse_key_value_rejects_missing_separator() {
        assert!(parse_key_value("temperature").is_err());
        assert!(parse_key_value("=0.2").is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "debate-flows",
            "--flow",
            "direct",
            "--set",
            "temperature=0.5",
            "-o",
            "json",
            "-vv",
            "Is Rust fast?",
        ])
        .unwrap();

        assert_eq!(cli.prompt.as_deref(), Some("Is Rust fast?"));
        assert_eq!(cli.flow.as_deref(), Some("direct"));
        assert_eq!(cli.set, vec![("temperature".to_string(), json!(0.5))]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.dry_run);
    }
}
