use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "test-summary",
    version,
    about = "Aggregate JSON test reports and gate on a stored baseline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: test-summary.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append machine-readable run events to this JSONL file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory tree for JSON test reports, write summary.json,
    /// and check the aggregate against the baseline
    Summarize {
        /// Directory tree to scan for .json result files (default: test-results)
        #[arg(long)]
        results_dir: Option<String>,

        /// Baseline file holding the regression floor (default: baseline.json)
        #[arg(long)]
        baseline: Option<String>,

        /// Extra report rendering after the JSON echo: console or junit
        #[arg(long)]
        format: Option<String>,

        /// Write the rendered report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render an existing summary.json without re-scanning
    Report {
        /// Path to a previously written summary file
        /// (default: test-results/summary.json)
        #[arg(long)]
        summary: Option<String>,

        /// Output format: console, junit, json (default: console)
        #[arg(long)]
        format: Option<String>,

        /// Write the rendered report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `test-summary.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub summarize: SummarizeConfig,
    #[serde(default)]
    pub report: ReportConfig,

    /// JSONL trace file; tracing stays off when unset
    pub trace: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    #[serde(default = "default_baseline")]
    pub baseline: String,

    pub format: Option<String>,

    pub output: Option<String>,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            baseline: default_baseline(),
            format: None,
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_summary_path")]
    pub summary: String,

    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            summary: default_summary_path(),
            format: default_console(),
            output: None,
        }
    }
}

// Serde default helpers
fn default_results_dir() -> String { "test-results".to_string() }
fn default_baseline() -> String { "baseline.json".to_string() }
fn default_summary_path() -> String { "test-results/summary.json".to_string() }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("test-summary.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
