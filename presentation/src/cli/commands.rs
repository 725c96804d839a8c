//! CLI command definitions

use clap::{Parser, ValueEnum};
use penumbra_domain::config::OutputFormat;
use std::path::PathBuf;

/// Output format for `--list-tools`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable listing
    Text,
    /// The `tools/list` payload as JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for penumbra-mcp
#[derive(Parser, Debug)]
#[command(name = "penumbra-mcp")]
#[command(author, version, about = "MCP server exposing Penumbra ledger tools over stdio")]
#[command(long_about = r#"
penumbra-mcp speaks the Model Context Protocol (JSON-RPC 2.0, one message per
line) on stdin/stdout and exposes eight ledger tools: chain status, validators,
transactions, DEX state, governance proposals, transaction building, fee
estimation and simulation.

Logs go to stderr; stdout is reserved for the protocol.

Configuration is loaded from (in priority order):
1. PENUMBRA_* environment variables
2. --config <path>                       Explicit config file
3. ./penumbra-mcp.toml                   Project-level config
4. ~/.config/penumbra-mcp/config.toml    Global config

Example:
  penumbra-mcp
  penumbra-mcp --list-tools --format json
  PENUMBRA_CHAIN_ID=penumbra-1 penumbra-mcp -vv --call-log calls.jsonl
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append one JSON line per tool call to this file
    #[arg(long, value_name = "PATH")]
    pub call_log: Option<PathBuf>,

    /// Print the tool catalog and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Output format for --list-tools
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        self.format.into()
    }
}
