//! Presentation layer for penumbra-mcp
//!
//! This crate contains the CLI definition and the formatters used by
//! `--list-tools` for offline catalog introspection. The protocol stream
//! itself never passes through here.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, FormatArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::CatalogFormatter;
