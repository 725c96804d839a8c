//! Infrastructure layer for penumbra-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the MCP stdio server, and configuration
//! file loading.

pub mod config;
pub mod ledger;
pub mod logging;
pub mod mcp;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, ConfigValidationError, FileConfig};
pub use ledger::PlaceholderLedgerGateway;
pub use logging::JsonlCallLogger;
pub use mcp::{LineTransport, McpError, McpServer, StdioTransport};
