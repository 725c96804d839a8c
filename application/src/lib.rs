//! Application layer for penumbra-mcp
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchParams;
pub use ports::{
    call_logger::{CallEvent, CallLogger, NoCallLogger},
    ledger_gateway::{GatewayError, LedgerGateway},
};
pub use use_cases::dispatch_tool::{DispatcherBuildError, ToolDispatcher};
pub use use_cases::ledger_tools::ledger_handlers;
