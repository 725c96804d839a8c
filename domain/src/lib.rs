//! Domain layer for penumbra-mcp
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tool catalog
//!
//! The server exposes a fixed, ordered set of ledger tools. Each tool has a
//! name, a description and an input contract expressed in a small JSON-Schema
//! subset; the catalog is the single source of truth for both discovery and
//! dispatch.
//!
//! ## Envelope
//!
//! Every well-formed call is answered with a uniform envelope of text
//! blocks. Handler failures become envelopes flagged `isError`; malformed
//! requests become protocol errors instead.
//!
//! ## Ledger
//!
//! Value objects for validators, chain status, DEX state, governance and
//! transaction building, plus the exact fee schedule.

pub mod config;
pub mod ledger;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use config::{
    ChainSettings, DexSettings, GovernanceSettings, LedgerConfig, NodeSettings, OutputFormat,
};
pub use ledger::{
    ActionKind, BuiltTransaction, ChainStatus, DexState, FeeAmount, FeeEstimate, FeeSchedule,
    ProposalFilter, ProposalList, SimulationReport, TransactionAction, TransactionDraft,
    TransactionRecord, ValidatorSet,
};
pub use tool::{
    ContentBlock, DefaultToolValidator, InputSchema, PropertySchema, ProtocolError,
    ProtocolErrorCode, SchemaType, ToolCall, ToolDefinition, ToolError, ToolErrorKind,
    ToolHandler, ToolOutput, ToolResult, ToolSpec, ToolValidator, ValidationError,
    ledger_tool_spec,
};
