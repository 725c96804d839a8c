//! Tool domain module
//!
//! This module defines the core abstractions of the **Tool System**: the
//! catalog a client discovers, the contract each call is checked against,
//! and the envelope every well-formed call gets back.
//!
//! # Overview
//!
//! Every tool is described by a [`ToolDefinition`] (name, description, input
//! schema), invoked via a [`ToolCall`], executed by a [`ToolHandler`], and
//! answered with a [`ToolResult`] envelope.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolHandler  │───▶│ ToolResult   │
//! │ (catalog)    │    │ (validated)  │    │ (execution)  │    │ (envelope)   │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Two failure channels
//!
//! | Problem | Type | Where it ends up |
//! |---------|------|------------------|
//! | Unknown tool, bad arguments | [`ProtocolError`] | JSON-RPC error |
//! | Handler ran and failed | [`ToolError`] | envelope with `isError: true` |
//!
//! # Key Types
//!
//! - [`ToolSpec`]: Ordered catalog with a name index
//! - [`InputSchema`] / [`PropertySchema`]: Restricted JSON-Schema subset
//! - [`ToolValidator`]: Pure domain trait for argument validation
//! - [`ToolHandler`]: Async execution of a single tool
//! - [`catalog::ledger_tool_spec`]: The static ledger catalog
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`ToolDispatcher`): Lookup, validation, timeout, envelope
//! - **Infrastructure** (`McpServer`): JSON-RPC framing over stdio

pub mod catalog;
pub mod entities;
pub mod handler;
pub mod traits;
pub mod value_objects;

pub use catalog::ledger_tool_spec;
pub use entities::{InputSchema, PropertySchema, SchemaType, ToolCall, ToolDefinition, ToolSpec};
pub use handler::ToolHandler;
pub use traits::{DefaultToolValidator, ToolValidator, ValidationError};
pub use value_objects::{
    ContentBlock, ProtocolError, ProtocolErrorCode, ToolError, ToolErrorKind, ToolOutput,
    ToolResult,
};
