//! Model Context Protocol server over stdio.
//!
//! ```text
//! ┌──────────────┐  line   ┌───────────────┐  dispatch  ┌────────────────┐
//! │ MCP client   │ ──────▶ │ McpServer     │ ─────────▶ │ ToolDispatcher │
//! │ (stdin/out)  │ ◀────── │ + transport   │ ◀───────── │ (application)  │
//! └──────────────┘         └───────────────┘  envelope  └────────────────┘
//! ```
//!
//! - [`protocol`]: JSON-RPC 2.0 message types and MCP result shapes
//! - [`transport`]: newline-delimited framing over async streams
//! - [`server`]: method routing (`initialize`, `ping`, `tools/list`, `tools/call`)

pub mod error;
pub mod protocol;
pub mod server;
pub mod transport;

pub use error::McpError;
pub use protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION, SERVER_NAME, ServerInfo,
};
pub use server::McpServer;
pub use transport::{DEFAULT_MAX_LINE_BYTES, Frame, LineTransport, StdioTransport};
