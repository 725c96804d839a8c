//! Error types for the MCP server

use penumbra_domain::tool::ProtocolError;
use thiserror::Error;

use super::protocol::JsonRpcError;

/// Result type alias for MCP server operations
pub type Result<T> = std::result::Result<T, McpError>;

/// Errors that can occur while serving MCP over a byte stream
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl From<McpError> for JsonRpcError {
    fn from(err: McpError) -> Self {
        match err {
            McpError::Protocol(protocol) => JsonRpcError::from(&protocol),
            McpError::MethodNotFound(method) => JsonRpcError::new(
                JsonRpcError::METHOD_NOT_FOUND,
                format!("Method not found: {}", method),
            ),
            McpError::InvalidParams(msg) => JsonRpcError::new(JsonRpcError::INVALID_PARAMS, msg),
            McpError::InvalidRequest(msg) => {
                JsonRpcError::new(JsonRpcError::INVALID_REQUEST, msg)
            }
            other => JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, other.to_string()),
        }
    }
}
