//! Tool domain value objects: envelopes, content blocks and error types
//!
//! These types form the **output side** of a tool call. A handler produces
//! either a [`ToolOutput`] or a tagged [`ToolError`]; the dispatcher turns
//! that into a [`ToolResult`] envelope or, for malformed requests, a
//! [`ProtocolError`].
//!
//! | Handler outcome | Client sees |
//! |-----------------|-------------|
//! | `Ok(ToolOutput)` | envelope, `isError` absent |
//! | `Err(INVALID_ARGUMENT)` | protocol error `-32602` |
//! | `Err(any other kind)` | envelope, `isError: true` |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Text used when a handler failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unknown error occurred";

/// Text synthesized when a handler returns no content at all.
pub const EMPTY_RESULT_MESSAGE: &str = "No data returned";

/// One block of envelope content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            ContentBlock::Text { text } => text,
        }
    }
}

/// Successful handler output before it is wrapped in an envelope
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Structured result, rendered as one pretty-printed JSON text block
    Json(Value),
    /// Pre-rendered content blocks, passed through as-is
    Blocks(Vec<ContentBlock>),
}

impl ToolOutput {
    /// Serialize any result document into structured output
    pub fn json<T: Serialize>(payload: &T) -> Result<Self, ToolError> {
        serde_json::to_value(payload)
            .map(ToolOutput::Json)
            .map_err(|e| ToolError::execution_failed(format!("Failed to serialize result: {}", e)))
    }
}

/// Classification of a handler failure.
///
/// The dispatcher matches on this tag to decide between a protocol error
/// and a soft `isError` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolErrorKind {
    /// The request itself is unusable; surfaced as a protocol error
    InvalidArgument,
    /// The referenced resource does not exist
    NotFound,
    /// The operation ran and failed
    ExecutionFailed,
    /// The backing service could not be reached; safe to retry
    Unavailable,
    /// The operation exceeded its time budget
    Timeout,
}

impl ToolErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ToolErrorKind::NotFound => "NOT_FOUND",
            ToolErrorKind::ExecutionFailed => "EXECUTION_FAILED",
            ToolErrorKind::Unavailable => "UNAVAILABLE",
            ToolErrorKind::Timeout => "TIMEOUT",
        }
    }
}

/// Error raised by a tool handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidArgument, message)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ToolErrorKind::NotFound,
            format!("Resource not found: {}", resource.into()),
        )
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::ExecutionFailed, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Unavailable, message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            ToolErrorKind::Timeout,
            format!("Operation timed out: {}", operation.into()),
        )
    }

    pub fn code(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ToolErrorKind::Unavailable)
    }

    /// Whether the failure means the request was malformed
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ToolErrorKind::InvalidArgument)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Uniform response envelope for a well-formed tool call.
///
/// `content` is never empty. `is_error` is omitted from the wire form on
/// success and set to `true` when the content describes a handler failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    content: Vec<ContentBlock>,
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    is_error: Option<bool>,
}

impl ToolResult {
    /// Wrap handler output as a success envelope
    pub fn from_output(output: ToolOutput) -> Self {
        match output {
            ToolOutput::Json(value) => Self::success_json(&value),
            ToolOutput::Blocks(blocks) => Self::success_blocks(blocks),
        }
    }

    /// Success envelope holding `value` as pretty-printed JSON
    pub fn success_json(value: &Value) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        Self::success_blocks(vec![ContentBlock::text(text)])
    }

    /// Success envelope from content blocks; an empty list gets a
    /// placeholder block so the envelope is never empty.
    pub fn success_blocks(blocks: Vec<ContentBlock>) -> Self {
        let content = if blocks.is_empty() {
            vec![ContentBlock::text(EMPTY_RESULT_MESSAGE)]
        } else {
            blocks
        };
        Self {
            content,
            is_error: None,
        }
    }

    /// Failure envelope: `"Error <context>: <message>"`
    pub fn failure(context: &str, error: &ToolError) -> Self {
        let message = if error.message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE
        } else {
            error.message.as_str()
        };
        Self {
            content: vec![ContentBlock::text(format!("Error {}: {}", context, message))],
            is_error: Some(true),
        }
    }

    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    /// Text of the first content block
    pub fn text(&self) -> &str {
        self.content.first().map(ContentBlock::as_text).unwrap_or_default()
    }

    /// Parse the first block back into JSON (success envelopes only)
    pub fn json(&self) -> Option<Value> {
        if self.is_error() {
            return None;
        }
        serde_json::from_str(self.text()).ok()
    }
}

/// Protocol-level error code for a malformed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolErrorCode {
    InvalidParams,
    MethodNotFound,
}

impl ProtocolErrorCode {
    /// JSON-RPC 2.0 error code
    pub fn json_rpc_code(&self) -> i64 {
        match self {
            ProtocolErrorCode::InvalidParams => -32602,
            ProtocolErrorCode::MethodNotFound => -32601,
        }
    }
}

/// A request rejected before any handler ran.
///
/// Distinct from a failure envelope: the client's message itself was
/// invalid against the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("{0}")]
    InvalidParams(String),

    #[error("{0}")]
    MethodNotFound(String),
}

impl ProtocolError {
    pub fn code(&self) -> ProtocolErrorCode {
        match self {
            ProtocolError::InvalidParams(_) => ProtocolErrorCode::InvalidParams,
            ProtocolError::MethodNotFound(_) => ProtocolErrorCode::MethodNotFound,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ProtocolError::InvalidParams(message) | ProtocolError::MethodNotFound(message) => {
                message
            }
        }
    }

    pub fn unknown_tool(name: &str) -> Self {
        ProtocolError::MethodNotFound(format!("Unknown tool: {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_error() {
        let err = ToolError::not_found("0xabc").with_details("pruned");

        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.message.contains("0xabc"));
        assert_eq!(err.to_string(), "[NOT_FOUND] Resource not found: 0xabc (pruned)");
        assert!(!err.is_retryable());
        assert!(ToolError::unavailable("node down").is_retryable());
    }

    #[test]
    fn test_success_envelope_wire_form() {
        let result = ToolResult::success_json(&json!({"height": "1"}));

        let wire = serde_json::to_value(&result).unwrap();
        assert!(wire.get("isError").is_none());
        assert_eq!(wire["content"][0]["type"], "text");
        assert_eq!(wire["content"][0]["text"], "{\n  \"height\": \"1\"\n}");
        assert!(result.is_success());
        assert_eq!(result.json().unwrap()["height"], "1");
    }

    #[test]
    fn test_empty_blocks_are_filled() {
        let result = ToolResult::from_output(ToolOutput::Blocks(Vec::new()));
        assert_eq!(result.content().len(), 1);
        assert_eq!(result.text(), EMPTY_RESULT_MESSAGE);
    }

    #[test]
    fn test_blocks_pass_through() {
        let blocks = vec![ContentBlock::text("one"), ContentBlock::text("two")];
        let result = ToolResult::from_output(ToolOutput::Blocks(blocks.clone()));
        assert_eq!(result.content(), blocks.as_slice());
    }

    #[test]
    fn test_failure_envelope() {
        let result = ToolResult::failure(
            "fetching chain status",
            &ToolError::execution_failed("node returned 502"),
        );

        assert!(result.is_error());
        assert_eq!(result.text(), "Error fetching chain status: node returned 502");
        assert!(result.json().is_none());

        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire["isError"], true);
    }

    #[test]
    fn test_failure_envelope_generic_fallback() {
        let result = ToolResult::failure("estimating fees", &ToolError::execution_failed("  "));
        assert_eq!(result.text(), "Error estimating fees: Unknown error occurred");
    }

    #[test]
    fn test_protocol_error_codes() {
        let err = ProtocolError::unknown_tool("nope");
        assert_eq!(err.code().json_rpc_code(), -32601);
        assert_eq!(err.message(), "Unknown tool: nope");

        let err = ProtocolError::InvalidParams("bad".into());
        assert_eq!(err.code(), ProtocolErrorCode::InvalidParams);
        assert_eq!(err.code().json_rpc_code(), -32602);
    }
}
