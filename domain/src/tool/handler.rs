//! Tool handler abstraction
//!
//! A [`ToolHandler`] is the executable half of a catalog entry: the
//! dispatcher binds one handler to each [`ToolDefinition`](super::ToolDefinition)
//! at startup and invokes it with arguments that have already passed the
//! validator.
//!
//! ```text
//! ToolSpec ──(name)──▶ ToolHandler::call(&ToolCall) ──▶ ToolOutput | ToolError
//! ```

use async_trait::async_trait;

use super::entities::ToolCall;
use super::value_objects::{ToolError, ToolOutput};

/// Executes one tool.
///
/// Handlers receive validated arguments and return either structured output
/// or a tagged [`ToolError`]. They must not panic on bad optional input;
/// decoding problems are reported as `INVALID_ARGUMENT`.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name of the catalog entry this handler serves
    fn tool_name(&self) -> &str;

    /// Execute the call
    async fn call(&self, call: &ToolCall) -> Result<ToolOutput, ToolError>;
}
