//! MCP request loop
//!
//! [`McpServer`] reads one request at a time from a [`LineTransport`],
//! answers it through the [`ToolDispatcher`], and writes the response
//! before reading the next line. Cancellation is only observed between
//! requests, so an in-flight call always completes and is answered.

use super::error::{McpError, Result};
use super::protocol::{
    InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo,
    ToolsCallParams, ToolsListResult,
};
use super::transport::{Frame, LineTransport, decode_request};
use penumbra_application::ToolDispatcher;
use penumbra_domain::util::truncate_str;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// MCP server over a line transport
pub struct McpServer {
    dispatcher: Arc<ToolDispatcher>,
    server_info: ServerInfo,
}

impl McpServer {
    pub fn new(dispatcher: Arc<ToolDispatcher>) -> Self {
        Self {
            dispatcher,
            server_info: ServerInfo::default(),
        }
    }

    /// Serve until end of input or until `shutdown` is cancelled
    pub async fn run<R, W>(
        &self,
        mut transport: LineTransport<R, W>,
        shutdown: CancellationToken,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(
            tools = self.dispatcher.spec().len(),
            "MCP server ready on line transport"
        );

        loop {
            let frame = tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, stopping MCP server");
                    break;
                }
                frame = transport.read_message() => frame?,
            };

            let response = match frame {
                None => {
                    info!("Input closed, stopping MCP server");
                    break;
                }
                Some(Frame::Line(line)) => self.handle_line(&line).await,
                Some(Frame::Rejected(response)) => {
                    warn!("Rejected unreadable line from client");
                    Some(response)
                }
            };

            if let Some(response) = response {
                transport.write_message(&response).await?;
            }
        }

        Ok(())
    }

    /// Handle one raw line; `None` means nothing should be written back
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match decode_request(line) {
            Ok(request) => self.handle_request(request).await,
            Err(response) => {
                warn!("Rejected malformed message: {}", truncate_str(line, 200));
                Some(response)
            }
        }
    }

    /// Handle a decoded request; notifications never produce a response
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(id = ?request.id, method = %request.method, "Handling request");

        let result = self.route(&request).await;

        let Some(id) = request.id else {
            if let Err(e) = result {
                debug!(method = %request.method, "Notification failed: {}", e);
            }
            return None;
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, JsonRpcError::from(e)),
        })
    }

    async fn route(&self, request: &JsonRpcRequest) -> Result<Value> {
        match request.method.as_str() {
            "initialize" => {
                info!("Client initializing");
                Ok(serde_json::to_value(InitializeResult::new(
                    self.server_info.clone(),
                ))?)
            }
            method if method.starts_with("notifications/") => {
                debug!(method, "Notification received");
                Ok(Value::Null)
            }
            "ping" => Ok(json!({})),
            "tools/list" => Ok(serde_json::to_value(ToolsListResult {
                tools: self.dispatcher.list_tools(),
            })?),
            "tools/call" => self.handle_tools_call(&request.params).await,
            other => Err(McpError::MethodNotFound(other.to_string())),
        }
    }

    async fn handle_tools_call(&self, params: &Value) -> Result<Value> {
        let params: ToolsCallParams = serde_json::from_value(params.clone())
            .map_err(|_| McpError::InvalidParams("Missing 'name' parameter".to_string()))?;

        let result = self
            .dispatcher
            .dispatch(&params.name, params.arguments)
            .await?;
        Ok(serde_json::to_value(result)?)
    }
}
