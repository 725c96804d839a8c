//! Newline-delimited JSON-RPC framing.
//!
//! Each message is one JSON document on one line. [`LineTransport`] reads
//! and writes such lines over any async byte stream; [`StdioTransport`] is
//! the instance bound to the process's stdin and stdout.
//!
//! [`decode_request`] is the pure half of reading: it turns a line into a
//! request, or into the error response the client should receive instead.

use super::error::Result;
use super::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use serde::Serialize;
use serde_json::Value;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Longest line accepted before the message is rejected
pub const DEFAULT_MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

/// Transport bound to the process's standard streams
pub type StdioTransport = LineTransport<BufReader<Stdin>, Stdout>;

/// One unit read from the stream
#[derive(Debug)]
pub enum Frame {
    /// A non-blank UTF-8 line, trimmed
    Line(String),
    /// A line that cannot be a message; the response goes back as is
    Rejected(JsonRpcResponse),
}

/// Line-oriented transport over an async reader/writer pair
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
    buf: Vec<u8>,
    max_line_bytes: usize,
}

impl StdioTransport {
    pub fn stdio() -> Self {
        LineTransport::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: Vec::new(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }

    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }

    /// Read the next non-blank line.
    ///
    /// Lines that are not UTF-8 or exceed the size limit come back as
    /// [`Frame::Rejected`] and the stream stays usable. Returns `Ok(None)`
    /// at end of stream.
    pub async fn read_message(&mut self) -> Result<Option<Frame>> {
        loop {
            let Some(oversized) = self.read_line_bytes().await? else {
                return Ok(None);
            };

            if oversized {
                return Ok(Some(Frame::Rejected(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::new(
                        JsonRpcError::INVALID_REQUEST,
                        format!("Message exceeds {} bytes", self.max_line_bytes),
                    ),
                ))));
            }

            let line = match std::str::from_utf8(&self.buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    return Ok(Some(Frame::Rejected(JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::new(
                            JsonRpcError::PARSE_ERROR,
                            format!("Parse error: invalid UTF-8: {}", e),
                        ),
                    ))));
                }
            };

            if !line.is_empty() {
                return Ok(Some(Frame::Line(line.to_string())));
            }
        }
    }

    /// Fill `buf` with the next line, keeping at most `max_line_bytes`.
    ///
    /// Returns `None` at end of stream, otherwise whether the line was cut.
    /// The remainder of an oversized line is consumed and discarded.
    async fn read_line_bytes(&mut self) -> Result<Option<bool>> {
        self.buf.clear();
        let mut oversized = false;
        let mut consumed_any = false;

        loop {
            let available = self.reader.fill_buf().await?;
            if available.is_empty() {
                return Ok(consumed_any.then_some(oversized));
            }

            let (len, complete) = match available.iter().position(|b| *b == b'\n') {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            };

            let content = if complete { len - 1 } else { len };
            if !oversized {
                if self.buf.len() + content > self.max_line_bytes {
                    oversized = true;
                    self.buf.clear();
                } else {
                    self.buf.extend_from_slice(&available[..len]);
                }
            }

            self.reader.consume(len);
            consumed_any = true;

            if complete {
                return Ok(Some(oversized));
            }
        }
    }

    /// Serialize `message` as a single line and flush it
    pub async fn write_message<T: Serialize>(&mut self, message: &T) -> Result<()> {
        let mut line = serde_json::to_string(message)?;
        line.push('\n');
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Decode one line into a request.
///
/// Malformed JSON yields a parse error with a `null` id. Well-formed JSON
/// that is not a JSON-RPC 2.0 request yields an invalid-request error
/// carrying whatever id could be recovered.
pub fn decode_request(line: &str) -> std::result::Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        JsonRpcResponse::error(
            Value::Null,
            JsonRpcError::new(JsonRpcError::PARSE_ERROR, format!("Parse error: {}", e)),
        )
    })?;

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let invalid = |msg: String| {
        JsonRpcResponse::error(
            id.clone(),
            JsonRpcError::new(JsonRpcError::INVALID_REQUEST, msg),
        )
    };

    let request: JsonRpcRequest = serde_json::from_value(value)
        .map_err(|e| invalid(format!("Invalid request: {}", e)))?;

    if request.jsonrpc != "2.0" {
        return Err(invalid(format!(
            "Unsupported jsonrpc version: {}",
            request.jsonrpc
        )));
    }

    Ok(request)
}
