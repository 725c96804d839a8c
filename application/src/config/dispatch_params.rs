//! Dispatch parameters: per-call execution policy.
//!
//! [`DispatchParams`] groups the static parameters that control how
//! [`ToolDispatcher`](crate::use_cases::dispatch_tool::ToolDispatcher)
//! invokes a handler. These are application-layer concerns, not domain
//! policy; they are derived from the node section of `LedgerConfig`.

use penumbra_domain::config::NodeSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Handler invocation policy.
///
/// | Field | Effect |
/// |-------|--------|
/// | `call_timeout` | Handler is abandoned and a `TIMEOUT` failure envelope returned |
/// | `max_retries` | Extra attempts after an `UNAVAILABLE` failure |
/// | `retry_backoff` | Delay before each extra attempt |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Upper bound for one handler attempt; `None` waits indefinitely.
    pub call_timeout: Option<Duration>,
    /// Additional attempts for retryable failures.
    pub max_retries: u32,
    /// Delay between attempts.
    pub retry_backoff: Duration,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self::from_node(&NodeSettings::default())
    }
}

impl DispatchParams {
    pub fn from_node(node: &NodeSettings) -> Self {
        Self {
            call_timeout: Some(node.timeout()),
            max_retries: node.retries,
            retry_backoff: Duration::from_millis(100),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }
}
