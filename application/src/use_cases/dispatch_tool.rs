//! Dispatch Tool use case
//!
//! Routes a named call to its handler and turns the outcome into either an
//! envelope or a protocol error.
//!
//! ```text
//! dispatch(name, arguments)
//!   │
//!   ├─ lookup name ─────────── miss ──▶ ProtocolError::MethodNotFound
//!   ├─ normalize arguments ─── non-object ──▶ ProtocolError::InvalidParams
//!   ├─ validate required ───── violation ──▶ ProtocolError::InvalidParams
//!   ├─ handler.call (timeout, retry on UNAVAILABLE)
//!   │     ├─ Ok(output) ──────────────────▶ ToolResult (success)
//!   │     ├─ Err(INVALID_ARGUMENT) ───────▶ ProtocolError::InvalidParams
//!   │     └─ Err(other) ──────────────────▶ ToolResult (isError: true)
//! ```
//!
//! The dispatcher holds no per-request state; concurrent calls through a
//! shared reference are independent.

use penumbra_domain::tool::{
    DefaultToolValidator, ProtocolError, ToolCall, ToolDefinition, ToolError, ToolHandler,
    ToolOutput, ToolResult, ToolSpec, ToolValidator,
};
use penumbra_domain::util::preview_json;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::DispatchParams;
use crate::ports::call_logger::{CallEvent, CallLogger, NoCallLogger};

/// Errors raised while wiring handlers to the catalog at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatcherBuildError {
    #[error("No handler registered for catalog tool '{0}'")]
    MissingHandler(String),

    #[error("Handler registered for '{0}', which is not in the catalog")]
    UnknownHandler(String),

    #[error("More than one handler registered for '{0}'")]
    DuplicateHandler(String),
}

/// Catalog-driven tool dispatcher
pub struct ToolDispatcher {
    spec: ToolSpec,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    validator: Box<dyn ToolValidator>,
    params: DispatchParams,
    call_logger: Arc<dyn CallLogger>,
}

impl ToolDispatcher {
    /// Bind `handlers` to the entries of `spec`.
    ///
    /// Every catalog entry needs exactly one handler and every handler must
    /// name a catalog entry; anything else is refused here so that a broken
    /// wiring never reaches call time.
    pub fn new(
        spec: ToolSpec,
        handlers: Vec<Arc<dyn ToolHandler>>,
        params: DispatchParams,
    ) -> Result<Self, DispatcherBuildError> {
        let mut index: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();

        for handler in handlers {
            let name = handler.tool_name().to_string();
            if spec.get(&name).is_none() {
                return Err(DispatcherBuildError::UnknownHandler(name));
            }
            if index.insert(name.clone(), handler).is_some() {
                return Err(DispatcherBuildError::DuplicateHandler(name));
            }
        }

        if let Some(missing) = spec.names().find(|name| !index.contains_key(*name)) {
            return Err(DispatcherBuildError::MissingHandler(missing.to_string()));
        }

        debug!("Dispatcher ready with {} tools", spec.len());

        Ok(Self {
            spec,
            handlers: index,
            validator: Box::new(DefaultToolValidator),
            params,
            call_logger: Arc::new(NoCallLogger),
        })
    }

    /// Set a call logger (builder pattern).
    pub fn with_call_logger(mut self, logger: Arc<dyn CallLogger>) -> Self {
        self.call_logger = logger;
        self
    }

    /// Replace the argument validator (builder pattern).
    pub fn with_validator(mut self, validator: Box<dyn ToolValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// The catalog, in declaration order
    pub fn list_tools(&self) -> Vec<&ToolDefinition> {
        self.spec.all().collect()
    }

    /// Execute one call.
    ///
    /// `Err` is returned only for malformed requests; handler failures are
    /// reported inside the envelope.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolResult, ProtocolError> {
        let started = Instant::now();
        let outcome = self.dispatch_inner(name, arguments).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(result) if result.is_error() => {
                warn!(tool = %name, duration_ms, "Tool call failed: {}", result.text());
                self.log_call(name, "error", duration_ms, Some(result.text()));
            }
            Ok(_) => {
                info!(tool = %name, duration_ms, "Tool call succeeded");
                self.log_call(name, "success", duration_ms, None);
            }
            Err(err) => {
                debug!(tool = %name, code = err.code().json_rpc_code(), "Tool call rejected: {}", err);
                self.log_call(name, "rejected", duration_ms, Some(err.message()));
            }
        }

        outcome
    }

    async fn dispatch_inner(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolResult, ProtocolError> {
        let (definition, handler) = match (self.spec.get(name), self.handlers.get(name)) {
            (Some(definition), Some(handler)) => (definition, handler),
            _ => return Err(ProtocolError::unknown_tool(name)),
        };

        let call = ToolCall::from_request(name, arguments)?;
        self.validator.validate(&call, definition)?;

        let preview = preview_json(&Value::Object(call.arguments.clone()), 200);
        debug!(tool = %name, "Dispatching with arguments {}", preview);

        match self.invoke(handler.as_ref(), &call).await {
            Ok(output) => Ok(ToolResult::from_output(output)),
            Err(err) if err.is_invalid_argument() => Err(ProtocolError::InvalidParams(err.message)),
            Err(err) => Ok(ToolResult::failure(&definition.failure_context, &err)),
        }
    }

    /// Run the handler under the call timeout, retrying retryable failures
    async fn invoke(
        &self,
        handler: &dyn ToolHandler,
        call: &ToolCall,
    ) -> Result<ToolOutput, ToolError> {
        let mut attempt: u32 = 0;
        loop {
            let outcome = match self.params.call_timeout {
                Some(limit) => match tokio::time::timeout(limit, handler.call(call)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(ToolError::timeout(format!(
                        "{} did not complete within {}ms",
                        call.tool_name,
                        limit.as_millis()
                    ))),
                },
                None => handler.call(call).await,
            };

            match outcome {
                Err(err) if err.is_retryable() && attempt < self.params.max_retries => {
                    attempt += 1;
                    warn!(
                        "Tool '{}' unavailable (attempt {}/{}): {}",
                        call.tool_name,
                        attempt,
                        self.params.max_retries + 1,
                        err.message
                    );
                    if !self.params.retry_backoff.is_zero() {
                        tokio::time::sleep(self.params.retry_backoff).await;
                    }
                }
                other => return other,
            }
        }
    }

    fn log_call(&self, name: &str, outcome: &str, duration_ms: u64, detail: Option<&str>) {
        let mut payload = json!({
            "tool": name,
            "outcome": outcome,
            "duration_ms": duration_ms,
        });
        if let Some(detail) = detail {
            payload["detail"] = Value::String(detail.to_string());
        }
        let event_type = if outcome == "rejected" {
            "tool_rejected"
        } else {
            "tool_call"
        };
        self.call_logger.log(CallEvent::new(event_type, payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::ledger_tools::ledger_handlers;
    use crate::use_cases::ledger_tools::tests::FakeGateway;
    use async_trait::async_trait;
    use penumbra_domain::tool::catalog::*;
    use penumbra_domain::tool::{ContentBlock, ProtocolErrorCode, ledger_tool_spec};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Handler that counts invocations and plays back a script of outcomes
    struct ScriptedHandler {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        script: Mutex<Vec<Result<ToolOutput, ToolError>>>,
        delay: Option<Duration>,
    }

    impl ScriptedHandler {
        fn new(name: &'static str, calls: Arc<AtomicUsize>) -> Self {
            Self {
                name,
                calls,
                script: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        /// Outcomes returned in order; the last one repeats
        fn with_script(self, script: Vec<Result<ToolOutput, ToolError>>) -> Self {
            *self.script.lock().unwrap() = script;
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl ToolHandler for ScriptedHandler {
        fn tool_name(&self) -> &str {
            self.name
        }

        async fn call(&self, _call: &ToolCall) -> Result<ToolOutput, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let mut script = self.script.lock().unwrap();
            match script.len() {
                0 => Ok(ToolOutput::Json(json!({"ok": true}))),
                1 => script[0].clone(),
                _ => script.remove(0),
            }
        }
    }

    struct RecordingLogger {
        events: Mutex<Vec<(String, Value)>>,
    }

    impl CallLogger for RecordingLogger {
        fn log(&self, event: CallEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }

    fn fast_params() -> DispatchParams {
        DispatchParams::default()
            .with_call_timeout(Some(Duration::from_secs(5)))
            .with_retry_backoff(Duration::ZERO)
    }

    /// Real ledger handlers over the fake gateway
    fn ledger_dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(
            ledger_tool_spec(),
            ledger_handlers(Arc::new(FakeGateway::default())),
            fast_params(),
        )
        .unwrap()
    }

    /// Real handlers everywhere except `name`, which is scripted
    fn dispatcher_with(handler: ScriptedHandler, params: DispatchParams) -> ToolDispatcher {
        let name = handler.name;
        let mut handlers: Vec<Arc<dyn ToolHandler>> =
            ledger_handlers(Arc::new(FakeGateway::default()))
                .into_iter()
                .filter(|h| h.tool_name() != name)
                .collect();
        handlers.push(Arc::new(handler));
        ToolDispatcher::new(ledger_tool_spec(), handlers, params).unwrap()
    }

    #[test]
    fn test_dispatcher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ToolDispatcher>();
    }

    #[test]
    fn test_missing_handler_refuses_to_build() {
        let handlers: Vec<Arc<dyn ToolHandler>> = ledger_handlers(Arc::new(FakeGateway::default()))
            .into_iter()
            .filter(|h| h.tool_name() != SIMULATE_TRANSACTION)
            .collect();

        let err = ToolDispatcher::new(ledger_tool_spec(), handlers, fast_params())
            .err()
            .unwrap();
        assert_eq!(
            err,
            DispatcherBuildError::MissingHandler(SIMULATE_TRANSACTION.to_string())
        );
    }

    #[test]
    fn test_unknown_and_duplicate_handlers_refuse_to_build() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut handlers = ledger_handlers(Arc::new(FakeGateway::default()));
        handlers.push(Arc::new(ScriptedHandler::new("launch_rocket", calls.clone())));
        let err = ToolDispatcher::new(ledger_tool_spec(), handlers, fast_params())
            .err()
            .unwrap();
        assert!(matches!(err, DispatcherBuildError::UnknownHandler(ref n) if n == "launch_rocket"));

        let mut handlers = ledger_handlers(Arc::new(FakeGateway::default()));
        handlers.push(Arc::new(ScriptedHandler::new(GET_DEX_STATE, calls)));
        let err = ToolDispatcher::new(ledger_tool_spec(), handlers, fast_params())
            .err()
            .unwrap();
        assert!(matches!(err, DispatcherBuildError::DuplicateHandler(_)));
    }

    #[test]
    fn test_list_tools_is_idempotent() {
        let dispatcher = ledger_dispatcher();
        let first = serde_json::to_string(&dispatcher.list_tools()).unwrap();
        let second = serde_json::to_string(&dispatcher.list_tools()).unwrap();
        assert_eq!(first, second);
        assert_eq!(dispatcher.list_tools().len(), 8);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_method_not_found() {
        let dispatcher = ledger_dispatcher();
        let err = dispatcher
            .dispatch("not_a_real_tool", Some(json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProtocolErrorCode::MethodNotFound);
        assert_eq!(err.message(), "Unknown tool: not_a_real_tool");
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let dispatcher = ledger_dispatcher();
        let err = dispatcher.dispatch("GET_CHAIN_STATUS", None).await.unwrap_err();
        assert_eq!(err.code(), ProtocolErrorCode::MethodNotFound);
    }

    #[tokio::test]
    async fn test_missing_required_never_invokes_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_with(
            ScriptedHandler::new(GET_TRANSACTION, calls.clone()),
            fast_params(),
        );

        let err = dispatcher
            .dispatch(GET_TRANSACTION, Some(json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProtocolErrorCode::InvalidParams);
        assert!(err.message().contains("hash"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrong_type_is_invalid_params() {
        let dispatcher = ledger_dispatcher();
        let err = dispatcher
            .dispatch(SIMULATE_TRANSACTION, Some(json!({"transaction": 123})))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProtocolErrorCode::InvalidParams);
        assert!(err.message().contains("transaction"));
    }

    /// Demands a `memo` on every call
    struct MemoRequired;

    impl ToolValidator for MemoRequired {
        fn validate(
            &self,
            call: &ToolCall,
            _definition: &ToolDefinition,
        ) -> Result<(), penumbra_domain::tool::ValidationError> {
            match call.get_string("memo") {
                Some(_) => Ok(()),
                None => Err(penumbra_domain::tool::ValidationError::Missing {
                    tool: call.tool_name.clone(),
                    field: "memo".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_custom_validator_replaces_default() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_with(
            ScriptedHandler::new(GET_CHAIN_STATUS, calls.clone()),
            fast_params(),
        )
        .with_validator(Box::new(MemoRequired));

        let err = dispatcher
            .dispatch(GET_CHAIN_STATUS, None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProtocolErrorCode::InvalidParams);
        assert!(err.message().contains("memo"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let ok = dispatcher
            .dispatch(GET_CHAIN_STATUS, Some(json!({"memo": "x"})))
            .await
            .unwrap();
        assert!(ok.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_object_arguments_are_invalid_params() {
        let dispatcher = ledger_dispatcher();
        let err = dispatcher
            .dispatch(GET_CHAIN_STATUS, Some(json!("hello")))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProtocolErrorCode::InvalidParams);
    }

    #[tokio::test]
    async fn test_absent_and_null_arguments_are_empty() {
        let dispatcher = ledger_dispatcher();
        assert!(dispatcher.dispatch(GET_CHAIN_STATUS, None).await.unwrap().is_success());
        assert!(
            dispatcher
                .dispatch(GET_CHAIN_STATUS, Some(Value::Null))
                .await
                .unwrap()
                .is_success()
        );
    }

    #[tokio::test]
    async fn test_empty_actions_are_invalid_params() {
        let dispatcher = ledger_dispatcher();
        let err = dispatcher
            .dispatch(BUILD_TRANSACTION, Some(json!({"actions": []})))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProtocolErrorCode::InvalidParams);
    }

    #[tokio::test]
    async fn test_estimate_fees_spend_and_swap() {
        let dispatcher = ledger_dispatcher();
        let result = dispatcher
            .dispatch(
                ESTIMATE_FEES,
                Some(json!({"actions": [
                    {"type": "spend", "params": {}},
                    {"type": "swap", "params": {}}
                ]})),
            )
            .await
            .unwrap();

        let value = result.json().unwrap();
        assert_eq!(value["estimatedFee"], "0.002500");
        assert_eq!(value["breakdown"]["baseFee"], "0.001000");
        assert_eq!(value["breakdown"]["actionFees"][0]["fee"], "0.000500");
        assert_eq!(value["breakdown"]["actionFees"][1]["type"], "swap");
        assert_eq!(value["breakdown"]["actionFees"][1]["fee"], "0.001000");
    }

    #[tokio::test]
    async fn test_build_transaction_echoes_input() {
        let dispatcher = ledger_dispatcher();
        let actions = json!([{"type": "output", "params": {"amount": "5"}}]);
        let result = dispatcher
            .dispatch(
                BUILD_TRANSACTION,
                Some(json!({"actions": actions.clone(), "memo": "hi"})),
            )
            .await
            .unwrap();

        let value = result.json().unwrap();
        assert_eq!(value["actions"], actions);
        assert_eq!(value["memo"], "hi");
        assert!(!value["hash"].as_str().unwrap().is_empty());
        assert!(!value["signature"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chain_status_is_stable_across_calls() {
        let dispatcher = ledger_dispatcher();
        let first = dispatcher.dispatch(GET_CHAIN_STATUS, None).await.unwrap().json().unwrap();
        let second = dispatcher.dispatch(GET_CHAIN_STATUS, None).await.unwrap().json().unwrap();

        assert_eq!(first["chainId"], second["chainId"]);
        let keys = |v: &Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys(&first), keys(&second));
    }

    #[tokio::test]
    async fn test_handler_failure_becomes_soft_envelope() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(GET_DEX_STATE, calls.clone())
            .with_script(vec![Err(ToolError::execution_failed("node returned 502"))]);
        let dispatcher = dispatcher_with(handler, fast_params());

        let result = dispatcher.dispatch(GET_DEX_STATE, None).await.unwrap();
        assert!(result.is_error());
        assert_eq!(result.text(), "Error fetching DEX state: node returned 502");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_failure_message_uses_generic_text() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(ESTIMATE_FEES, calls)
            .with_script(vec![Err(ToolError::execution_failed(""))]);
        let dispatcher = dispatcher_with(handler, fast_params());

        let result = dispatcher
            .dispatch(ESTIMATE_FEES, Some(json!({"actions": [{"type": "spend", "params": {}}]})))
            .await
            .unwrap();
        assert_eq!(result.text(), "Error estimating fees: Unknown error occurred");
    }

    #[tokio::test]
    async fn test_handler_invalid_argument_becomes_protocol_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(GET_VALIDATOR_SET, calls)
            .with_script(vec![Err(ToolError::invalid_argument("bad cursor"))]);
        let dispatcher = dispatcher_with(handler, fast_params());

        let err = dispatcher.dispatch(GET_VALIDATOR_SET, None).await.unwrap_err();
        assert_eq!(err, ProtocolError::InvalidParams("bad cursor".into()));
    }

    #[tokio::test]
    async fn test_blocks_output_passes_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(GET_VALIDATOR_SET, calls).with_script(vec![Ok(
            ToolOutput::Blocks(vec![ContentBlock::text("a"), ContentBlock::text("b")]),
        )]);
        let dispatcher = dispatcher_with(handler, fast_params());

        let result = dispatcher.dispatch(GET_VALIDATOR_SET, None).await.unwrap();
        assert_eq!(result.content().len(), 2);
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_slow_handler_times_out() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler =
            ScriptedHandler::new(GET_CHAIN_STATUS, calls).with_delay(Duration::from_secs(10));
        let params = fast_params()
            .with_call_timeout(Some(Duration::from_millis(20)))
            .with_max_retries(0);
        let dispatcher = dispatcher_with(handler, params);

        let result = dispatcher.dispatch(GET_CHAIN_STATUS, None).await.unwrap();
        assert!(result.is_error());
        assert!(result.text().starts_with("Error fetching chain status: Operation timed out"));
    }

    #[tokio::test]
    async fn test_unavailable_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(GET_VALIDATOR_SET, calls.clone()).with_script(vec![
            Err(ToolError::unavailable("connection refused")),
            Err(ToolError::unavailable("connection refused")),
            Ok(ToolOutput::Json(json!({"validators": []}))),
        ]);
        let dispatcher = dispatcher_with(handler, fast_params().with_max_retries(3));

        let result = dispatcher.dispatch(GET_VALIDATOR_SET, None).await.unwrap();
        assert!(result.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retries_are_bounded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(GET_VALIDATOR_SET, calls.clone())
            .with_script(vec![Err(ToolError::unavailable("connection refused"))]);
        let dispatcher = dispatcher_with(handler, fast_params().with_max_retries(2));

        let result = dispatcher.dispatch(GET_VALIDATOR_SET, None).await.unwrap();
        assert!(result.is_error());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_failure_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(GET_VALIDATOR_SET, calls.clone())
            .with_script(vec![Err(ToolError::execution_failed("boom"))]);
        let dispatcher = dispatcher_with(handler, fast_params().with_max_retries(5));

        dispatcher.dispatch(GET_VALIDATOR_SET, None).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_does_not_leak_into_next_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = ScriptedHandler::new(GET_VALIDATOR_SET, calls).with_script(vec![
            Err(ToolError::execution_failed("boom")),
            Ok(ToolOutput::Json(json!({"validators": []}))),
        ]);
        let dispatcher = dispatcher_with(handler, fast_params().with_max_retries(0));

        assert!(dispatcher.dispatch(GET_VALIDATOR_SET, None).await.unwrap().is_error());
        assert!(dispatcher.dispatch(GET_VALIDATOR_SET, None).await.unwrap().is_success());
        assert!(dispatcher.dispatch(GET_CHAIN_STATUS, None).await.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_calls_are_logged() {
        let logger = Arc::new(RecordingLogger {
            events: Mutex::new(Vec::new()),
        });
        let dispatcher = ledger_dispatcher().with_call_logger(logger.clone());

        dispatcher.dispatch(GET_CHAIN_STATUS, None).await.unwrap();
        dispatcher.dispatch("nope", None).await.unwrap_err();

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "tool_call");
        assert_eq!(events[0].1["tool"], GET_CHAIN_STATUS);
        assert_eq!(events[0].1["outcome"], "success");
        assert_eq!(events[1].0, "tool_rejected");
        assert_eq!(events[1].1["detail"], "Unknown tool: nope");
    }
}
