//! Ledger tool handlers
//!
//! One [`ToolHandler`] per catalog entry. Each handler decodes its
//! (already validated) arguments, calls the [`LedgerGateway`] and returns
//! the resulting document as structured output. Gateway failures are
//! converted into tagged [`ToolError`]s; the dispatcher decides how they
//! reach the client.

use async_trait::async_trait;
use penumbra_domain::ledger::{ProposalFilter, TransactionDraft, decode_actions};
use penumbra_domain::tool::catalog::{
    BUILD_TRANSACTION, ESTIMATE_FEES, GET_CHAIN_STATUS, GET_DEX_STATE, GET_GOVERNANCE_PROPOSALS,
    GET_TRANSACTION, GET_VALIDATOR_SET, SIMULATE_TRANSACTION,
};
use penumbra_domain::tool::{ToolCall, ToolError, ToolHandler, ToolOutput};
use serde_json::Value;
use std::sync::Arc;

use crate::ports::ledger_gateway::LedgerGateway;

/// All ledger handlers over one gateway, in catalog order
pub fn ledger_handlers(gateway: Arc<dyn LedgerGateway>) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(ValidatorSetHandler::new(gateway.clone())),
        Arc::new(ChainStatusHandler::new(gateway.clone())),
        Arc::new(TransactionHandler::new(gateway.clone())),
        Arc::new(DexStateHandler::new(gateway.clone())),
        Arc::new(GovernanceProposalsHandler::new(gateway.clone())),
        Arc::new(BuildTransactionHandler::new(gateway.clone())),
        Arc::new(EstimateFeesHandler::new(gateway.clone())),
        Arc::new(SimulateTransactionHandler::new(gateway)),
    ]
}

fn required_str<'a>(call: &'a ToolCall, key: &str) -> Result<&'a str, ToolError> {
    call.get_string(key)
        .ok_or_else(|| ToolError::invalid_argument(format!("{} must be a string", key)))
}

fn required_array<'a>(call: &'a ToolCall, key: &str) -> Result<&'a Vec<Value>, ToolError> {
    call.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| ToolError::invalid_argument(format!("{} must be an array", key)))
}

macro_rules! gateway_handler {
    ($name:ident) => {
        pub struct $name {
            gateway: Arc<dyn LedgerGateway>,
        }

        impl $name {
            pub fn new(gateway: Arc<dyn LedgerGateway>) -> Self {
                Self { gateway }
            }
        }
    };
}

gateway_handler!(ValidatorSetHandler);
gateway_handler!(ChainStatusHandler);
gateway_handler!(TransactionHandler);
gateway_handler!(DexStateHandler);
gateway_handler!(GovernanceProposalsHandler);
gateway_handler!(BuildTransactionHandler);
gateway_handler!(EstimateFeesHandler);
gateway_handler!(SimulateTransactionHandler);

#[async_trait]
impl ToolHandler for ValidatorSetHandler {
    fn tool_name(&self) -> &str {
        GET_VALIDATOR_SET
    }

    async fn call(&self, _call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let validators = self.gateway.validator_set().await?;
        ToolOutput::json(&validators)
    }
}

#[async_trait]
impl ToolHandler for ChainStatusHandler {
    fn tool_name(&self) -> &str {
        GET_CHAIN_STATUS
    }

    async fn call(&self, _call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let status = self.gateway.chain_status().await?;
        ToolOutput::json(&status)
    }
}

#[async_trait]
impl ToolHandler for TransactionHandler {
    fn tool_name(&self) -> &str {
        GET_TRANSACTION
    }

    async fn call(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let hash = required_str(call, "hash")?;
        let record = self.gateway.transaction(hash).await?;
        ToolOutput::json(&record)
    }
}

#[async_trait]
impl ToolHandler for DexStateHandler {
    fn tool_name(&self) -> &str {
        GET_DEX_STATE
    }

    async fn call(&self, _call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let state = self.gateway.dex_state().await?;
        ToolOutput::json(&state)
    }
}

#[async_trait]
impl ToolHandler for GovernanceProposalsHandler {
    fn tool_name(&self) -> &str {
        GET_GOVERNANCE_PROPOSALS
    }

    async fn call(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let filter = call
            .get_string("status")
            .map(ProposalFilter::parse_lenient)
            .unwrap_or_default();
        let proposals = self.gateway.governance_proposals(filter).await?;
        ToolOutput::json(&proposals)
    }
}

#[async_trait]
impl ToolHandler for BuildTransactionHandler {
    fn tool_name(&self) -> &str {
        BUILD_TRANSACTION
    }

    async fn call(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let actions = required_array(call, "actions")?;
        let mut draft = TransactionDraft::new(actions.clone());

        if let Some(memo) = call.get_present("memo") {
            let memo = memo
                .as_str()
                .ok_or_else(|| ToolError::invalid_argument("memo must be a string"))?;
            draft = draft.with_memo(memo);
        }

        if let Some(height) = call.get_present("expiryHeight") {
            let Value::Number(height) = height else {
                return Err(ToolError::invalid_argument("expiryHeight must be a number"));
            };
            draft = draft.with_expiry_height(height.clone());
        }

        let built = self.gateway.build_transaction(draft).await?;
        ToolOutput::json(&built)
    }
}

#[async_trait]
impl ToolHandler for EstimateFeesHandler {
    fn tool_name(&self) -> &str {
        ESTIMATE_FEES
    }

    async fn call(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let actions = decode_actions(required_array(call, "actions")?)
            .map_err(ToolError::invalid_argument)?;
        let estimate = self.gateway.estimate_fees(&actions).await?;
        ToolOutput::json(&estimate)
    }
}

#[async_trait]
impl ToolHandler for SimulateTransactionHandler {
    fn tool_name(&self) -> &str {
        SIMULATE_TRANSACTION
    }

    async fn call(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let transaction = required_str(call, "transaction")?;
        let report = self.gateway.simulate_transaction(transaction).await?;
        ToolOutput::json(&report)
    }
}
