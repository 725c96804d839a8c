//! Ledger Gateway port
//!
//! Defines the interface the tool handlers use to reach the ledger. The
//! default adapter in the infrastructure layer returns placeholder
//! documents; a node-backed adapter plugs in here without touching the
//! handlers or the dispatcher.

use async_trait::async_trait;
use penumbra_domain::ledger::{
    BuiltTransaction, ChainStatus, DexState, FeeEstimate, ProposalFilter, ProposalList,
    SimulationReport, TransactionAction, TransactionDraft, TransactionRecord, ValidatorSet,
};
use penumbra_domain::tool::ToolError;
use thiserror::Error;

/// Errors that can occur when talking to the ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Unavailable(_))
    }
}

impl From<GatewayError> for ToolError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidRequest(msg) => ToolError::invalid_argument(msg),
            GatewayError::NotFound(what) => ToolError::not_found(what),
            GatewayError::Unavailable(msg) => ToolError::unavailable(msg),
            GatewayError::Timeout(op) => ToolError::timeout(op),
            GatewayError::Other(msg) => ToolError::execution_failed(msg),
        }
    }
}

/// Gateway to ledger data and transaction services
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    async fn validator_set(&self) -> Result<ValidatorSet, GatewayError>;

    async fn chain_status(&self) -> Result<ChainStatus, GatewayError>;

    async fn transaction(&self, hash: &str) -> Result<TransactionRecord, GatewayError>;

    async fn dex_state(&self) -> Result<DexState, GatewayError>;

    async fn governance_proposals(
        &self,
        filter: ProposalFilter,
    ) -> Result<ProposalList, GatewayError>;

    async fn build_transaction(
        &self,
        draft: TransactionDraft,
    ) -> Result<BuiltTransaction, GatewayError>;

    async fn estimate_fees(
        &self,
        actions: &[TransactionAction],
    ) -> Result<FeeEstimate, GatewayError>;

    async fn simulate_transaction(
        &self,
        transaction: &str,
    ) -> Result<SimulationReport, GatewayError>;
}
