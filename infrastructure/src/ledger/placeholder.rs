//! Placeholder ledger gateway
//!
//! Returns fixed-shape documents so that clients can integrate against the
//! tool surface before a node-backed gateway exists. Only the timestamps,
//! the generated transaction hash and the config-derived fields vary.

use async_trait::async_trait;
use chrono::{SecondsFormat, TimeDelta, Utc};
use penumbra_application::ports::ledger_gateway::{GatewayError, LedgerGateway};
use penumbra_domain::config::LedgerConfig;
use penumbra_domain::ledger::{
    BuiltTransaction, ChainStatus, DexState, FeeEstimate, FeeSchedule, GovernanceProposal,
    ProposalFilter, ProposalList, SimulationEffects, SimulationLog, SimulationReport,
    TradingPair, TransactionAction, TransactionDraft, TransactionRecord, ValidatorInfo,
    ValidatorSet,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const PLACEHOLDER_HEIGHT: &str = "1000000";
const PLACEHOLDER_SIGNATURE: &str = "0x...";

/// Gateway that answers from configuration and constants
pub struct PlaceholderLedgerGateway {
    config: Arc<LedgerConfig>,
    fees: FeeSchedule,
}

impl PlaceholderLedgerGateway {
    pub fn new(config: Arc<LedgerConfig>) -> Self {
        Self {
            config,
            fees: FeeSchedule::default(),
        }
    }

    pub fn with_fee_schedule(mut self, fees: FeeSchedule) -> Self {
        self.fees = fees;
        self
    }

    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn voting_end_time(&self) -> Result<String, GatewayError> {
        let period = TimeDelta::from_std(self.config.governance.voting_period())
            .map_err(|e| GatewayError::Other(format!("voting period out of range: {}", e)))?;
        Utc::now()
            .checked_add_signed(period)
            .map(|end| end.to_rfc3339_opts(SecondsFormat::Millis, true))
            .ok_or_else(|| GatewayError::Other("voting period out of range".to_string()))
    }

    fn fresh_hash() -> String {
        format!("0x{}", Uuid::new_v4().simple())
    }
}

#[async_trait]
impl LedgerGateway for PlaceholderLedgerGateway {
    async fn validator_set(&self) -> Result<ValidatorSet, GatewayError> {
        Ok(ValidatorSet {
            validators: vec![ValidatorInfo {
                address: "penumbrav1xyz...".to_string(),
                voting_power: "1000000".to_string(),
                commission: "0.05".to_string(),
                status: "active".to_string(),
            }],
        })
    }

    async fn chain_status(&self) -> Result<ChainStatus, GatewayError> {
        Ok(ChainStatus {
            height: PLACEHOLDER_HEIGHT.to_string(),
            chain_id: self.config.chain.chain_id.clone(),
            timestamp: Self::now(),
            block_hash: "0x...".to_string(),
        })
    }

    async fn transaction(&self, hash: &str) -> Result<TransactionRecord, GatewayError> {
        Ok(TransactionRecord {
            hash: hash.to_string(),
            status: "success".to_string(),
            height: PLACEHOLDER_HEIGHT.to_string(),
            timestamp: Self::now(),
            gas_used: "50000".to_string(),
            fee: "0.001".to_string(),
        })
    }

    async fn dex_state(&self) -> Result<DexState, GatewayError> {
        let dex = &self.config.dex;
        Ok(DexState {
            current_batch_number: "12345".to_string(),
            last_batch_timestamp: Self::now(),
            batch_interval: dex.batch_interval_ms,
            min_liquidity_amount: dex.min_liquidity_amount.clone(),
            max_price_impact: dex.max_price_impact,
            active_pairs: vec![TradingPair {
                base_asset: "penumbra/usdc".to_string(),
                quote_asset: "penumbra/eth".to_string(),
                last_price: "1850.50".to_string(),
                volume_24h: "1000000".to_string(),
            }],
        })
    }

    async fn governance_proposals(
        &self,
        filter: ProposalFilter,
    ) -> Result<ProposalList, GatewayError> {
        // The single example proposal is returned whatever the filter
        debug!("Listing placeholder proposals (filter: {})", filter.as_str());

        let proposal = GovernanceProposal {
            id: "1".to_string(),
            title: "Example Proposal".to_string(),
            status: "active".to_string(),
            voting_end_time: self.voting_end_time()?,
            min_deposit: self.config.governance.min_deposit_amount.clone(),
            yes_votes: "750000".to_string(),
            no_votes: "250000".to_string(),
        };

        Ok(ProposalList {
            proposals: vec![proposal],
        })
    }

    async fn build_transaction(
        &self,
        draft: TransactionDraft,
    ) -> Result<BuiltTransaction, GatewayError> {
        let hash = Self::fresh_hash();
        debug!("Built placeholder transaction {} with {} actions", hash, draft.actions.len());

        Ok(BuiltTransaction {
            hash,
            actions: draft.actions,
            memo: draft.memo.unwrap_or_default(),
            expiry_height: draft.expiry_height.unwrap_or_else(|| 0.into()),
            signature: PLACEHOLDER_SIGNATURE.to_string(),
            timestamp: Self::now(),
        })
    }

    async fn estimate_fees(
        &self,
        actions: &[TransactionAction],
    ) -> Result<FeeEstimate, GatewayError> {
        Ok(self.fees.estimate(actions))
    }

    async fn simulate_transaction(
        &self,
        _transaction: &str,
    ) -> Result<SimulationReport, GatewayError> {
        Ok(SimulationReport {
            success: true,
            gas_used: "75000".to_string(),
            logs: vec![SimulationLog {
                kind: "transaction_executed".to_string(),
                timestamp: Self::now(),
                details: "Transaction simulation completed successfully".to_string(),
            }],
            effects: SimulationEffects::default(),
        })
    }
}
