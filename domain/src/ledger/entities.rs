//! Ledger documents returned by the gateway
//!
//! All types serialize with camelCase keys; numeric ledger quantities are
//! carried as strings, matching what clients already parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::action::{FeeAmount, TransactionAction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorInfo {
    pub address: String,
    pub voting_power: String,
    pub commission: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorSet {
    pub validators: Vec<ValidatorInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainStatus {
    pub height: String,
    pub chain_id: String,
    pub timestamp: String,
    pub block_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub hash: String,
    pub status: String,
    pub height: String,
    pub timestamp: String,
    pub gas_used: String,
    pub fee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    pub base_asset: String,
    pub quote_asset: String,
    pub last_price: String,
    pub volume_24h: String,
}

/// Batch-auction DEX snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexState {
    pub current_batch_number: String,
    pub last_batch_timestamp: String,
    /// Milliseconds between batches
    pub batch_interval: u64,
    pub min_liquidity_amount: String,
    pub max_price_impact: f64,
    pub active_pairs: Vec<TradingPair>,
}

/// Which proposals to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalFilter {
    #[default]
    Active,
    Completed,
    All,
}

impl ProposalFilter {
    /// Parse a client-supplied filter; unknown values fall back to `active`
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "completed" => ProposalFilter::Completed,
            "all" => ProposalFilter::All,
            _ => ProposalFilter::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalFilter::Active => "active",
            ProposalFilter::Completed => "completed",
            ProposalFilter::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceProposal {
    pub id: String,
    pub title: String,
    pub status: String,
    pub voting_end_time: String,
    pub min_deposit: String,
    pub yes_votes: String,
    pub no_votes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalList {
    pub proposals: Vec<GovernanceProposal>,
}

/// A transaction to be built, decoded from `build_transaction` arguments.
///
/// `actions` is kept as the raw JSON the client sent so the built
/// transaction can echo it back exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub actions: Vec<Value>,
    pub memo: Option<String>,
    pub expiry_height: Option<serde_json::Number>,
}

impl TransactionDraft {
    pub fn new(actions: Vec<Value>) -> Self {
        Self {
            actions,
            memo: None,
            expiry_height: None,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_expiry_height(mut self, height: impl Into<serde_json::Number>) -> Self {
        self.expiry_height = Some(height.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltTransaction {
    pub hash: String,
    pub actions: Vec<Value>,
    pub memo: String,
    pub expiry_height: serde_json::Number,
    pub signature: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionFee {
    #[serde(rename = "type")]
    pub kind: String,
    pub fee: FeeAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub base_fee: FeeAmount,
    pub action_fees: Vec<ActionFee>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimate {
    pub estimated_fee: FeeAmount,
    pub breakdown: FeeBreakdown,
}

/// Decode the `actions` argument shared by the transaction tools
pub fn decode_actions(actions: &[Value]) -> Result<Vec<TransactionAction>, String> {
    actions
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            serde_json::from_value(raw.clone())
                .map_err(|e| format!("actions[{}] is not a valid action: {}", i, e))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationLog {
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationEffects {
    pub state_changes: Vec<Value>,
    pub events: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub success: bool,
    pub gas_used: String,
    pub logs: Vec<SimulationLog>,
    pub effects: SimulationEffects,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proposal_filter_lenient() {
        assert_eq!(ProposalFilter::parse_lenient("completed"), ProposalFilter::Completed);
        assert_eq!(ProposalFilter::parse_lenient("all"), ProposalFilter::All);
        assert_eq!(ProposalFilter::parse_lenient("pending"), ProposalFilter::Active);
        assert_eq!(ProposalFilter::parse_lenient("ALL"), ProposalFilter::Active);
        assert_eq!(ProposalFilter::default(), ProposalFilter::Active);
    }

    #[test]
    fn test_dex_state_keys() {
        let state = DexState {
            current_batch_number: "1".into(),
            last_batch_timestamp: "t".into(),
            batch_interval: 60000,
            min_liquidity_amount: "1000".into(),
            max_price_impact: 0.05,
            active_pairs: vec![TradingPair {
                base_asset: "a".into(),
                quote_asset: "b".into(),
                last_price: "1".into(),
                volume_24h: "2".into(),
            }],
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["batchInterval"], 60000);
        assert_eq!(value["maxPriceImpact"], 0.05);
        assert_eq!(value["activePairs"][0]["volume24h"], "2");
    }

    #[test]
    fn test_decode_actions() {
        let raw = vec![json!({"type": "spend", "params": {"amount": "1"}})];
        let actions = decode_actions(&raw).unwrap();
        assert_eq!(actions[0].kind, "spend");
        assert_eq!(actions[0].params["amount"], "1");

        let err = decode_actions(&[json!({"type": 5})]).unwrap_err();
        assert!(err.starts_with("actions[0]"));
    }

    #[test]
    fn test_simulation_report_keys() {
        let report = SimulationReport {
            success: true,
            gas_used: "75000".into(),
            logs: vec![SimulationLog {
                kind: "transaction_executed".into(),
                timestamp: "t".into(),
                details: "done".into(),
            }],
            effects: SimulationEffects::default(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["gasUsed"], "75000");
        assert_eq!(value["logs"][0]["type"], "transaction_executed");
        assert_eq!(value["effects"], json!({"stateChanges": [], "events": []}));
    }
}
