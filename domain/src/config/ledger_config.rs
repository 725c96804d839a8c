//! Ledger connection and chain parameters
//!
//! [`LedgerConfig`] is built once at startup by the infrastructure layer
//! and shared read-only (behind an `Arc`) by the gateway and dispatcher.
//! It carries no loading logic of its own.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Node endpoint and request policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSettings {
    pub url: String,
    /// Per-call timeout in milliseconds
    pub timeout_ms: u64,
    /// Additional attempts after a retryable failure
    pub retries: u32,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            timeout_ms: 10_000,
            retries: 3,
        }
    }
}

impl NodeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSettings {
    pub network: String,
    pub chain_id: String,
    /// Milliseconds per block
    pub block_time_ms: u64,
    /// Blocks per epoch
    pub epoch_duration: u64,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            network: "testnet".to_string(),
            chain_id: "penumbra-testnet".to_string(),
            block_time_ms: 6_000,
            epoch_duration: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexSettings {
    /// Milliseconds between batch auctions
    pub batch_interval_ms: u64,
    pub min_liquidity_amount: String,
    /// Fraction in `[0, 1]`
    pub max_price_impact: f64,
}

impl Default for DexSettings {
    fn default() -> Self {
        Self {
            batch_interval_ms: 60_000,
            min_liquidity_amount: "1000".to_string(),
            max_price_impact: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceSettings {
    /// Milliseconds a proposal stays open (7 days by default)
    pub voting_period_ms: u64,
    pub min_deposit_amount: String,
}

impl Default for GovernanceSettings {
    fn default() -> Self {
        Self {
            voting_period_ms: 604_800_000,
            min_deposit_amount: "10000".to_string(),
        }
    }
}

impl GovernanceSettings {
    pub fn voting_period(&self) -> Duration {
        Duration::from_millis(self.voting_period_ms)
    }
}

/// Complete, immutable ledger configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub node: NodeSettings,
    pub chain: ChainSettings,
    pub dex: DexSettings,
    pub governance: GovernanceSettings,
}

impl LedgerConfig {
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain.chain_id = chain_id.into();
        self
    }

    pub fn with_node(mut self, node: NodeSettings) -> Self {
        self.node = node;
        self
    }
}
