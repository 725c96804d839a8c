//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly, validated, and then converted into the
//! domain [`LedgerConfig`].
//!
//! ```toml
//! [node]
//! url = "http://localhost:8080"
//! timeout_ms = 10000
//! retries = 3
//!
//! [chain]
//! chain_id = "penumbra-testnet"
//!
//! [dex]
//! max_price_impact = 0.05
//! ```

use penumbra_domain::config::{
    ChainSettings, DexSettings, GovernanceSettings, LedgerConfig, NodeSettings,
};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("node.url cannot be empty")]
    EmptyNodeUrl,

    #[error("node.timeout_ms cannot be 0")]
    InvalidTimeout,

    #[error("chain.chain_id cannot be empty")]
    EmptyChainId,

    #[error("dex.max_price_impact must be between 0 and 1, got {0}")]
    InvalidPriceImpact(f64),
}

/// Accept either a string or a bare number for string-typed settings.
///
/// Environment values such as `PENUMBRA_CHAIN_ID=1234` arrive as numbers.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Uint(u64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Uint(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Raw node configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNodeConfig {
    #[serde(deserialize_with = "string_or_number")]
    pub url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    pub retries: u32,
}

impl Default for FileNodeConfig {
    fn default() -> Self {
        let node = NodeSettings::default();
        Self {
            url: node.url,
            timeout_ms: node.timeout_ms,
            retries: node.retries,
        }
    }
}

/// Raw chain configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChainConfig {
    #[serde(deserialize_with = "string_or_number")]
    pub network: String,
    #[serde(deserialize_with = "string_or_number")]
    pub chain_id: String,
    pub block_time_ms: u64,
    pub epoch_duration: u64,
}

impl Default for FileChainConfig {
    fn default() -> Self {
        let chain = ChainSettings::default();
        Self {
            network: chain.network,
            chain_id: chain.chain_id,
            block_time_ms: chain.block_time_ms,
            epoch_duration: chain.epoch_duration,
        }
    }
}

/// Raw DEX configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDexConfig {
    pub batch_interval_ms: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub min_liquidity_amount: String,
    pub max_price_impact: f64,
}

impl Default for FileDexConfig {
    fn default() -> Self {
        let dex = DexSettings::default();
        Self {
            batch_interval_ms: dex.batch_interval_ms,
            min_liquidity_amount: dex.min_liquidity_amount,
            max_price_impact: dex.max_price_impact,
        }
    }
}

/// Raw governance configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGovernanceConfig {
    pub voting_period_ms: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub min_deposit_amount: String,
}

impl Default for FileGovernanceConfig {
    fn default() -> Self {
        let governance = GovernanceSettings::default();
        Self {
            voting_period_ms: governance.voting_period_ms,
            min_deposit_amount: governance.min_deposit_amount,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Node endpoint and request policy
    pub node: FileNodeConfig,
    /// Chain identity and timing
    pub chain: FileChainConfig,
    /// DEX parameters
    pub dex: FileDexConfig,
    /// Governance parameters
    pub governance: FileGovernanceConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.node.url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyNodeUrl);
        }

        if self.node.timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.chain.chain_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyChainId);
        }

        let impact = self.dex.max_price_impact;
        if !(0.0..=1.0).contains(&impact) {
            return Err(ConfigValidationError::InvalidPriceImpact(impact));
        }

        Ok(())
    }

    /// Validate and convert into the immutable domain configuration
    pub fn into_ledger_config(self) -> Result<LedgerConfig, ConfigValidationError> {
        self.validate()?;

        Ok(LedgerConfig {
            node: NodeSettings {
                url: self.node.url,
                timeout_ms: self.node.timeout_ms,
                retries: self.node.retries,
            },
            chain: ChainSettings {
                network: self.chain.network,
                chain_id: self.chain.chain_id,
                block_time_ms: self.chain.block_time_ms,
                epoch_duration: self.chain.epoch_duration,
            },
            dex: DexSettings {
                batch_interval_ms: self.dex.batch_interval_ms,
                min_liquidity_amount: self.dex.min_liquidity_amount,
                max_price_impact: self.dex.max_price_impact,
            },
            governance: GovernanceSettings {
                voting_period_ms: self.governance.voting_period_ms,
                min_deposit_amount: self.governance.min_deposit_amount,
            },
        })
    }
}
