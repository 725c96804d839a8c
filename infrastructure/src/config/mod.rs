//! Configuration loading for penumbra-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PENUMBRA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./penumbra-mcp.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/penumbra-mcp/config.toml`
//! 5. Default values
//!
//! | Variable | Key | Default |
//! |----------|-----|---------|
//! | `PENUMBRA_NODE_URL` | `node.url` | `http://localhost:8080` |
//! | `PENUMBRA_REQUEST_TIMEOUT` | `node.timeout_ms` | `10000` |
//! | `PENUMBRA_REQUEST_RETRIES` | `node.retries` | `3` |
//! | `PENUMBRA_NETWORK` | `chain.network` | `testnet` |
//! | `PENUMBRA_CHAIN_ID` | `chain.chain_id` | `penumbra-testnet` |
//! | `PENUMBRA_BLOCK_TIME` | `chain.block_time_ms` | `6000` |
//! | `PENUMBRA_EPOCH_DURATION` | `chain.epoch_duration` | `100` |
//! | `PENUMBRA_DEX_BATCH_INTERVAL` | `dex.batch_interval_ms` | `60000` |
//! | `PENUMBRA_DEX_MIN_LIQUIDITY` | `dex.min_liquidity_amount` | `"1000"` |
//! | `PENUMBRA_DEX_MAX_PRICE_IMPACT` | `dex.max_price_impact` | `0.05` |
//! | `PENUMBRA_GOVERNANCE_VOTING_PERIOD` | `governance.voting_period_ms` | `604800000` |
//! | `PENUMBRA_GOVERNANCE_MIN_DEPOSIT` | `governance.min_deposit_amount` | `"10000"` |

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChainConfig, FileConfig, FileDexConfig, FileGovernanceConfig,
    FileNodeConfig,
};
pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};
