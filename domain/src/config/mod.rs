//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod ledger_config;
mod output_format;

pub use ledger_config::{ChainSettings, DexSettings, GovernanceSettings, LedgerConfig, NodeSettings};
pub use output_format::OutputFormat;
