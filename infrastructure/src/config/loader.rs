//! Configuration loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use penumbra_domain::config::LedgerConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "penumbra-mcp.toml";

/// Prefix of all recognised environment variables
pub const ENV_PREFIX: &str = "PENUMBRA_";

/// Environment variable (without prefix) → config key path
const ENV_KEYS: &[(&str, &str)] = &[
    ("NODE_URL", "node.url"),
    ("REQUEST_TIMEOUT", "node.timeout_ms"),
    ("REQUEST_RETRIES", "node.retries"),
    ("NETWORK", "chain.network"),
    ("CHAIN_ID", "chain.chain_id"),
    ("BLOCK_TIME", "chain.block_time_ms"),
    ("EPOCH_DURATION", "chain.epoch_duration"),
    ("DEX_BATCH_INTERVAL", "dex.batch_interval_ms"),
    ("DEX_MIN_LIQUIDITY", "dex.min_liquidity_amount"),
    ("DEX_MAX_PRICE_IMPACT", "dex.max_price_impact"),
    ("GOVERNANCE_VOTING_PERIOD", "governance.voting_period_ms"),
    ("GOVERNANCE_MIN_DEPOSIT", "governance.min_deposit_amount"),
];

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PENUMBRA_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./penumbra-mcp.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/penumbra-mcp/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<LedgerConfig, ConfigError> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }

        let mut files: Vec<PathBuf> = Vec::new();
        if let Some(global) = Self::global_config_path()
            && global.exists()
        {
            files.push(global);
        }
        if let Some(project) = Self::project_config_path() {
            files.push(project);
        }
        if let Some(path) = config_path {
            files.push(path.to_path_buf());
        }

        Self::extract(Self::figment(&files))
    }

    /// Load defaults and environment only (for --no-config)
    pub fn load_without_files() -> Result<LedgerConfig, ConfigError> {
        Self::extract(Self::figment(&[]))
    }

    /// Build the provider stack: defaults, then `files` in ascending
    /// priority, then the environment.
    pub fn figment(files: &[PathBuf]) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in files {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_provider())
    }

    /// Extract, validate and convert into the domain configuration
    pub fn extract(figment: Figment) -> Result<LedgerConfig, ConfigError> {
        let file_config: FileConfig = figment.extract().map_err(Box::new)?;
        Ok(file_config.into_ledger_config()?)
    }

    /// `PENUMBRA_*` variables mapped onto config keys; unknown names are ignored
    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).filter_map(|key| {
            ENV_KEYS
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/penumbra-mcp/config.toml` if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("penumbra-mcp").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Describe the config file locations in priority order (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];
        let mark = |found: bool| if found { "[FOUND]" } else { "[     ]" };

        lines.push(format!("  [ENV  ] Environment: {}*", ENV_PREFIX));

        if let Some(path) = config_path {
            lines.push(format!(
                "  {} Explicit: {}",
                mark(path.exists()),
                path.display()
            ));
        }

        lines.push(format!(
            "  {} Project: ./{}",
            mark(Self::project_config_path().is_some()),
            PROJECT_CONFIG_FILE
        ));

        if let Some(path) = Self::global_config_path() {
            lines.push(format!(
                "  {} Global:  {}",
                mark(path.exists()),
                path.display()
            ));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        for line in Self::describe_sources(config_path) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_files() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::extract(ConfigLoader::figment(&[])).unwrap();
            assert_eq!(config, LedgerConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("PENUMBRA_NODE_URL", "http://node:9000");
            jail.set_env("PENUMBRA_REQUEST_TIMEOUT", "2500");
            jail.set_env("PENUMBRA_REQUEST_RETRIES", "0");
            jail.set_env("PENUMBRA_CHAIN_ID", "penumbra-1");
            jail.set_env("PENUMBRA_DEX_MAX_PRICE_IMPACT", "0.2");
            jail.set_env("PENUMBRA_GOVERNANCE_VOTING_PERIOD", "1000");

            let config = ConfigLoader::load_without_files().unwrap();
            assert_eq!(config.node.url, "http://node:9000");
            assert_eq!(config.node.timeout_ms, 2500);
            assert_eq!(config.node.retries, 0);
            assert_eq!(config.chain.chain_id, "penumbra-1");
            assert_eq!(config.dex.max_price_impact, 0.2);
            assert_eq!(config.governance.voting_period_ms, 1000);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_env_for_string_field() {
        Jail::expect_with(|jail| {
            jail.set_env("PENUMBRA_CHAIN_ID", "1234");
            jail.set_env("PENUMBRA_DEX_MIN_LIQUIDITY", "5000");
            jail.set_env("PENUMBRA_GOVERNANCE_MIN_DEPOSIT", "77");

            let config = ConfigLoader::load_without_files().unwrap();
            assert_eq!(config.chain.chain_id, "1234");
            assert_eq!(config.dex.min_liquidity_amount, "5000");
            assert_eq!(config.governance.min_deposit_amount, "77");
            Ok(())
        });
    }

    #[test]
    fn test_unknown_env_is_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("PENUMBRA_SOMETHING_ELSE", "x");
            assert!(ConfigLoader::load_without_files().is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_priority() {
        Jail::expect_with(|jail| {
            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
[node]
url = "http://from-file:1"
timeout_ms = 700

[chain]
chain_id = "file-chain"
"#,
            )?;
            jail.create_file(
                "override.toml",
                r#"
[chain]
chain_id = "override-chain"
"#,
            )?;
            jail.set_env("PENUMBRA_NODE_URL", "http://from-env:2");

            let files = vec![
                PathBuf::from(PROJECT_CONFIG_FILE),
                PathBuf::from("override.toml"),
            ];
            let config = ConfigLoader::extract(ConfigLoader::figment(&files)).unwrap();
            assert_eq!(config.node.url, "http://from-env:2");
            assert_eq!(config.node.timeout_ms, 700);
            assert_eq!(config.chain.chain_id, "override-chain");
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_discovered() {
        Jail::expect_with(|jail| {
            assert!(ConfigLoader::project_config_path().is_none());
            jail.create_file(PROJECT_CONFIG_FILE, "[chain]\nnetwork = \"devnet\"\n")?;
            assert!(ConfigLoader::project_config_path().is_some());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("PENUMBRA_REQUEST_TIMEOUT", "0");
            let err = ConfigLoader::load_without_files().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid(ConfigValidationError::InvalidTimeout)
            ));

            jail.set_env("PENUMBRA_REQUEST_TIMEOUT", "soon");
            let err = ConfigLoader::load_without_files().unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|_jail| {
            let err = ConfigLoader::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::MissingFile(_)));
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("penumbra-mcp"));
    }

    #[test]
    fn test_describe_sources_lists_explicit_file() {
        let lines = ConfigLoader::describe_sources(Some(Path::new("/tmp/custom.toml")));
        assert!(lines.iter().any(|l| l.contains("Explicit: /tmp/custom.toml")));
        assert!(lines.last().unwrap().contains("built-in defaults"));
    }
}
