//! CLI entrypoint for penumbra-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection, then serves MCP on stdin/stdout until the
//! client disconnects or Ctrl-C arrives.

use anyhow::{Context, Result};
use clap::Parser;
use penumbra_application::{DispatchParams, ToolDispatcher, ledger_handlers};
use penumbra_domain::config::LedgerConfig;
use penumbra_domain::tool::ledger_tool_spec;
use penumbra_infrastructure::{
    ConfigLoader, JsonlCallLogger, McpServer, PlaceholderLedgerGateway, StdioTransport,
};
use penumbra_presentation::{CatalogFormatter, Cli, ConsoleFormatter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr; stdout carries the protocol
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let (writer, log_guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    if cli.list_tools {
        let spec = ledger_tool_spec();
        let tools: Vec<_> = spec.all().collect();
        println!("{}", ConsoleFormatter.format(&tools, cli.output_format()));
        return Ok(());
    }

    let shutdown = CancellationToken::new();
    let outcome = serve(&cli, shutdown.clone()).await;
    if let Err(e) = &outcome {
        error!("{:#}", e);
    }

    let interrupted = shutdown.is_cancelled();
    drop(log_guard);

    // The blocking stdin reader cannot be interrupted; leave without
    // waiting for it once a signal stopped the loop.
    if outcome.is_ok() && interrupted {
        std::process::exit(0);
    }
    outcome
}

async fn serve(cli: &Cli, shutdown: CancellationToken) -> Result<()> {
    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .context("Failed to load configuration")?;

    info!(
        network = %config.chain.network,
        chain_id = %config.chain.chain_id,
        node = %config.node.url,
        "Starting penumbra-mcp"
    );

    let dispatcher = build_dispatcher(Arc::new(config), cli)?;
    let server = McpServer::new(Arc::new(dispatcher));

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C");
            signal_token.cancel();
        }
    });

    server
        .run(StdioTransport::stdio(), shutdown)
        .await
        .context("MCP server stopped with an error")
}

// === Dependency Injection ===
fn build_dispatcher(config: Arc<LedgerConfig>, cli: &Cli) -> Result<ToolDispatcher> {
    let gateway = Arc::new(PlaceholderLedgerGateway::new(config.clone()));
    let params = DispatchParams::from_node(&config.node);

    let mut dispatcher = ToolDispatcher::new(ledger_tool_spec(), ledger_handlers(gateway), params)
        .context("Failed to register tool handlers")?;

    if let Some(path) = &cli.call_log {
        match JsonlCallLogger::open(path) {
            Some(logger) => {
                info!("Writing call log to {}", path.display());
                dispatcher = dispatcher.with_call_logger(Arc::new(logger));
            }
            None => warn!("Call log disabled: could not open {}", path.display()),
        }
    }

    Ok(dispatcher)
}
