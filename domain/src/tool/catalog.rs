//! The ledger tool catalog
//!
//! Static, ordered list of every tool the server exposes. The listing is the
//! contract clients see; the dispatcher builds its name index from the same
//! [`ToolSpec`], so a tool is callable if and only if it is listed here.
//!
//! | Tool | Required | Failure context |
//! |------|----------|-----------------|
//! | `get_validator_set` | - | fetching validator set |
//! | `get_chain_status` | - | fetching chain status |
//! | `get_transaction` | `hash` | fetching transaction |
//! | `get_dex_state` | - | fetching DEX state |
//! | `get_governance_proposals` | - | fetching governance proposals |
//! | `build_transaction` | `actions` | building transaction |
//! | `estimate_fees` | `actions` | estimating fees |
//! | `simulate_transaction` | `transaction` | simulating transaction |

use super::entities::{InputSchema, PropertySchema, ToolDefinition, ToolSpec};

pub const GET_VALIDATOR_SET: &str = "get_validator_set";
pub const GET_CHAIN_STATUS: &str = "get_chain_status";
pub const GET_TRANSACTION: &str = "get_transaction";
pub const GET_DEX_STATE: &str = "get_dex_state";
pub const GET_GOVERNANCE_PROPOSALS: &str = "get_governance_proposals";
pub const BUILD_TRANSACTION: &str = "build_transaction";
pub const ESTIMATE_FEES: &str = "estimate_fees";
pub const SIMULATE_TRANSACTION: &str = "simulate_transaction";

/// Action kinds advertised by `build_transaction`
pub const ACTION_KINDS: [&str; 5] = ["spend", "output", "swap", "delegate", "undelegate"];

/// Governance status filters
pub const PROPOSAL_FILTERS: [&str; 3] = ["active", "completed", "all"];

/// Build the full ledger catalog in declaration order
pub fn ledger_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(validator_set_definition())
        .register(chain_status_definition())
        .register(transaction_definition())
        .register(dex_state_definition())
        .register(governance_proposals_definition())
        .register(build_transaction_definition())
        .register(estimate_fees_definition())
        .register(simulate_transaction_definition())
}

fn validator_set_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_VALIDATOR_SET,
        "Get the current validator set information",
    )
    .with_failure_context("fetching validator set")
}

fn chain_status_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_CHAIN_STATUS,
        "Get current chain status including block height and chain ID",
    )
    .with_failure_context("fetching chain status")
}

fn transaction_definition() -> ToolDefinition {
    ToolDefinition::new(GET_TRANSACTION, "Get details of a specific transaction")
        .with_input_schema(InputSchema::object().with_required(
            "hash",
            PropertySchema::string().with_description("Transaction hash"),
        ))
        .with_failure_context("fetching transaction")
}

fn dex_state_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_DEX_STATE,
        "Get current DEX state including latest batch auction results",
    )
    .with_failure_context("fetching DEX state")
}

fn governance_proposals_definition() -> ToolDefinition {
    ToolDefinition::new(GET_GOVERNANCE_PROPOSALS, "Get active governance proposals")
        .with_input_schema(
            InputSchema::object().with_property(
                "status",
                PropertySchema::string()
                    .with_enum(PROPOSAL_FILTERS)
                    .with_description("Filter proposals by status")
                    .with_default("active"),
            ),
        )
        .with_failure_context("fetching governance proposals")
}

/// Element schema shared by the two action-list tools
fn action_item_schema(typed: bool) -> InputSchema {
    let kind = PropertySchema::string().with_description("Type of action");
    let kind = if typed { kind.with_enum(ACTION_KINDS) } else { kind };

    InputSchema::object()
        .with_required("type", kind)
        .with_required(
            "params",
            PropertySchema::object().with_description("Action-specific parameters"),
        )
}

fn build_transaction_definition() -> ToolDefinition {
    ToolDefinition::new(
        BUILD_TRANSACTION,
        "Create and sign transactions with various actions",
    )
    .with_input_schema(
        InputSchema::object()
            .with_required(
                "actions",
                PropertySchema::array_of(action_item_schema(true)).with_min_items(1),
            )
            .with_property(
                "memo",
                PropertySchema::string().with_description("Optional transaction memo"),
            )
            .with_property(
                "expiryHeight",
                PropertySchema::number()
                    .with_description("Optional block height at which transaction expires"),
            ),
    )
    .with_failure_context("building transaction")
}

fn estimate_fees_definition() -> ToolDefinition {
    ToolDefinition::new(
        ESTIMATE_FEES,
        "Estimate transaction fees based on action types",
    )
    .with_input_schema(InputSchema::object().with_required(
        "actions",
        PropertySchema::array_of(action_item_schema(false)).with_min_items(1),
    ))
    .with_failure_context("estimating fees")
}

fn simulate_transaction_definition() -> ToolDefinition {
    ToolDefinition::new(
        SIMULATE_TRANSACTION,
        "Simulate transaction execution for validation",
    )
    .with_input_schema(InputSchema::object().with_required(
        "transaction",
        PropertySchema::string().with_description("Serialized transaction"),
    ))
    .with_failure_context("simulating transaction")
}
