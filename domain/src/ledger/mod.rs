//! Ledger value objects
//!
//! Documents the ledger tools return, the action model shared by the
//! transaction tools, and the fee schedule used by `estimate_fees`.
//! Nothing here talks to a node; that is the gateway's job.

pub mod action;
pub mod entities;

pub use action::{ActionKind, FeeAmount, FeeSchedule, TransactionAction};
pub use entities::{
    ActionFee, BuiltTransaction, ChainStatus, DexState, FeeBreakdown, FeeEstimate,
    GovernanceProposal, ProposalFilter, ProposalList, SimulationEffects, SimulationLog,
    SimulationReport, TradingPair, TransactionDraft, TransactionRecord, ValidatorInfo,
    ValidatorSet, decode_actions,
};
