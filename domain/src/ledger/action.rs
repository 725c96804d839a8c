//! Transaction actions and the fee schedule
//!
//! Fee arithmetic is done in integer micro-units (1 unit = 1_000_000
//! micro-units) so that sums are exact; amounts are rendered with six
//! decimals only at the edge.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::entities::{ActionFee, FeeBreakdown, FeeEstimate};

const MICROS_PER_UNIT: u64 = 1_000_000;

/// Closed set of action kinds the ledger knows how to price.
///
/// Anything else is kept as [`ActionKind::Unrecognized`] with its original
/// spelling, so it can still be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Spend,
    Output,
    Swap,
    Delegate,
    Undelegate,
    Unrecognized(String),
}

impl ActionKind {
    /// Exact, case-sensitive parse
    pub fn parse(s: &str) -> Self {
        match s {
            "spend" => ActionKind::Spend,
            "output" => ActionKind::Output,
            "swap" => ActionKind::Swap,
            "delegate" => ActionKind::Delegate,
            "undelegate" => ActionKind::Undelegate,
            other => ActionKind::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Spend => "spend",
            ActionKind::Output => "output",
            ActionKind::Swap => "swap",
            ActionKind::Delegate => "delegate",
            ActionKind::Undelegate => "undelegate",
            ActionKind::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ActionKind::Unrecognized(_))
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fee amount in micro-units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeeAmount(u64);

impl FeeAmount {
    pub const ZERO: FeeAmount = FeeAmount(0);

    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    pub const fn micros(&self) -> u64 {
        self.0
    }
}

impl Add for FeeAmount {
    type Output = FeeAmount;

    fn add(self, rhs: FeeAmount) -> FeeAmount {
        FeeAmount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for FeeAmount {
    fn sum<I: Iterator<Item = FeeAmount>>(iter: I) -> FeeAmount {
        iter.fold(FeeAmount::ZERO, Add::add)
    }
}

/// Six-decimal rendering, e.g. `0.002500`
impl fmt::Display for FeeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:06}",
            self.0 / MICROS_PER_UNIT,
            self.0 % MICROS_PER_UNIT
        )
    }
}

impl Serialize for FeeAmount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One action of a transaction, as submitted by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionAction {
    /// Action kind as written by the client
    #[serde(rename = "type")]
    pub kind: String,
    /// Action-specific parameters, opaque to the server
    #[serde(default)]
    pub params: Value,
}

impl TransactionAction {
    pub fn new(kind: impl Into<String>, params: Value) -> Self {
        Self {
            kind: kind.into(),
            params,
        }
    }

    pub fn action_kind(&self) -> ActionKind {
        ActionKind::parse(&self.kind)
    }
}

/// Base fee plus a fixed per-kind fee table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    pub base_fee: FeeAmount,
    pub spend: FeeAmount,
    pub output: FeeAmount,
    pub swap: FeeAmount,
    pub delegate: FeeAmount,
    pub undelegate: FeeAmount,
    /// Charged for kinds outside the table
    pub unrecognized: FeeAmount,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            base_fee: FeeAmount::from_micros(1_000),
            spend: FeeAmount::from_micros(500),
            output: FeeAmount::from_micros(300),
            swap: FeeAmount::from_micros(1_000),
            delegate: FeeAmount::from_micros(800),
            undelegate: FeeAmount::from_micros(800),
            unrecognized: FeeAmount::ZERO,
        }
    }
}

impl FeeSchedule {
    pub fn fee_for(&self, kind: &ActionKind) -> FeeAmount {
        match kind {
            ActionKind::Spend => self.spend,
            ActionKind::Output => self.output,
            ActionKind::Swap => self.swap,
            ActionKind::Delegate => self.delegate,
            ActionKind::Undelegate => self.undelegate,
            ActionKind::Unrecognized(_) => self.unrecognized,
        }
    }

    /// `base + Σ fee(kind)`, with a per-action breakdown in input order
    pub fn estimate(&self, actions: &[TransactionAction]) -> FeeEstimate {
        let action_fees: Vec<ActionFee> = actions
            .iter()
            .map(|action| ActionFee {
                kind: action.kind.clone(),
                fee: self.fee_for(&action.action_kind()),
            })
            .collect();

        let total = self.base_fee + action_fees.iter().map(|a| a.fee).sum::<FeeAmount>();

        FeeEstimate {
            estimated_fee: total,
            breakdown: FeeBreakdown {
                base_fee: self.base_fee,
                action_fees,
            },
        }
    }
}
