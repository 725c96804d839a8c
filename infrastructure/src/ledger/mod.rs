//! Ledger gateway adapters
//!
//! [`PlaceholderLedgerGateway`] implements the
//! [`LedgerGateway`](penumbra_application::LedgerGateway) port with fixed
//! documents parameterized by [`LedgerConfig`](penumbra_domain::LedgerConfig).
//! It never touches the network.

mod placeholder;

pub use placeholder::PlaceholderLedgerGateway;
