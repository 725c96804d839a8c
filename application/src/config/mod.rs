//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DispatchParams`]: handler invocation policy (timeout, retries)

pub mod dispatch_params;

pub use dispatch_params::DispatchParams;
