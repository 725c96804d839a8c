//! Logging infrastructure: structured call logging.
//!
//! Provides [`JsonlCallLogger`], a JSONL file writer that implements
//! the [`CallLogger`](penumbra_application::CallLogger) port.

mod jsonl_call_logger;

pub use jsonl_call_logger::JsonlCallLogger;
