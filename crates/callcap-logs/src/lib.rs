//! Call transcript records and the loaders that feed the metrics engine

mod error;
mod io;
mod rawlog;
mod types;

pub use error::{LogError, Result};
pub use io::{load_calls, parse_calls, write_json_atomic};
pub use rawlog::parse_raw_log;
pub use types::{CallRecord, CallSummary, Speaker, Turn};
