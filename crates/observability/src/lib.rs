//! Logging setup shared by stockroom binaries.

/// Initialize process-wide logging with the format chosen by
/// `STOCKROOM_LOG_FORMAT` (`text` by default, or `json`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;
