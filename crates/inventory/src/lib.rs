//! Inventory store: named item quantities with file persistence and
//! low-stock reporting.
//!
//! Single-threaded and synchronous. All failures are absorbed into the
//! injected [`StockLog`]; see [`InventoryStore`].

pub mod codec;
pub mod log;
pub mod report;
pub mod store;
pub mod untyped;

pub use codec::{DecodeError, Stock};
pub use log::{LogRecord, MemoryLog, StockLog, TracingLog};
pub use report::REPORT_HEADER;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_PATH, InventoryStore, LoadOutcome};
