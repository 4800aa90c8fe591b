//! `stockroom-core` — shared building blocks for the stock store.
//!
//! This crate contains **pure** primitives (no IO): the error taxonomy, the
//! severity scale used by log sinks, and the validated item name.

pub mod error;
pub mod item_name;

pub use error::{Severity, StockError, StockResult};
pub use item_name::ItemName;
