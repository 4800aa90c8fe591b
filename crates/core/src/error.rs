//! Stock error model.

use std::path::Path;

use thiserror::Error;

/// Result type used across the stock store.
pub type StockResult<T> = Result<T, StockError>;

/// Severity of a log record emitted by the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        })
    }
}

/// Store-level failure.
///
/// None of these escape the store's public operations: each one is routed to
/// the injected log sink at its [`Severity`] and the operation degrades to a
/// no-op (or a neutral return value).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// The item identifier was not text, or was empty.
    #[error("invalid item name: {0}")]
    InvalidItemName(String),

    /// A quantity or threshold was not an integer (or overflowed).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Removal targeted an item that is not stocked.
    #[error("cannot remove {0}: item not found")]
    ItemNotFound(String),

    /// The inventory file does not exist.
    #[error("{0} not found, starting with empty inventory")]
    FileNotFound(String),

    /// The inventory file could not be parsed or had the wrong shape.
    #[error("invalid data in {path}: {reason}")]
    MalformedData { path: String, reason: String },

    /// Reading or writing the inventory file failed.
    #[error("i/o error on {path}: {reason}")]
    Io { path: String, reason: String },
}

impl StockError {
    pub fn invalid_item_name(msg: impl Into<String>) -> Self {
        Self::InvalidItemName(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn file_not_found(path: &Path) -> Self {
        Self::FileNotFound(path.display().to_string())
    }

    pub fn malformed(path: &Path, reason: impl ToString) -> Self {
        Self::MalformedData {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: &Path, reason: impl ToString) -> Self {
        Self::Io {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Severity this failure is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            StockError::ItemNotFound(_) | StockError::FileNotFound(_) => Severity::Warning,
            StockError::InvalidItemName(_)
            | StockError::InvalidQuantity(_)
            | StockError::MalformedData { .. }
            | StockError::Io { .. } => Severity::Error,
        }
    }

    /// Stable machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            StockError::InvalidItemName(_) => "invalid_item_name",
            StockError::InvalidQuantity(_) => "invalid_quantity",
            StockError::ItemNotFound(_) => "item_not_found",
            StockError::FileNotFound(_) => "file_not_found",
            StockError::MalformedData { .. } => "malformed_data",
            StockError::Io { .. } => "io",
        }
    }
}
