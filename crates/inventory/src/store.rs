//! The inventory store: item quantities, mutation guards, persistence.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;

use stockroom_core::{ItemName, StockError, StockResult};

use crate::codec::{self, Stock};
use crate::log::{StockLog, TracingLog};

/// Default location of the inventory file.
pub const DEFAULT_PATH: &str = "inventory.json";

/// Default cut-off for [`InventoryStore::low_stock`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Result of [`InventoryStore::load`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the table.
    Loaded,
    /// No file at the path; the table was kept.
    Missing,
    /// The file exists but could not be read or parsed; the table was kept.
    Failed,
}

impl LoadOutcome {
    /// Whether saving back to the same path would not clobber data we never read.
    pub fn safe_to_overwrite(self) -> bool {
        matches!(self, LoadOutcome::Loaded | LoadOutcome::Missing)
    }
}

/// In-memory item → quantity table.
///
/// Operations never return errors: failures are sent to the log sink `L` and
/// the operation becomes a no-op. Quantities that reach zero or below on
/// [`remove`](Self::remove) drop the item; [`add`](Self::add) stores whatever
/// total results, including zero and negative values.
#[derive(Debug)]
pub struct InventoryStore<L = TracingLog> {
    stock: Stock,
    log: L,
}

impl InventoryStore<TracingLog> {
    pub fn new() -> Self {
        Self::with_log(TracingLog)
    }
}

impl Default for InventoryStore<TracingLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: StockLog> InventoryStore<L> {
    /// Empty store reporting to `log`.
    pub fn with_log(log: L) -> Self {
        Self {
            stock: Stock::new(),
            log,
        }
    }

    /// Store initialized from `path` (empty if the file is missing or bad).
    pub fn open(path: impl AsRef<Path>, log: L) -> Self {
        let mut store = Self::with_log(log);
        store.load(path);
        store
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Add `quantity` of `item`, appending a timestamped line to `audit` if given.
    ///
    /// Returns `false` when the call was rejected and the table is unchanged.
    pub fn add(&mut self, item: &str, quantity: i64, audit: Option<&mut Vec<String>>) -> bool {
        match self.try_add(item, quantity) {
            Ok(total) => {
                if let Some(audit) = audit {
                    audit.push(format!(
                        "{}: Added {quantity} of {item}",
                        Utc::now().format("%Y-%m-%d %H:%M:%S%.6f")
                    ));
                }
                self.log
                    .info(format!("Added {quantity} of {item} (total now {total})"));
                true
            }
            Err(err) => {
                self.log.failure(&err);
                false
            }
        }
    }

    fn try_add(&mut self, item: &str, quantity: i64) -> StockResult<i64> {
        let name = ItemName::parse(item)?;
        let current = self.stock.get(item).copied().unwrap_or(0);
        let total = current.checked_add(quantity).ok_or_else(|| {
            StockError::invalid_quantity(format!("adding {quantity} to {item} overflows"))
        })?;
        self.stock.insert(name, total);
        Ok(total)
    }

    /// Take `quantity` of `item` out; the item is dropped once it reaches zero.
    pub fn remove(&mut self, item: &str, quantity: i64) -> bool {
        match self.try_remove(item, quantity) {
            Ok(None) => self.log.info(format!("Removed {item} from inventory")),
            Ok(Some(remaining)) => self.log.info(format!(
                "Decreased {item} by {quantity} (remaining: {remaining})"
            )),
            Err(err) => {
                self.log.failure(&err);
                return false;
            }
        }
        true
    }

    fn try_remove(&mut self, item: &str, quantity: i64) -> StockResult<Option<i64>> {
        ItemName::parse(item)?;
        let Some(current) = self.stock.get_mut(item) else {
            return Err(StockError::item_not_found(item));
        };
        let remaining = current.checked_sub(quantity).ok_or_else(|| {
            StockError::invalid_quantity(format!("removing {quantity} from {item} overflows"))
        })?;

        if remaining <= 0 {
            self.stock.shift_remove(item);
            Ok(None)
        } else {
            *current = remaining;
            Ok(Some(remaining))
        }
    }

    /// Stored quantity of `item`; 0 when absent (or when the name is invalid).
    pub fn quantity(&self, item: &str) -> i64 {
        if let Err(err) = ItemName::parse(item) {
            self.log.failure(&err);
            return 0;
        }
        self.stock.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Items and quantities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.stock.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Replace the in-memory table with the contents of `path`.
    ///
    /// A missing file is a warning and leaves the table as it was; unreadable
    /// or malformed files are errors and also leave it untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();
        match read_stock(path) {
            Ok(stock) => {
                self.stock = stock;
                self.log.info(format!(
                    "Loaded {} item(s) from {}",
                    self.stock.len(),
                    path.display()
                ));
                LoadOutcome::Loaded
            }
            Err(err) => {
                self.log.failure(&err);
                match err {
                    StockError::FileNotFound(_) => LoadOutcome::Missing,
                    _ => LoadOutcome::Failed,
                }
            }
        }
    }

    /// Write the table to `path`. Failures are logged, never raised.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match write_stock(path, &self.stock) {
            Ok(()) => self.log.info(format!("Saved data to {}", path.display())),
            Err(err) => self.log.failure(&err),
        }
    }

    #[cfg(test)]
    pub(crate) fn stock(&self) -> &Stock {
        &self.stock
    }
}

fn read_stock(path: &Path) -> StockResult<Stock> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StockError::file_not_found(path));
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(StockError::malformed(path, e));
        }
        Err(e) => return Err(StockError::io(path, e)),
    };
    codec::decode(&text).map_err(|e| StockError::malformed(path, e))
}

fn write_stock(path: &Path, stock: &Stock) -> StockResult<()> {
    let bytes = codec::encode(stock).map_err(|e| StockError::io(path, e))?;
    fs::write(path, bytes).map_err(|e| StockError::io(path, e))
}
