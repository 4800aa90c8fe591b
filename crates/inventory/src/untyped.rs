//! Entry points for values that arrive without static types.
//!
//! Command-line arguments and other loosely-typed callers hand the store
//! JSON values. These wrappers check that item names are strings and that
//! quantities are integers before delegating to the typed operations; every
//! failed check is logged and the call becomes a no-op.

use serde_json::Value as JsonValue;

use stockroom_core::{StockError, StockResult};

use crate::codec::type_name;
use crate::log::StockLog;
use crate::store::InventoryStore;

fn item_of(value: &JsonValue) -> StockResult<&str> {
    value.as_str().ok_or_else(|| {
        StockError::invalid_item_name(format!("{value} (must be a string, got {})", type_name(value)))
    })
}

fn integer_of(value: &JsonValue, what: &str) -> StockResult<i64> {
    value.as_i64().ok_or_else(|| {
        StockError::invalid_quantity(format!("{what}: {value} (must be an integer)"))
    })
}

impl<L: StockLog> InventoryStore<L> {
    /// [`add`](Self::add) for untyped input. Both arguments are checked, so
    /// a call with a bad name and a bad quantity logs two errors.
    pub fn add_value(&mut self, item: &JsonValue, quantity: &JsonValue, audit: Option<&mut Vec<String>>) -> bool {
        let name = item_of(item);
        let qty = integer_of(quantity, &format!("quantity for {item}"));
        match (name, qty) {
            (Ok(name), Ok(qty)) => self.add(name, qty, audit),
            (name, qty) => self.log_rejections(name.err(), qty.err()),
        }
    }

    /// [`remove`](Self::remove) for untyped input.
    pub fn remove_value(&mut self, item: &JsonValue, quantity: &JsonValue) -> bool {
        let name = item_of(item);
        let qty = integer_of(quantity, &format!("quantity for {item}"));
        match (name, qty) {
            (Ok(name), Ok(qty)) => self.remove(name, qty),
            (name, qty) => self.log_rejections(name.err(), qty.err()),
        }
    }

    /// [`quantity`](Self::quantity) for untyped input; 0 if `item` is not a string.
    pub fn quantity_of_value(&self, item: &JsonValue) -> i64 {
        match item_of(item) {
            Ok(name) => self.quantity(name),
            Err(err) => {
                self.log().failure(&err);
                0
            }
        }
    }

    /// [`low_stock`](Self::low_stock) for untyped input; empty if `threshold`
    /// is not an integer.
    pub fn low_stock_value(&self, threshold: &JsonValue) -> Vec<String> {
        match integer_of(threshold, "threshold") {
            Ok(threshold) => self.low_stock(threshold),
            Err(err) => {
                self.log().failure(&err);
                Vec::new()
            }
        }
    }

    fn log_rejections(&self, name: Option<StockError>, qty: Option<StockError>) -> bool {
        for err in name.iter().chain(qty.iter()) {
            self.log().failure(err);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stockroom_core::Severity;

    use crate::log::MemoryLog;
    use crate::store::InventoryStore;

    #[test]
    fn bad_name_and_bad_quantity_log_two_errors() {
        let log = MemoryLog::new();
        let mut s = InventoryStore::with_log(&log);
        let mut audit = Vec::new();
        assert!(!s.add_value(&json!(123), &json!("ten"), Some(&mut audit)));

        assert!(s.is_empty());
        assert!(audit.is_empty());
        assert_eq!(log.kinds(), ["invalid_item_name", "invalid_quantity"]);
        assert_eq!(log.at(Severity::Error).len(), 2);
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let log = MemoryLog::new();
        let mut s = InventoryStore::with_log(&log);
        s.add_value(&json!("apple"), &json!(2.5), None);
        s.remove_value(&json!("apple"), &json!("1"));
        assert!(s.is_empty());
        assert_eq!(log.kinds(), ["invalid_quantity", "invalid_quantity"]);
    }

    #[test]
    fn valid_values_delegate() {
        let log = MemoryLog::new();
        let mut s = InventoryStore::with_log(&log);
        s.add_value(&json!("apple"), &json!(10), None);
        s.remove_value(&json!("apple"), &json!(3));
        assert_eq!(s.quantity_of_value(&json!("apple")), 7);
        assert!(log.kinds().is_empty());
    }

    #[test]
    fn quantity_of_non_string_is_zero() {
        let log = MemoryLog::new();
        let s = InventoryStore::with_log(&log);
        assert_eq!(s.quantity_of_value(&json!(["apple"])), 0);
        assert_eq!(log.kinds(), ["invalid_item_name"]);
    }

    #[test]
    fn low_stock_with_bad_threshold_is_empty() {
        let log = MemoryLog::new();
        let mut s = InventoryStore::with_log(&log);
        s.add("banana", 1, None);
        assert!(s.low_stock_value(&json!("five")).is_empty());
        assert_eq!(s.low_stock_value(&json!(5)), ["banana"]);
        assert_eq!(log.kinds(), ["invalid_quantity"]);
    }
}
