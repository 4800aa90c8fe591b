//! JSON encoding of the inventory file.
//!
//! The file is a single JSON object of item name to quantity, written with
//! 4-space indentation and keys in insertion order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use stockroom_core::ItemName;

pub type Stock = IndexMap<ItemName, i64>;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid item name {0:?}")]
    BadName(String),

    #[error("quantity for {item} is not an integer: {value}")]
    BadQuantity { item: String, value: JsonValue },
}

/// Parse file contents into a stock table.
///
/// Every value is coerced to an integer; one bad entry rejects the whole file.
pub fn decode(text: &str) -> Result<Stock, DecodeError> {
    let value: JsonValue = serde_json::from_str(text)?;
    let JsonValue::Object(entries) = value else {
        return Err(DecodeError::NotAnObject(type_name(&value)));
    };

    let mut stock = Stock::with_capacity(entries.len());
    for (key, raw) in entries {
        let name = ItemName::parse(key.clone()).map_err(|_| DecodeError::BadName(key.clone()))?;
        let qty = coerce_quantity(&raw).ok_or_else(|| DecodeError::BadQuantity {
            item: key,
            value: raw,
        })?;
        stock.insert(name, qty);
    }
    Ok(stock)
}

/// Serialize a stock table as indented JSON.
pub fn encode(stock: &Stock) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(64 + stock.len() * 24);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    stock.serialize(&mut ser)?;
    out.push(b'\n');
    Ok(out)
}

/// Lenient integer coercion for persisted values.
///
/// Accepts integers, finite floats (truncated toward zero), booleans, and
/// strings holding a base-10 integer. Anything else, or anything outside the
/// `i64` range, yields `None`.
pub fn coerce_quantity(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            let t = f.trunc();
            (f.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
        }),
        JsonValue::Bool(b) => Some(i64::from(*b)),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

pub(crate) fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name(s: &str) -> ItemName {
        ItemName::parse(s).unwrap()
    }

    #[test]
    fn encode_uses_four_space_indent_in_insertion_order() {
        let mut stock = Stock::new();
        stock.insert(name("pear"), 3);
        stock.insert(name("apple"), 7);

        let text = String::from_utf8(encode(&stock).unwrap()).unwrap();
        assert_eq!(text, "{\n    \"pear\": 3,\n    \"apple\": 7\n}\n");
    }

    #[test]
    fn encode_empty_table() {
        let text = String::from_utf8(encode(&Stock::new()).unwrap()).unwrap();
        assert_eq!(text, "{}\n");
    }

    #[test]
    fn decode_keeps_file_order() {
        let stock = decode(r#"{"zucchini": 1, "apple": 2, "mango": 3}"#).unwrap();
        let keys: Vec<&str> = stock.keys().map(ItemName::as_str).collect();
        assert_eq!(keys, ["zucchini", "apple", "mango"]);
    }

    #[test]
    fn decode_coerces_values() {
        let stock = decode(r#"{"a": "12", "b": 2.9, "c": -1.5, "d": true}"#).unwrap();
        assert_eq!(stock["a"], 12);
        assert_eq!(stock["b"], 2);
        assert_eq!(stock["c"], -1);
        assert_eq!(stock["d"], 1);
    }

    #[test]
    fn decode_rejects_non_object() {
        let err = decode("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject("array")));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("{not json"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn decode_rejects_non_numeric_value() {
        let err = decode(r#"{"apple": "lots"}"#).unwrap_err();
        match err {
            DecodeError::BadQuantity { item, value } => {
                assert_eq!(item, "apple");
                assert_eq!(value, json!("lots"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_blank_key() {
        assert!(matches!(decode(r#"{"": 1}"#), Err(DecodeError::BadName(_))));
    }

    #[test]
    fn coerce_rejects_out_of_range() {
        assert_eq!(coerce_quantity(&json!(1e300)), None);
        assert_eq!(coerce_quantity(&json!(u64::MAX)), None);
        assert_eq!(coerce_quantity(&json!(null)), None);
        assert_eq!(coerce_quantity(&json!("1.5")), None);
        assert_eq!(coerce_quantity(&json!(" 7 ")), Some(7));
    }
}
