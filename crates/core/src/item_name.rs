use std::borrow::Borrow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{StockError, StockResult};

/// Name of a stocked item. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(name: impl Into<String>) -> StockResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StockError::invalid_item_name(format!("{name:?} (must be non-empty)")));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ItemName::parse(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        assert!(matches!(ItemName::parse(""), Err(StockError::InvalidItemName(_))));
        assert!(matches!(ItemName::parse("   "), Err(StockError::InvalidItemName(_))));
    }

    #[test]
    fn keeps_name_verbatim() {
        let name = ItemName::parse(" apple ").unwrap();
        assert_eq!(name.as_str(), " apple ");
    }

    #[test]
    fn deserialize_validates() {
        let ok: ItemName = serde_json::from_str("\"banana\"").unwrap();
        assert_eq!(ok.as_str(), "banana");
        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
    }
}
