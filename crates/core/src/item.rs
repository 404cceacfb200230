use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult, ValueObject};

/// Message used whenever a name is missing or empty.
pub const NAME_REQUIRED: &str = "name required";

/// Validated item name (never empty).
///
/// Deserialization goes through the same check as [`ItemName::new`], so a
/// document with an empty `name` cannot become an `Item`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation(NAME_REQUIRED));
        }
        Ok(Self(name))
    }

    /// Validate an optional caller-provided name (absent is the same as empty).
    pub fn from_optional(name: Option<String>) -> DomainResult<Self> {
        match name {
            Some(n) => Self::new(n),
            None => Err(DomainError::validation(NAME_REQUIRED)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named record in the item collection.
///
/// Identity is assigned by the backing store and is not part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: ItemName,
}

impl Item {
    pub fn new(name: ItemName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn into_name(self) -> ItemName {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_name_is_rejected() {
        let err = ItemName::new("").unwrap_err();
        assert_eq!(err, DomainError::validation(NAME_REQUIRED));
    }

    #[test]
    fn absent_name_is_rejected() {
        assert!(ItemName::from_optional(None).is_err());
        assert!(ItemName::from_optional(Some(String::new())).is_err());
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let name = ItemName::new("  ").unwrap();
        assert_eq!(name.as_str(), "  ");
    }

    #[test]
    fn item_serializes_as_name_only() {
        let item = Item::new(ItemName::new("apple").unwrap());
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "name": "apple" }));
    }

    #[test]
    fn deserializing_empty_name_fails() {
        let res: Result<Item, _> = serde_json::from_value(json!({ "name": "" }));
        assert!(res.is_err());

        let res: Result<Item, _> = serde_json::from_value(json!({}));
        assert!(res.is_err());
    }

    #[test]
    fn extra_document_fields_are_ignored() {
        let item: Item = serde_json::from_value(json!({ "name": "pear", "colour": "green" })).unwrap();
        assert_eq!(item.name().as_str(), "pear");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-empty string is a valid name and survives unchanged.
            #[test]
            fn non_empty_names_are_accepted(name in ".{1,64}") {
                let parsed = ItemName::new(name.clone()).unwrap();
                prop_assert_eq!(parsed.as_str(), name.as_str());
            }

            /// Property: serde and the constructor agree on validity.
            #[test]
            fn serde_matches_constructor(name in ".{0,16}") {
                let via_ctor = ItemName::new(name.clone()).is_ok();
                let via_serde = serde_json::from_value::<ItemName>(serde_json::Value::String(name)).is_ok();
                prop_assert_eq!(via_ctor, via_serde);
            }
        }
    }
}
