//! Pro/con items and their weights.

use crate::domain::foundation::{ItemId, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Maximum length of an item title.
pub const MAX_ITEM_TITLE_LENGTH: usize = 200;

/// Maximum length of a single tag.
pub const MAX_TAG_LENGTH: usize = 50;

/// Importance of an item, an integer from 1 to 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a Weight, returning error if outside 1..=10.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "weight",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the decision an item argues for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Pro,
    Con,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Pro => "pro",
            ItemKind::Con => "con",
        }
    }
}

impl FromStr for ItemKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pro" => Ok(ItemKind::Pro),
            "con" => Ok(ItemKind::Con),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'pro' or 'con', got '{}'", other),
            )),
        }
    }
}

/// A single weighted argument in a decision list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    description: Option<String>,
    weight: Weight,
    #[serde(rename = "type")]
    kind: ItemKind,
    #[serde(default)]
    tags: Vec<String>,
}

impl Item {
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Copy of this item under a fresh id.
    pub(crate) fn with_fresh_id(&self) -> Self {
        Self {
            id: ItemId::generate(),
            ..self.clone()
        }
    }
}

/// Unvalidated item as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct ItemInput {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub weight: i64,
    pub kind: String,
    pub tags: Vec<String>,
}

impl TryFrom<ItemInput> for Item {
    type Error = ValidationError;

    fn try_from(input: ItemInput) -> Result<Self, Self::Error> {
        let id = match input.id {
            Some(raw) => ItemId::new(raw)?,
            None => ItemId::generate(),
        };

        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("item.title"));
        }
        if title.chars().count() > MAX_ITEM_TITLE_LENGTH {
            return Err(ValidationError::invalid_format(
                "item.title",
                format!("must be {} characters or less", MAX_ITEM_TITLE_LENGTH),
            ));
        }

        let description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id,
            title,
            description,
            weight: Weight::new(input.weight)?,
            kind: input.kind.parse()?,
            tags: normalize_tags(input.tags)?,
        })
    }
}

/// Drops blank tags and exact duplicates, keeping first-seen order.
fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>, ValidationError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(tags.len());
    for tag in tags {
        if tag.trim().is_empty() {
            continue;
        }
        if tag.chars().count() > MAX_TAG_LENGTH {
            return Err(ValidationError::invalid_format(
                "item.tags",
                format!("tags must be {} characters or less", MAX_TAG_LENGTH),
            ));
        }
        if seen.insert(tag.clone()) {
            out.push(tag);
        }
    }
    Ok(out)
}

/// Validates a full item sequence, rejecting duplicate ids.
pub fn validate_items(inputs: Vec<ItemInput>) -> Result<Vec<Item>, ValidationError> {
    let mut ids = HashSet::new();
    let mut items = Vec::with_capacity(inputs.len());
    for input in inputs {
        let item = Item::try_from(input)?;
        if !ids.insert(item.id.clone()) {
            return Err(ValidationError::invalid_format(
                "items",
                format!("duplicate item id '{}'", item.id),
            ));
        }
        items.push(item);
    }
    Ok(items)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: Option<&str>, weight: i64, kind: &str) -> ItemInput {
        ItemInput {
            id: id.map(String::from),
            title: "Shorter commute".to_string(),
            weight,
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn weight_accepts_bounds() {
        assert_eq!(Weight::new(1).unwrap().value(), 1);
        assert_eq!(Weight::new(10).unwrap().value(), 10);
    }

    #[test]
    fn weight_rejects_out_of_range() {
        for bad in [0, 11, -3, 1000] {
            match Weight::new(bad) {
                Err(ValidationError::OutOfRange { field, actual, .. }) => {
                    assert_eq!(field, "weight");
                    assert_eq!(actual, bad);
                }
                other => panic!("expected OutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn item_kind_rejects_unknown() {
        assert!("neutral".parse::<ItemKind>().is_err());
        assert_eq!("con".parse::<ItemKind>().unwrap(), ItemKind::Con);
    }

    #[test]
    fn item_without_id_gets_generated_one() {
        let item = Item::try_from(input(None, 5, "pro")).unwrap();
        assert!(!item.id().as_str().is_empty());
    }

    #[test]
    fn item_title_is_required() {
        let mut raw = input(Some("a"), 5, "pro");
        raw.title = "   ".to_string();
        let err = Item::try_from(raw).unwrap_err();
        assert_eq!(err.field(), "item.title");
    }

    #[test]
    fn blank_description_becomes_none() {
        let mut raw = input(Some("a"), 5, "pro");
        raw.description = Some("  ".to_string());
        assert_eq!(Item::try_from(raw).unwrap().description(), None);
    }

    #[test]
    fn tags_keep_order_and_case_but_drop_exact_duplicates() {
        let mut raw = input(Some("a"), 5, "pro");
        raw.tags = vec![
            "Money".to_string(),
            "money".to_string(),
            "Money".to_string(),
            "".to_string(),
            "time".to_string(),
        ];
        let item = Item::try_from(raw).unwrap();
        assert_eq!(item.tags(), &["Money", "money", "time"]);
    }

    #[test]
    fn validate_items_rejects_duplicate_ids() {
        let err =
            validate_items(vec![input(Some("x"), 3, "pro"), input(Some("x"), 4, "con")])
                .unwrap_err();
        assert_eq!(err.field(), "items");
    }

    #[test]
    fn validate_items_preserves_order() {
        let items =
            validate_items(vec![input(Some("b"), 3, "pro"), input(Some("a"), 4, "con")])
                .unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn item_serializes_kind_as_type() {
        let item = Item::try_from(input(Some("a"), 7, "con")).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "con");
        assert_eq!(json["weight"], 7);
    }

    #[test]
    fn fresh_id_copy_keeps_content() {
        let item = Item::try_from(input(Some("a"), 7, "con")).unwrap();
        let copy = item.with_fresh_id();
        assert_ne!(copy.id(), item.id());
        assert_eq!(copy.title(), item.title());
        assert_eq!(copy.weight(), item.weight());
    }
}
