//! Item catalog.
//!
//! The catalog is the ordered list of items the search chooses from. The
//! order is significant: gene `i` of every chromosome refers to item `i`.
//!
//! With the `serde` feature the catalog can be loaded from a JSON document
//! of the form:
//!
//! ```json
//! { "items": [ { "name": "tent", "weight": 5, "value": 9 } ] }
//! ```

use crate::error::{Error, Result};

/// A single item that may be placed in the knapsack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// Validated, immutable list of items.
///
/// Every weight and value is finite and non-negative. An empty catalog is
/// representable; the engine rejects it at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CatalogDocument {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Builds a catalog, rejecting negative or non-finite weights and values.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        for (index, item) in items.iter().enumerate() {
            check_number(index, "weight", item.weight)?;
            check_number(index, "value", item.value)?;
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item values: the best fitness any chromosome could reach.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|item| item.value).sum()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// Parses a JSON document with a top-level `items` array.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
        Self::new(doc.items)
    }

    /// Parses a JSON catalog from any reader.
    #[cfg(feature = "serde")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let doc: CatalogDocument =
            serde_json::from_reader(reader).map_err(|e| Error::Parse(e.to_string()))?;
        Self::new(doc.items)
    }

    /// Reads and parses a JSON catalog file.
    #[cfg(feature = "serde")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

fn check_number(index: usize, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidItem {
            index,
            reason: format!("{field} must be a finite non-negative number, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("map", 2.0, 3.0),
            Item::new("compass", 3.0, 4.0),
            Item::new("water", 4.0, 5.0),
        ]
    }

    #[test]
    fn test_new_preserves_order() {
        let catalog = ItemCatalog::new(sample_items()).unwrap();
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["map", "compass", "water"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_totals() {
        let catalog = ItemCatalog::new(sample_items()).unwrap();
        assert!((catalog.total_value() - 12.0).abs() < 1e-12);
        assert!((catalog.total_weight() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_catalog_is_representable() {
        let catalog = ItemCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_value(), 0.0);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut items = sample_items();
        items[1].weight = -1.0;
        match ItemCatalog::new(items) {
            Err(Error::InvalidItem { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidItem, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_nan_value() {
        let mut items = sample_items();
        items[2].value = f64::NAN;
        assert!(matches!(
            ItemCatalog::new(items),
            Err(Error::InvalidItem { index: 2, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "items": [
                { "name": "tent", "weight": 5, "value": 9 },
                { "name": "stove", "weight": 1.5, "value": 2 }
            ]
        }"#;
        let catalog = ItemCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0], Item::new("tent", 5.0, 9.0));
        assert_eq!(catalog.items()[1].weight, 1.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_missing_items_key() {
        let err = ItemCatalog::from_json_str(r#"{ "things": [] }"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "got {err:?}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_missing_field() {
        let json = r#"{ "items": [ { "name": "tent", "weight": 5 } ] }"#;
        assert!(matches!(
            ItemCatalog::from_json_str(json),
            Err(Error::Parse(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_negative_value() {
        let json = r#"{ "items": [ { "name": "tent", "weight": 5, "value": -1 } ] }"#;
        assert!(matches!(
            ItemCatalog::from_json_str(json),
            Err(Error::InvalidItem { index: 0, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_path_missing_file() {
        let err = ItemCatalog::from_path("/nonexistent/knapsack.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
