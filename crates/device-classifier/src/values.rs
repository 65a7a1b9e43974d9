//! Per-category value mapping
//!
//! A [`CategoryValues`] holds an optional value for each category. Missing
//! entries are resolved through each category's fallback order when a value
//! is selected.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Optional value per device category
///
/// ```
/// use device_classifier::{Category, CategoryValues};
///
/// let font_size = CategoryValues::new().compact(14).regular(16).max(20);
/// assert_eq!(font_size.resolve(Category::Plus), Some(&20));
/// assert_eq!(font_size.resolve(Category::Compact), Some(&14));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CategoryValues<T> {
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    compact: Option<T>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    regular: Option<T>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    plus: Option<T>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    max: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Default for CategoryValues<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CategoryValues<T> {
    /// Empty mapping
    pub fn new() -> Self {
        Self {
            compact: None,
            regular: None,
            plus: None,
            max: None,
        }
    }

    /// Mapping with a value for every category
    pub fn all(compact: T, regular: T, plus: T, max: T) -> Self {
        Self {
            compact: Some(compact),
            regular: Some(regular),
            plus: Some(plus),
            max: Some(max),
        }
    }

    /// Set the compact value
    pub fn compact(mut self, value: T) -> Self {
        self.compact = Some(value);
        self
    }

    /// Set the regular value
    pub fn regular(mut self, value: T) -> Self {
        self.regular = Some(value);
        self
    }

    /// Set the plus value
    pub fn plus(mut self, value: T) -> Self {
        self.plus = Some(value);
        self
    }

    /// Set the max value
    pub fn max(mut self, value: T) -> Self {
        self.max = Some(value);
        self
    }

    /// Set or replace the value for a category
    pub fn set(&mut self, category: Category, value: T) -> Option<T> {
        self.slot_mut(category).replace(value)
    }

    /// Remove the value for a category
    pub fn remove(&mut self, category: Category) -> Option<T> {
        self.slot_mut(category).take()
    }

    /// Value defined for exactly this category
    pub fn get(&self, category: Category) -> Option<&T> {
        match category {
            Category::Compact => self.compact.as_ref(),
            Category::Regular => self.regular.as_ref(),
            Category::Plus => self.plus.as_ref(),
            Category::Max => self.max.as_ref(),
        }
    }

    /// Whether no category has a value
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Defined values in category declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL
            .into_iter()
            .filter_map(move |category| self.get(category).map(|value| (category, value)))
    }

    /// Value to use on a device of `category`
    ///
    /// Returns the exact entry if present, then the first defined entry in
    /// the category's fallback order, then any defined entry. `None` only
    /// when the mapping is empty.
    pub fn resolve(&self, category: Category) -> Option<&T> {
        self.get(category)
            .or_else(|| {
                category
                    .fallback_order()
                    .into_iter()
                    .find_map(|fallback| self.get(fallback))
            })
            .or_else(|| self.iter().next().map(|(_, value)| value))
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<T> {
        match category {
            Category::Compact => &mut self.compact,
            Category::Regular => &mut self.regular,
            Category::Plus => &mut self.plus,
            Category::Max => &mut self.max,
        }
    }
}

impl<T> FromIterator<(Category, T)> for CategoryValues<T> {
    fn from_iter<I: IntoIterator<Item = (Category, T)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (category, value) in iter {
            values.set(category, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Construction Tests
    // ==========================================================================

    #[test]
    fn test_new_is_empty() {
        let values: CategoryValues<u32> = CategoryValues::new();
        assert!(values.is_empty());
        assert_eq!(values.iter().count(), 0);
    }

    #[test]
    fn test_builder() {
        let values = CategoryValues::new().compact(50).max(70);
        assert_eq!(values.get(Category::Compact), Some(&50));
        assert_eq!(values.get(Category::Regular), None);
        assert_eq!(values.get(Category::Plus), None);
        assert_eq!(values.get(Category::Max), Some(&70));
        assert!(!values.is_empty());
    }

    #[test]
    fn test_set_and_remove() {
        let mut values = CategoryValues::all(1, 2, 3, 4);
        assert_eq!(values.set(Category::Plus, 30), Some(3));
        assert_eq!(values.get(Category::Plus), Some(&30));
        assert_eq!(values.remove(Category::Regular), Some(2));
        assert_eq!(values.remove(Category::Regular), None);
    }

    #[test]
    fn test_from_iter() {
        let values: CategoryValues<&str> =
            [(Category::Max, "wide"), (Category::Compact, "narrow")].into_iter().collect();
        let defined: Vec<_> = values.iter().collect();
        assert_eq!(defined, vec![(Category::Compact, &"narrow"), (Category::Max, &"wide")]);
    }

    // ==========================================================================
    // Resolution Tests
    // ==========================================================================

    #[test]
    fn test_resolve_exact() {
        let values = CategoryValues::all(140, 160, 180, 200);
        assert_eq!(values.resolve(Category::Compact), Some(&140));
        assert_eq!(values.resolve(Category::Regular), Some(&160));
        assert_eq!(values.resolve(Category::Plus), Some(&180));
        assert_eq!(values.resolve(Category::Max), Some(&200));
    }

    #[test]
    fn test_resolve_plus_falls_back_to_regular() {
        let values = CategoryValues::new().compact(1).regular(2);
        assert_eq!(values.resolve(Category::Plus), Some(&2));
    }

    #[test]
    fn test_resolve_fallback_chains() {
        let compact_and_max = CategoryValues::new().compact("c").max("m");
        assert_eq!(compact_and_max.resolve(Category::Regular), Some(&"c"));
        assert_eq!(compact_and_max.resolve(Category::Plus), Some(&"m"));

        let plus_only = CategoryValues::new().plus("p");
        assert_eq!(plus_only.resolve(Category::Compact), Some(&"p"));
        assert_eq!(plus_only.resolve(Category::Max), Some(&"p"));

        let regular_and_max = CategoryValues::new().regular("r").max("m");
        assert_eq!(regular_and_max.resolve(Category::Compact), Some(&"r"));
    }

    #[test]
    fn test_resolve_single_value_always_found() {
        for defined in Category::ALL {
            let values: CategoryValues<Category> = [(defined, defined)].into_iter().collect();
            for current in Category::ALL {
                assert_eq!(values.resolve(current), Some(&defined));
            }
        }
    }

    #[test]
    fn test_resolve_empty() {
        let values: CategoryValues<u32> = CategoryValues::default();
        for category in Category::ALL {
            assert_eq!(values.resolve(category), None);
        }
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_deserialize_partial_mapping() {
        let values: CategoryValues<u32> =
            serde_json::from_str(r#"{"compact": 18, "max": 24}"#).unwrap();
        assert_eq!(values, CategoryValues::new().compact(18).max(24));
    }

    #[test]
    fn test_deserialize_null_is_undefined() {
        let values: CategoryValues<u32> =
            serde_json::from_str(r#"{"compact": null, "regular": 20}"#).unwrap();
        assert_eq!(values.get(Category::Compact), None);
        assert_eq!(values.resolve(Category::Compact), Some(&20));
    }

    #[test]
    fn test_serialize_skips_undefined() {
        let values = CategoryValues::new().regular(16);
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"regular":16}"#);
    }
}
