//! Item category enumeration.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Category`] from a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0} (expected one of Electronics, Clothing, Food, Other)")]
pub struct ParseCategoryError(pub String);

/// Fixed set of inventory item categories.
///
/// Serializes to the exact display name (e.g. `"Electronics"`), matching
/// the persisted interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Electronics, Self::Clothing, Self::Food, Self::Other];

    /// Display name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Food => "Food",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parse a category name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "electronics" => Ok(Self::Electronics),
            "clothing" => Ok(Self::Clothing),
            "food" => Ok(Self::Food),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("food".parse::<Category>(), Ok(Category::Food));
        assert_eq!("ELECTRONICS".parse::<Category>(), Ok(Category::Electronics));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("gadgets".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::Clothing).expect("serialize");
        assert_eq!(json, "\"Clothing\"");
        let back: Category = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Category::Clothing);
    }
}
