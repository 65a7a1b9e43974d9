//! Device size categories
//!
//! Four ordinal buckets used to pick layout constants. Declaration order is
//! significant: it is the order the reference height table is scanned in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown device category: {0}")]
pub struct ParseCategoryError(pub String);

/// Device size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// iPhone SE, 8, 7, 6s, 6
    Compact,
    /// iPhone 17, 17 Pro, 16, 15, 14, 13, 12, X, XS, 11 Pro
    Regular,
    /// iPhone 17 Air, Plus models, Pro Max 11-13
    Plus,
    /// iPhone 17 Pro Max, 16 Pro Max
    Max,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 4] = [
        Category::Compact,
        Category::Regular,
        Category::Plus,
        Category::Max,
    ];

    /// Lowercase name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Compact => "compact",
            Category::Regular => "regular",
            Category::Plus => "plus",
            Category::Max => "max",
        }
    }

    /// Categories consulted, in order, when no value is given for this one
    pub fn fallback_order(&self) -> [Category; 3] {
        match self {
            Category::Compact => [Category::Regular, Category::Plus, Category::Max],
            Category::Regular => [Category::Plus, Category::Compact, Category::Max],
            Category::Plus => [Category::Max, Category::Regular, Category::Compact],
            Category::Max => [Category::Plus, Category::Regular, Category::Compact],
        }
    }

    /// Size multiplier applied by scaling helpers
    pub fn multiplier(&self) -> f64 {
        match self {
            Category::Compact => 0.85,
            Category::Regular => 1.0,
            Category::Plus => 1.1,
            Category::Max => 1.15,
        }
    }

    /// Bucket a height by range alone, ignoring the reference table
    pub fn from_height_range(height: u32) -> Self {
        if height <= 667 {
            Category::Compact
        } else if height <= 852 {
            Category::Regular
        } else if height <= 932 {
            Category::Plus
        } else {
            Category::Max
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

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Category::Compact),
            "regular" => Ok(Category::Regular),
            "plus" => Ok(Category::Plus),
            "max" => Ok(Category::Max),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
