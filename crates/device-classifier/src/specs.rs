//! Reference device table
//!
//! Known screen heights per category, in logical points, plus the models
//! that report them. The table is scanned in category order and the first
//! reference height within tolerance wins, so an overlap between two rows
//! resolves to the earlier row regardless of which height is closer.

use crate::category::Category;

/// Default match tolerance in logical points
pub const DEFAULT_TOLERANCE: u32 = 15;

/// Reference heights of the iPhone 17 lineup
pub const IPHONE_17_SERIES_HEIGHTS: [u32; 4] = [844, 852, 932, 956];

/// Static description of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    /// Category this row describes
    pub category: Category,
    /// Known reference heights
    pub heights: &'static [u32],
    /// Default logical height
    pub logical_height: u32,
    /// Valid display scale factors
    pub scale_factors: &'static [u32],
    /// Models reporting one of the reference heights
    pub models: &'static [&'static str],
}

impl CategorySpec {
    /// Whether `height` is within `tolerance` of any reference height
    pub fn matches(&self, height: u32, tolerance: u32) -> bool {
        within_tolerance(height, self.heights, tolerance)
    }
}

/// Reference table, indexed by category declaration order
pub static CATEGORY_SPECS: [CategorySpec; 4] = [
    CategorySpec {
        category: Category::Compact,
        heights: &[667, 568, 480],
        logical_height: 667,
        scale_factors: &[2, 3],
        models: &["iPhone SE", "iPhone 8", "iPhone 7", "iPhone 6s", "iPhone 6"],
    },
    CategorySpec {
        category: Category::Regular,
        heights: &[852, 844, 812],
        logical_height: 844,
        scale_factors: &[2, 3],
        models: &[
            "iPhone 17",
            "iPhone 17 Pro",
            "iPhone 16",
            "iPhone 15",
            "iPhone 14",
            "iPhone 13",
            "iPhone 12",
            "iPhone X",
            "iPhone XS",
            "iPhone 11 Pro",
        ],
    },
    CategorySpec {
        category: Category::Plus,
        heights: &[932, 926, 896],
        logical_height: 932,
        scale_factors: &[3],
        models: &[
            "iPhone 17 Air",
            "iPhone 16 Plus",
            "iPhone 15 Plus",
            "iPhone 14 Plus",
            "iPhone 13 Pro Max",
            "iPhone 12 Pro Max",
            "iPhone 11 Pro Max",
        ],
    },
    CategorySpec {
        category: Category::Max,
        heights: &[956],
        logical_height: 956,
        scale_factors: &[3],
        models: &["iPhone 17 Pro Max", "iPhone 16 Pro Max"],
    },
];

impl Category {
    /// Reference table row for this category
    pub fn spec(&self) -> &'static CategorySpec {
        &CATEGORY_SPECS[*self as usize]
    }
}

/// Classify a display height
///
/// Scans the reference table first and falls back to plain height ranges
/// when no reference height is within `tolerance`.
pub fn categorize(height: u32, tolerance: u32) -> Category {
    CATEGORY_SPECS
        .iter()
        .find(|spec| spec.matches(height, tolerance))
        .map(|spec| spec.category)
        .unwrap_or_else(|| Category::from_height_range(height))
}

/// Whether `height` is within `tolerance` of any of `references`
pub fn within_tolerance(height: u32, references: &[u32], tolerance: u32) -> bool {
    references
        .iter()
        .any(|reference| height.abs_diff(*reference) < tolerance)
}
