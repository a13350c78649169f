//! Derived-view types: filter criteria, catalog pages, chart points.
//!
//! These are the inputs and outputs of the pure view pipeline in the catalog
//! crate. Criteria are ephemeral - owned by whoever is asking for a view,
//! never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::product::Product;

/// Fixed catalog page size.
pub const PAGE_SIZE: usize = 10;

/// An inclusive calendar-day range.
///
/// A missing `to` collapses the range to the single day `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Whether `date` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to.unwrap_or(self.from)
    }
}

/// Filter criteria for the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and description.
    /// Empty means no text filter.
    pub query: String,
    /// Exact category slug. `None` means all categories.
    pub category: Option<String>,
    /// Restrict to products whose `date_added` falls in the range.
    pub date_range: Option<DateRange>,
}

/// One page of a filtered catalog view. Pages are 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: usize,
}

/// One bucket of the products-over-time chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Running total of products added up to and including this day.
    pub cumulative_total: usize,
    pub added_that_day: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_date_range_is_inclusive_on_both_bounds() {
        let range = DateRange {
            from: day(3),
            to: Some(day(5)),
        };
        assert!(range.contains(day(3)));
        assert!(range.contains(day(4)));
        assert!(range.contains(day(5)));
        assert!(!range.contains(day(2)));
        assert!(!range.contains(day(6)));
    }

    #[test]
    fn test_date_range_without_to_is_a_single_day() {
        let range = DateRange {
            from: day(10),
            to: None,
        };
        assert!(range.contains(day(10)));
        assert!(!range.contains(day(9)));
        assert!(!range.contains(day(11)));
    }
}
