//! Derived-view pipeline.
//!
//! Pure computations over the fetched product collection. Nothing in here
//! owns state: every output is reconstructible at any time from
//! (products, criteria) alone.

pub mod chart;
pub mod dates;
pub mod filter;

pub use chart::chart_series;
pub use dates::{date_added_for, date_added_today};
pub use filter::{filter_products, paginate};
