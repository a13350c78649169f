//! Core types for Vitrine.
//!
//! This module provides the domain types shared between the catalog server
//! and its tests.

pub mod cart;
pub mod product;
pub mod theme;
pub mod view;

pub use cart::{CartEntry, CartItem};
pub use product::{Product, ProductsPage, RawProduct};
pub use theme::{Theme, ThemeParseError};
pub use view::{CatalogPage, ChartPoint, DateRange, FilterCriteria, PAGE_SIZE};
