//! Catalog view handlers: filtered/paginated listings and the chart series.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use vitrine_core::{CatalogPage, ChartPoint, DateRange, FilterCriteria};

use crate::error::Result;
use crate::state::AppState;
use crate::view::{chart_series, filter_products, paginate};

/// Query parameters for the catalog listing.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl CatalogQuery {
    /// Lower the query parameters into filter criteria.
    ///
    /// `category=all` is the no-filter sentinel; a `to` without a `from` is
    /// ignored, matching the range semantics (the range only exists once its
    /// start is chosen).
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.unwrap_or_default(),
            category: self.category.filter(|c| c != "all"),
            date_range: self.from.map(|from| DateRange { from, to: self.to }),
        }
    }
}

/// `GET /catalog` - one page of the filtered product collection.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<CatalogPage>> {
    let products = state.upstream().fetch_products().await?;
    let page = params.page.unwrap_or(1);
    let criteria = params.into_criteria();

    let filtered = filter_products(&products, &criteria);
    Ok(Json(paginate(&filtered, page)))
}

/// `GET /catalog/chart` - cumulative products-over-time series.
pub async fn chart(State(state): State<AppState>) -> Result<Json<Vec<ChartPoint>>> {
    let products = state.upstream().fetch_products().await?;
    Ok(Json(chart_series(&products)))
}
