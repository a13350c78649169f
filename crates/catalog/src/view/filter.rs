//! Catalog filtering and pagination.

use vitrine_core::{CatalogPage, FilterCriteria, PAGE_SIZE, Product};

/// Apply the filter criteria to a product collection.
///
/// The three filters - case-insensitive substring query over title and
/// description, exact category slug, inclusive date range - compose by
/// intersection, so their order is immaterial.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let query = criteria.query.trim().to_lowercase();

    products
        .iter()
        .filter(|product| {
            query.is_empty()
                || product.title.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
        })
        .filter(|product| {
            criteria
                .category
                .as_ref()
                .is_none_or(|category| product.category == *category)
        })
        .filter(|product| {
            criteria
                .date_range
                .is_none_or(|range| range.contains(product.date_added))
        })
        .collect()
}

/// Slice one 1-indexed page out of a filtered collection.
///
/// An out-of-range page yields an empty slice rather than an error; the
/// caller is responsible for resetting to page 1 when criteria change.
#[must_use]
pub fn paginate(filtered: &[&Product], page: u32) -> CatalogPage {
    let page = page.max(1);
    let total_items = filtered.len();
    let total_pages = u32::try_from(total_items.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX);

    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(PAGE_SIZE);
    let items = filtered
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .map(|product| (*product).clone())
        .collect();

    CatalogPage {
        items,
        page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use vitrine_core::DateRange;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn product(id: u64, title: &str, category: &str, date_added: NaiveDate) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: format!("Description of {title}"),
            price: "10.00".parse().unwrap(),
            discount_percentage: 0.0,
            rating: 4.0,
            stock: 10,
            brand: None,
            category: category.to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
            date_added,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", "clothing", day(1)),
            product(2, "Blue Hat", "accessories", day(2)),
        ]
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let products = sample();
        for query in ["red", "RED", "Red"] {
            let criteria = FilterCriteria {
                query: query.to_string(),
                ..FilterCriteria::default()
            };
            let hits = filter_products(&products, &criteria);
            assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        }
    }

    #[test]
    fn test_query_matches_description_too() {
        let products = sample();
        let criteria = FilterCriteria {
            query: "of blue hat".to_string(),
            ..FilterCriteria::default()
        };
        let hits = filter_products(&products, &criteria);
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let products = sample();
        let criteria = FilterCriteria {
            category: Some("accessories".to_string()),
            ..FilterCriteria::default()
        };
        let hits = filter_products(&products, &criteria);
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_filters_intersect() {
        let products = sample();
        let criteria = FilterCriteria {
            query: "red".to_string(),
            category: Some("accessories".to_string()),
            ..FilterCriteria::default()
        };
        assert!(filter_products(&products, &criteria).is_empty());
    }

    #[test]
    fn test_date_range_keeps_only_days_inside() {
        let products = vec![
            product(1, "A", "c", day(1)),
            product(2, "B", "c", day(3)),
            product(3, "C", "c", day(5)),
        ];
        let criteria = FilterCriteria {
            date_range: Some(DateRange {
                from: day(2),
                to: Some(day(4)),
            }),
            ..FilterCriteria::default()
        };
        let hits = filter_products(&products, &criteria);
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_empty_criteria_keep_everything() {
        let products = sample();
        assert_eq!(
            filter_products(&products, &FilterCriteria::default()).len(),
            2
        );
    }

    #[test]
    fn test_pagination_splits_25_items_into_10_10_5() {
        let products: Vec<Product> = (1..=25)
            .map(|id| product(id, &format!("Item {id}"), "c", day(1)))
            .collect();
        let filtered = filter_products(&products, &FilterCriteria::default());

        let sizes: Vec<usize> = (1..=4)
            .map(|page| paginate(&filtered, page).items.len())
            .collect();
        assert_eq!(sizes, vec![10, 10, 5, 0]);

        let page1 = paginate(&filtered, 1);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.total_items, 25);
        assert_eq!(page1.items.first().unwrap().id, 1);

        let page3 = paginate(&filtered, 3);
        assert_eq!(page3.items.first().unwrap().id, 21);
    }

    #[test]
    fn test_pagination_of_empty_collection() {
        let page = paginate(&[], 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn test_page_zero_is_clamped_to_one() {
        let products = sample();
        let filtered = filter_products(&products, &FilterCriteria::default());
        let page = paginate(&filtered, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 2);
    }
}
