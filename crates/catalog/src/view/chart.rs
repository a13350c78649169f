//! Products-over-time chart series.

use std::collections::BTreeMap;

use vitrine_core::{ChartPoint, Product};

/// Bucket products by the calendar day they were added and produce a
/// chronologically ascending series with per-day counts and a cumulative
/// running total.
#[must_use]
pub fn chart_series(products: &[Product]) -> Vec<ChartPoint> {
    let mut buckets: BTreeMap<_, usize> = BTreeMap::new();
    for product in products {
        *buckets.entry(product.date_added).or_default() += 1;
    }

    let mut cumulative_total = 0;
    buckets
        .into_iter()
        .map(|(date, added_that_day)| {
            cumulative_total += added_that_day;
            ChartPoint {
                date,
                cumulative_total,
                added_that_day,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn product(id: u64, date_added: NaiveDate) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price: "1.00".parse().unwrap(),
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: None,
            category: "misc".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
            date_added,
        }
    }

    #[test]
    fn test_counts_2_1_3_accumulate_to_2_3_6() {
        // Deliberately out of chronological order on input.
        let products = vec![
            product(1, day(5)),
            product(2, day(5)),
            product(3, day(9)),
            product(4, day(14)),
            product(5, day(14)),
            product(6, day(14)),
        ];

        let series = chart_series(&products);

        assert_eq!(
            series.iter().map(|p| p.date).collect::<Vec<_>>(),
            vec![day(5), day(9), day(14)]
        );
        assert_eq!(
            series.iter().map(|p| p.added_that_day).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );
        assert_eq!(
            series.iter().map(|p| p.cumulative_total).collect::<Vec<_>>(),
            vec![2, 3, 6]
        );
    }

    #[test]
    fn test_empty_collection_gives_empty_series() {
        assert!(chart_series(&[]).is_empty());
    }

    #[test]
    fn test_final_cumulative_equals_collection_size() {
        let products: Vec<Product> = (0..37)
            .map(|id| product(id, day(1 + u32::try_from(id % 20).unwrap())))
            .collect();
        let series = chart_series(&products);
        assert_eq!(series.last().unwrap().cumulative_total, 37);
    }
}
