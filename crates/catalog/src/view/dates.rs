//! Deterministic pseudo-dates for products.
//!
//! The upstream API carries no creation timestamp, so each product gets a
//! date derived from its id: a sine-scrambled fraction of the id picks an
//! offset of 0-179 days back from the anchor day. Same id + same anchor day
//! always gives the same date. The anchor advances with the calendar day,
//! which shifts the whole distribution daily - an accepted property of the
//! scheme, not something to compensate for.

use chrono::{Days, Local, NaiveDate};

const SEED_MULTIPLIER: f64 = 12345.0;
const SPREAD_DAYS: f64 = 180.0;

/// The derived date for `id`, anchored at `today`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn date_added_for(id: u64, today: NaiveDate) -> NaiveDate {
    let seed = id as f64 * SEED_MULTIPLIER;
    let fraction = seed.sin().abs() * 10_000.0;
    let days_ago = (fraction % SPREAD_DAYS).floor() as u64;
    today - Days::new(days_ago)
}

/// The derived date for `id`, anchored at the local calendar day.
#[must_use]
pub fn date_added_today(id: u64) -> NaiveDate {
    date_added_for(id, Local::now().date_naive())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_same_id_same_day_gives_same_date() {
        for id in [1, 2, 17, 194, 100_000] {
            assert_eq!(date_added_for(id, anchor()), date_added_for(id, anchor()));
        }
    }

    #[test]
    fn test_offset_stays_within_the_spread() {
        for id in 0..500 {
            let date = date_added_for(id, anchor());
            let days_ago = (anchor() - date).num_days();
            assert!((0..180).contains(&days_ago), "id {id} gave offset {days_ago}");
        }
    }

    #[test]
    fn test_different_ids_spread_across_days() {
        let distinct: std::collections::HashSet<_> =
            (1..100).map(|id| date_added_for(id, anchor())).collect();
        // The scramble should not collapse a hundred ids onto a handful of days.
        assert!(distinct.len() > 20, "only {} distinct dates", distinct.len());
    }

    #[test]
    fn test_anchor_shift_moves_dates_with_it() {
        let later = anchor() + Days::new(1);
        for id in [3, 44, 91] {
            assert_eq!(
                date_added_for(id, later) - date_added_for(id, anchor()),
                chrono::Duration::days(1)
            );
        }
    }
}
