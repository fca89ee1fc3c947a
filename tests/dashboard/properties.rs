//! Property-based tests for the metric derivation and the priority order.
//!
//! Guarantees checked here:
//! 1. Stock shares add up to 100 % whenever there is stock at all
//! 2. The forecast never increases with the horizon
//! 3. Critical shortage holds exactly when three hours of sales exceed local stock
//! 4. Priority order is a consistent total preorder and sorting keeps every product

use std::cmp::Ordering;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use shelfwatch::i18n::{Collator, Language, format_count};
use shelfwatch::logic::{StockMetrics, priority_cmp, sorted_products};
use shelfwatch::state::{Product, SortMode};

// =============================================================================
// Strategy helpers
// =============================================================================

/// Sales rates with a realistic spread, including zero.
fn rate_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..200.0f64]
}

/// Products over a small category set so ties are common.
fn product_strategy() -> impl Strategy<Value = Product> {
    (
        0u32..60,
        0u32..60,
        0u32..60,
        rate_strategy(),
        0u32..20,
        prop::sample::select(vec!["Beverages", "Food", "Snacks", "Frozen"]),
        0u64..1_000,
    )
        .prop_map(|(shown, backroom, delivery, rate, threshold, category, id)| Product {
            id: id.to_string(),
            product_id: id,
            name_ja: format!("商品{id}"),
            name_en: format!("Item {id}"),
            category: category.to_string(),
            shown_on_display: shown,
            in_store_backroom: backroom,
            in_delivery: delivery,
            minimum_threshold: threshold,
            sales_per_hour: rate,
            last_updated: Utc.timestamp_opt(0, 0).unwrap(),
        })
}

// =============================================================================
// Metrics
// =============================================================================

proptest! {
    #[test]
    fn prop_shares_sum_to_hundred(
        shown in 0u32..100_000,
        backroom in 0u32..100_000,
        delivery in 0u32..100_000,
        rate in rate_strategy(),
    ) {
        let m = StockMetrics::from_counters(shown, backroom, delivery, rate, 10);
        let sum = m.shown_pct + m.backroom_pct + m.delivery_pct;
        if m.total == 0 {
            prop_assert!(sum.abs() < f64::EPSILON);
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
        }
    }

    #[test]
    fn prop_forecast_non_increasing(shown in 0u32..10_000, rate in rate_strategy()) {
        let m = StockMetrics::from_counters(shown, 0, 0, rate, 10);
        prop_assert!(m.remaining[0] >= m.remaining[1]);
        prop_assert!(m.remaining[1] >= m.remaining[2]);
        prop_assert!(m.remaining[0] <= f64::from(shown));
    }

    #[test]
    fn prop_critical_matches_three_hour_demand(
        shown in 0u32..1_000,
        backroom in 0u32..1_000,
        rate in rate_strategy(),
    ) {
        let m = StockMetrics::from_counters(shown, backroom, 5, rate, 10);
        let demand = rate * 3.0;
        let stock = f64::from(shown) + f64::from(backroom);
        prop_assert_eq!(m.flags.critical_shortage, demand > stock);
    }

    #[test]
    fn prop_hours_until_empty_sentinels(shown in 0u32..1_000, rate in rate_strategy()) {
        let m = StockMetrics::from_counters(shown, 0, 0, rate, 10);
        match (shown, rate > 0.0) {
            (0, _) => {
                prop_assert_eq!(m.hours_until_empty, Some(0.0));
            }
            (_, false) => {
                prop_assert_eq!(m.hours_until_empty, None);
            }
            (_, true) => {
                prop_assert!(m.hours_until_empty.is_some_and(|h| h > 0.0));
            }
        }
    }

    #[test]
    fn prop_format_count_keeps_digits(n in any::<u64>()) {
        let formatted = format_count(n);
        prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        prop_assert!(formatted.split(',').skip(1).all(|group| group.len() == 3));
    }
}

// =============================================================================
// Ordering
// =============================================================================

proptest! {
    #[test]
    fn prop_priority_cmp_antisymmetric(a in product_strategy(), b in product_strategy()) {
        let collator = Collator::for_language(Language::En);
        prop_assert_eq!(
            priority_cmp(&a, &b, &collator),
            priority_cmp(&b, &a, &collator).reverse()
        );
    }

    #[test]
    fn prop_priority_cmp_transitive(
        a in product_strategy(),
        b in product_strategy(),
        c in product_strategy(),
    ) {
        let collator = Collator::for_language(Language::En);
        let le = |x: &Product, y: &Product| priority_cmp(x, y, &collator) != Ordering::Greater;
        if le(&a, &b) && le(&b, &c) {
            prop_assert!(le(&a, &c));
        }
    }

    #[test]
    fn prop_sorted_products_is_ordered_permutation(
        products in prop::collection::vec(product_strategy(), 0..40),
        fixed in any::<bool>(),
    ) {
        let collator = Collator::for_language(Language::Ja);
        let mode = if fixed { SortMode::FixedPosition } else { SortMode::Priority };
        let sorted = sorted_products(&products, mode, &collator);
        prop_assert_eq!(sorted.len(), products.len());

        let mut before: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        let mut after: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        if mode == SortMode::Priority {
            for pair in sorted.windows(2) {
                prop_assert_ne!(priority_cmp(&pair[0], &pair[1], &collator), Ordering::Greater);
            }
        }
        // Sorting an already sorted list changes nothing.
        prop_assert_eq!(sorted_products(&sorted, mode, &collator), sorted);
    }
}
