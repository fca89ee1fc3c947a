use std::cmp::Ordering;

use crate::i18n::Collator;
use crate::logic::metrics::is_critical_shortage;
use crate::state::{Product, SortMode};

/// Order `true` before `false`.
fn urgent_first(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

/// What: Compare two products by category only.
///
/// Inputs:
/// - `a`, `b`: Products to compare
/// - `collator`: Locale-aware comparison of the category labels
#[must_use]
pub fn category_cmp(a: &Product, b: &Product, collator: &Collator) -> Ordering {
    collator.compare(&a.category, &b.category)
}

/// What: Compare two products by urgency.
///
/// Inputs:
/// - `a`, `b`: Products to compare
/// - `collator`: Used for the category tiebreak
///
/// Output:
/// - `Less` when `a` is more urgent than `b`
///
/// Details:
/// - Tiers, first disagreement wins, `true` sorts first:
///   critical shortage, empty display, display below threshold
/// - Category order breaks the remaining ties
#[must_use]
pub fn priority_cmp(a: &Product, b: &Product, collator: &Collator) -> Ordering {
    let critical = |p: &Product| {
        is_critical_shortage(p.shown_on_display, p.in_store_backroom, p.sales_per_hour)
    };
    let empty_display = |p: &Product| p.shown_on_display == 0;
    let low_display = |p: &Product| p.shown_on_display < p.minimum_threshold;

    urgent_first(critical(a), critical(b))
        .then_with(|| urgent_first(empty_display(a), empty_display(b)))
        .then_with(|| urgent_first(low_display(a), low_display(b)))
        .then_with(|| category_cmp(a, b, collator))
}

/// What: Return the products in display order for `mode`.
///
/// Inputs:
/// - `products`: Current collection; left untouched
/// - `mode`: Fixed position (category) or priority
/// - `collator`: Locale-aware category comparison
///
/// Output:
/// - New vector with the same products reordered
///
/// Details:
/// - The sort is stable: products that compare equal keep their input order
pub fn sorted_products(products: &[Product], mode: SortMode, collator: &Collator) -> Vec<Product> {
    let mut ordered = products.to_vec();
    match mode {
        SortMode::FixedPosition => ordered.sort_by(|a, b| category_cmp(a, b, collator)),
        SortMode::Priority => ordered.sort_by(|a, b| priority_cmp(a, b, collator)),
    }
    ordered
}
