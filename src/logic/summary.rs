//! Collection-wide totals for the dashboard header.

use crate::logic::metrics::derive_metrics;
use crate::state::Product;

/// Totals across the current product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    /// Units across display, backroom and transit.
    pub total_units: u64,
    /// Units on display.
    pub on_display_units: u64,
    /// Units in transit.
    pub in_delivery_units: u64,
    /// Products whose display stock is below their threshold.
    pub low_stock_count: usize,
    /// Products flagged as a critical shortage.
    pub critical_count: usize,
}

/// What: Aggregate the header figures.
///
/// Inputs:
/// - `products`: Current collection
///
/// Output:
/// - `InventorySummary`; all zero for an empty collection
#[must_use]
pub fn summarize(products: &[Product]) -> InventorySummary {
    products
        .iter()
        .fold(InventorySummary::default(), |mut acc, product| {
            let metrics = derive_metrics(product);
            acc.total_units += metrics.total;
            acc.on_display_units += u64::from(product.shown_on_display);
            acc.in_delivery_units += u64::from(product.in_delivery);
            acc.low_stock_count += usize::from(metrics.flags.low_display);
            acc.critical_count += usize::from(metrics.flags.critical_shortage);
            acc
        })
}
